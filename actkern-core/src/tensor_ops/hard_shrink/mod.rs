mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// Hard shrinkage: zeroes every value with `|x| <= threshold` and keeps the
/// rest. The derivative is `1` where the value was kept and `0` elsewhere.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct HardShrinkKernelOp {
    #[attr]
    pub threshold: f32,
}

impl Activation for HardShrinkKernelOp {
    const NAME: &'static str = "hard_shrink";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_hard_shrink() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-1.0, 0.3, 0.6]);
        let attrs = AttrTable::new().with("threshold", 0.5);
        let (r, g) = forward_backward::<HardShrinkKernelOp>(&x, &attrs);
        assert_close_to_literal!(r, [-1.0, 0.0, 0.6]);
        assert_close_to_literal!(g, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hard_shrink_boundary_is_zeroed() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-0.5, 0.5, 0.0]);
        let attrs = AttrTable::new().with("threshold", 0.5);
        let (r, g) = forward_backward::<HardShrinkKernelOp>(&x, &attrs);
        assert_close_to_literal!(r, [0.0, 0.0, 0.0]);
        assert_close_to_literal!(g, [0.0, 0.0, 0.0]);
    }
}
