mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// ReLU capped at `threshold`, which is usually `6`. The derivative is `1`
/// where `0 < out < threshold`.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct Relu6KernelOp {
    #[attr]
    pub threshold: f32,
}

impl Activation for Relu6KernelOp {
    const NAME: &'static str = "relu6";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_relu6() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.0, 0.0, 3.0, 6.0, 7.5]);
        let attrs = AttrTable::new().with("threshold", 6.0);
        let (r, g) = forward_backward::<Relu6KernelOp>(&x, &attrs);
        assert_close_to_literal!(r, [0.0, 0.0, 3.0, 6.0, 6.0]);
        assert_close_to_literal!(g, [0.0, 0.0, 1.0, 0.0, 0.0]);
    }
}
