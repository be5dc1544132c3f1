mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct TanhShrinkKernelOp;

/// `x - tanh(x)`. The derivative is `tanh(x)^2`.
impl Activation for TanhShrinkKernelOp {
    const NAME: &'static str = "tanh_shrink";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_tanh_shrink() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.0, -1.0, 0.0, 1.0, 2.0]);
        let (r, g) = forward_backward::<TanhShrinkKernelOp>(&x, &AttrTable::new());
        assert_close_to_literal!(r, [-1.03597242, -0.238405844, 0.0, 0.238405844, 1.03597242]);
        assert_close_to_literal!(g, [0.929349175, 0.580025658, 0.0, 0.580025658, 0.929349175]);
    }
}
