mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// `ln(1 + e^x)` with `x` first clamped to `[-threshold, threshold]`.
///
/// The derivative is `1 - e^-out` while `out` stays inside the clamp, and `0`
/// once it reaches a bound.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SoftReluKernelOp {
    #[attr]
    pub threshold: f32,
}

impl Activation for SoftReluKernelOp {
    const NAME: &'static str = "soft_relu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_soft_relu() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-3.0, -1.0, 0.0, 1.0, 3.0]);
        let attrs = AttrTable::new().with("threshold", 2.0);
        let (r, g) = forward_backward::<SoftReluKernelOp>(&x, &attrs);
        assert_close_to_literal!(
            r,
            [0.126928011, 0.313261688, 0.693147181, 1.31326169, 2.12692801]
        );
        assert_close_to_literal!(g, [0.119202922, 0.268941421, 0.5, 0.731058579, 0.0]);
    }
}
