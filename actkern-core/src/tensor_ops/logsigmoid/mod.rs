mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// `log(sigmoid(x)) = -log(1 + exp(-x))`, evaluated with the log-sum-exp trick
/// so that large negative inputs don't overflow.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct LogSigmoidKernelOp;

impl Activation for LogSigmoidKernelOp {
    const NAME: &'static str = "logsigmoid";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

#[cfg(test)]
mod tests {
    use crate::{tensor_ops::*, tests::*};

    #[test]
    fn test_logsigmoid() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-2.0, -1.0, 0.0, 1.0, 2.0]);
        let (r, g) = forward_backward::<LogSigmoidKernelOp>(&x, &AttrTable::new());
        assert_close_to_literal!(
            r,
            [-2.12692801, -1.31326169, -0.693147181, -0.313261688, -0.126928011]
        );
        assert_close_to_literal!(g, [0.880797078, 0.731058579, 0.5, 0.268941421, 0.119202922]);
    }

    #[test]
    fn test_logsigmoid_large_magnitude() {
        let dev: TestDevice = Default::default();
        let x = tensor(&dev, [-50.0, -1.0, 0.0, 1.0, 50.0]);
        let (r, g) = forward_backward::<LogSigmoidKernelOp>(&x, &AttrTable::new());
        assert!(r.as_vec().iter().all(|v| v.is_finite()));
        assert_close_to_literal!(r, [-50.0, -1.31326169, -0.693147181, -0.313261688, -0.0], 1e-3);
        assert_close_to_literal!(g, [1.0, 0.731058579, 0.5, 0.268941421, 1.92874985e-22], 1e-3);
    }
}
