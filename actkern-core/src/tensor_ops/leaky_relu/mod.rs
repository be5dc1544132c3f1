mod cpu_kernel;

use super::ops::{Activation, DoubleGradActivation, DoubleGradOperands};
use crate::tensor_ops::{Attributes, ForwardDependency};

/// `max(x, alpha * x)`, for `alpha` below one.
///
/// The derivative is `1` where `out >= 0` and `alpha` elsewhere. The second
/// order pass uses the standard operand layout.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct LeakyReluKernelOp {
    #[attr]
    pub alpha: f32,
}

impl Activation for LeakyReluKernelOp {
    const NAME: &'static str = "leaky_relu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}

impl DoubleGradActivation for LeakyReluKernelOp {
    const DOUBLE_GRAD: DoubleGradOperands = DoubleGradOperands::Standard;
}
