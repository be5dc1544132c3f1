mod cpu_kernel;

use super::ops::{Activation, DoubleGradActivation, DoubleGradOperands};
use crate::tensor_ops::{Attributes, ForwardDependency};

/// [Exponential Linear Unit](https://arxiv.org/abs/1511.07289).
/// `max(x, 0) + min(alpha * (e^x - 1), 0)`
///
/// The second order pass takes `DOut` as an input.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct EluKernelOp {
    #[attr]
    pub alpha: f32,
}

impl Activation for EluKernelOp {
    const NAME: &'static str = "elu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

impl DoubleGradActivation for EluKernelOp {
    const DOUBLE_GRAD: DoubleGradOperands = DoubleGradOperands::GradOutAsInput;
}
