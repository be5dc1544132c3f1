mod cpu_kernel;

use super::ops::{Activation, DoubleGradActivation, DoubleGradOperands};
use crate::tensor_ops::{Attributes, ForwardDependency};

/// `x^2`. The derivative is `2 * x`.
///
/// Safe on sparse rows. The second order pass takes `DOut` as an input and
/// produces `DDOut = 2 * ddx * x` and `DX = 2 * ddx * dout`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SquareKernelOp;

impl Activation for SquareKernelOp {
    const NAME: &'static str = "square";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
    const SPARSE_SAFE: bool = true;
}

impl DoubleGradActivation for SquareKernelOp {
    const DOUBLE_GRAD: DoubleGradOperands = DoubleGradOperands::GradOutAsInput;
}
