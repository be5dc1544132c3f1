mod cpu_kernel;

use super::ops::{Activation, DoubleGradActivation, DoubleGradOperands};
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SqrtKernelOp;

/// [Square root](https://en.wikipedia.org/wiki/Square_root). `sqrt(x)`
///
/// The derivative is `0.5 / out`. Negative inputs produce `NaN` and zero
/// produces an infinite gradient, as floating point gives.
///
/// Safe on sparse rows. The second order pass takes `DX` as an input and
/// produces `DDOut = 0.5 * ddx / out` and `DOut = -dx * ddx / out`.
impl Activation for SqrtKernelOp {
    const NAME: &'static str = "sqrt";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
    const SPARSE_SAFE: bool = true;
}

impl DoubleGradActivation for SqrtKernelOp {
    const DOUBLE_GRAD: DoubleGradOperands = DoubleGradOperands::GradInAsInput;
}
