mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct ExpKernelOp;

/// [Exponential function](https://en.wikipedia.org/wiki/Exponential_function). `e^x`
///
/// Its own derivative, so the backward pass reads `Out`.
impl Activation for ExpKernelOp {
    const NAME: &'static str = "exp";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}
