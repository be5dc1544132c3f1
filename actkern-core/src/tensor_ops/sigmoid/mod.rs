mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SigmoidKernelOp;

/// [Sigmoid](https://en.wikipedia.org/wiki/Sigmoid_function). `1 / (1 + exp(-x))`.
///
/// The derivative is `out * (1 - out)`, so the backward pass only reads `Out`.
impl Activation for SigmoidKernelOp {
    const NAME: &'static str = "sigmoid";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}
