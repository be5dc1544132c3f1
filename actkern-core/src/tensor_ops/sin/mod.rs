mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SinKernelOp;

/// [Sine function](https://en.wikipedia.org/wiki/Sine_and_cosine).
///
/// The derivative is `cos(x)`.
impl Activation for SinKernelOp {
    const NAME: &'static str = "sin";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
