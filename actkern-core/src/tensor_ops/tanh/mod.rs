mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct TanhKernelOp;

/// [Hyperbolic Tangent (Tanh)](https://en.wikipedia.org/wiki/Hyperbolic_functions).
///
/// The derivative is `1 - out^2`.
impl Activation for TanhKernelOp {
    const NAME: &'static str = "tanh";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}
