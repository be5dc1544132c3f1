mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct RsqrtKernelOp;

/// Reciprocal square root. `1 / sqrt(x)`
///
/// The derivative is `-0.5 * out^3`.
impl Activation for RsqrtKernelOp {
    const NAME: &'static str = "rsqrt";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}
