mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct GeluKernelOp;

/// [Gaussian Error Linear Unit (GeLU)](https://paperswithcode.com/method/gelu), computed
/// exactly with the error function:
/// ```text
/// 0.5 * x * (1.0 + erf(x / 2.0.sqrt()))
/// ```
///
/// The derivative is
/// ```text
/// 0.5 * (1.0 + erf(x / 2.0.sqrt())) + x * exp(-x^2 / 2) / (2π).sqrt()
/// ```
///
/// With the `cblas` feature both passes are evaluated in stages over whole
/// slices through [crate::dtypes::VecMath]. The result matches the scalar
/// formula up to rounding.
impl Activation for GeluKernelOp {
    const NAME: &'static str = "gelu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
