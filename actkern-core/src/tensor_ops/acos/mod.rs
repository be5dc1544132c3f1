mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct AcosKernelOp;

/// Inverse cosine. Inputs outside `[-1, 1]` produce `NaN`.
impl Activation for AcosKernelOp {
    const NAME: &'static str = "acos";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
