mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct AsinKernelOp;

/// Inverse sine. Inputs outside `[-1, 1]` produce `NaN`.
impl Activation for AsinKernelOp {
    const NAME: &'static str = "asin";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
