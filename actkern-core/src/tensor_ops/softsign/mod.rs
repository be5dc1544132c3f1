mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SoftsignKernelOp;

/// `x / (1 + |x|)`. The derivative is `1 / (1 + |x|)^2`.
impl Activation for SoftsignKernelOp {
    const NAME: &'static str = "softsign";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
