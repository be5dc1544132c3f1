mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct CeilKernelOp;

/// Rounds towards positive infinity. The gradient is zero everywhere.
impl Activation for CeilKernelOp {
    const NAME: &'static str = "ceil";
    const DEPS: ForwardDependency = ForwardDependency::NoDeps;
}
