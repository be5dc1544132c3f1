mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct FloorKernelOp;

/// Rounds towards negative infinity. The gradient is zero everywhere.
impl Activation for FloorKernelOp {
    const NAME: &'static str = "floor";
    const DEPS: ForwardDependency = ForwardDependency::NoDeps;
}
