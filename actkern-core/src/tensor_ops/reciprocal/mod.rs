mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct ReciprocalKernelOp;

/// `1 / x`. The derivative is `-out^2`. Zero maps to infinity.
impl Activation for ReciprocalKernelOp {
    const NAME: &'static str = "reciprocal";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}
