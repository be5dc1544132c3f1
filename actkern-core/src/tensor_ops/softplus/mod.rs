mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SoftplusKernelOp;

/// `ln(1 + e^x)`, evaluated as a shifted log-sum-exp so large inputs don't
/// overflow. The derivative is `sigmoid(x)`.
impl Activation for SoftplusKernelOp {
    const NAME: &'static str = "softplus";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
