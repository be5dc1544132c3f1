mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// Scaled tanh: `scale_b * tanh(scale_a * x)`.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct STanhKernelOp {
    #[attr]
    pub scale_a: f32,
    #[attr]
    pub scale_b: f32,
}

impl Activation for STanhKernelOp {
    const NAME: &'static str = "stanh";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
