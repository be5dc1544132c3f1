mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// Piecewise linear sigmoid: `clamp(slope * x + offset, 0, 1)`.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct HardSigmoidKernelOp {
    #[attr]
    pub slope: f32,
    #[attr]
    pub offset: f32,
}

impl Activation for HardSigmoidKernelOp {
    const NAME: &'static str = "hard_sigmoid";
    const DEPS: ForwardDependency = ForwardDependency::NeedsOutput;
}
