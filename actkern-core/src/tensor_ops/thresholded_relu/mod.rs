mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// Keeps `x` where `x > threshold` and zeroes the rest.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct ThresholdedReluKernelOp {
    #[attr]
    pub threshold: f32,
}

impl Activation for ThresholdedReluKernelOp {
    const NAME: &'static str = "thresholded_relu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
