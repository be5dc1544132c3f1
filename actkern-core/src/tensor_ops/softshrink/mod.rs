mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// Soft shrinkage. Moves every value `lambda` closer to zero, and maps
/// `[-lambda, lambda]` to zero.
///
/// ```text
/// x - lambda  if x > lambda
/// x + lambda  if x < -lambda
/// 0           otherwise
/// ```
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SoftShrinkKernelOp {
    #[attr]
    pub lambda: f32,
}

impl Activation for SoftShrinkKernelOp {
    const NAME: &'static str = "softshrink";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
