mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// Bounded ReLU: clamps `x` to `[t_min, t_max]`. The derivative is `1`
/// strictly inside the bounds and `0` elsewhere.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct BReluKernelOp {
    #[attr]
    pub t_min: f32,
    #[attr]
    pub t_max: f32,
}

impl Activation for BReluKernelOp {
    const NAME: &'static str = "brelu";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
