mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

/// [Swish](https://arxiv.org/abs/1710.05941): `x * sigmoid(beta * x)`.
///
/// The derivative is `beta * out + sigmoid(beta * x) * (1 - beta * out)`,
/// with `out` recomputed from `x`.
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct SwishKernelOp {
    #[attr]
    pub beta: f32,
}

impl Activation for SwishKernelOp {
    const NAME: &'static str = "swish";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
