mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct LogKernelOp;

/// [Natural Logarithm (ln)](https://en.wikipedia.org/wiki/Natural_logarithm). `log_e(x)`
///
/// The derivative is `1 / x`.
impl Activation for LogKernelOp {
    const NAME: &'static str = "log";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}
