mod cpu_kernel;

use super::ops::Activation;
use crate::tensor_ops::{Attributes, ForwardDependency};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Attributes)]
pub struct AbsKernelOp;

/// Absolute value. The derivative is the sign of `x`, and `0` at `0`.
///
/// The backward pass wants both `X` and `Out` bound, although only `X` enters
/// the formula. Safe on sparse rows.
impl Activation for AbsKernelOp {
    const NAME: &'static str = "abs";
    const DEPS: ForwardDependency = ForwardDependency::NeedsBoth;
    const SPARSE_SAFE: bool = true;
}
