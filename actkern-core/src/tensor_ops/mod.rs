//! Activation functions and the protocol every one of them is invoked with.
//!
//! # Invoking an activation
//!
//! An invocation is a device, a set of named tensors ([Bindings]) and a set of
//! named scalars ([AttrTable]). The names are fixed ([Slot]):
//!
//! - forward reads `X` and writes `Out`
//! - backward reads `DOut` plus `X` and/or `Out`, depending on the function's
//!   [ForwardDependency], and writes `DX`
//! - double backward reads `DDX` and writes `DDOut`, with the remaining slots
//!   given by [DoubleGradOperands]
//!
//! The drivers [try_activation_forward], [try_activation_backward] and
//! [try_activation_double_backward] check the bindings, fill the functor's
//! attributes, and run the device kernel. Any missing or malformed operand is
//! reported as a [crate::tensor::Error] before anything is computed, and no
//! output is written.
//!
//! ```rust
//! # use actkern_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let x: Tensor<f32> = dev.tensor([0.0, 1.0]);
//! let mut b = Bindings::new().with_input(Slot::X, x).with_output(Slot::Out);
//! let e = try_activation_forward::<BReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new());
//! assert_eq!(
//!     e.unwrap_err().to_string(),
//!     "brelu: attribute `t_min` is not configured"
//! );
//! ```
//!
//! # In place execution
//!
//! An output may be bound to a caller allocated tensor with
//! [Bindings::with_output_buffer]. If that buffer shares storage with the input
//! it replaces, the result is computed in that storage:
//!
//! - forward may overwrite `X` only if the function's backward pass doesn't
//!   read `X` (see [ForwardDependency::supports_inplace])
//! - backward may always overwrite `DOut`
//!
//! A backward pass of a function that only needs `Out` runs fine without `X`
//! bound, which is what happens after an in-place forward pass.
//!
//! # Sparse rows
//!
//! `abs`, `square` and `sqrt` map zero to zero, so they also accept
//! [crate::tensor::SelectedRows] and produce the same row layout.
//!
//! # Adding functions
//!
//! A new function is a [Default] functor type implementing [Activation] and
//! [ActivationDerivative]; the blanket implementations then make it runnable
//! on [crate::tensor::Cpu]. Attributes are declared with
//! `#[derive(Attributes)]` and an `#[attr]` on each scalar field.

mod abs;
mod acos;
mod asin;
mod atan;
mod brelu;
mod ceil;
mod cos;
mod elu;
mod exp;
mod floor;
mod gelu;
mod hard_shrink;
mod hard_sigmoid;
mod hard_swish;
mod leaky_relu;
mod log;
mod logsigmoid;
mod pow;
mod reciprocal;
mod relu;
mod relu6;
mod round;
mod rsqrt;
mod sigmoid;
mod sin;
mod soft_relu;
mod softplus;
mod softshrink;
mod softsign;
mod sqrt;
mod square;
mod stanh;
mod swish;
mod tanh;
mod tanh_shrink;
mod thresholded_relu;
mod utilities;

pub(crate) use utilities::{cpu_kernels, ops, resolve};
pub use utilities::*;

pub use actkern_derives::Attributes;

pub use abs::AbsKernelOp;
pub use acos::AcosKernelOp;
pub use asin::AsinKernelOp;
pub use atan::AtanKernelOp;
pub use brelu::BReluKernelOp;
pub use ceil::CeilKernelOp;
pub use cos::CosKernelOp;
pub use elu::EluKernelOp;
pub use exp::ExpKernelOp;
pub use floor::FloorKernelOp;
pub use gelu::GeluKernelOp;
pub use hard_shrink::HardShrinkKernelOp;
pub use hard_sigmoid::HardSigmoidKernelOp;
pub use hard_swish::HardSwishKernelOp;
pub use leaky_relu::LeakyReluKernelOp;
pub use self::log::LogKernelOp;
pub use logsigmoid::LogSigmoidKernelOp;
pub use pow::{try_pow_backward, try_pow_forward, PowKernelOp};
pub use reciprocal::ReciprocalKernelOp;
pub use relu::ReluKernelOp;
pub use relu6::Relu6KernelOp;
pub use round::RoundKernelOp;
pub use rsqrt::RsqrtKernelOp;
pub use sigmoid::SigmoidKernelOp;
pub use sin::SinKernelOp;
pub use soft_relu::SoftReluKernelOp;
pub use softplus::SoftplusKernelOp;
pub use softshrink::SoftShrinkKernelOp;
pub use softsign::SoftsignKernelOp;
pub use sqrt::SqrtKernelOp;
pub use square::SquareKernelOp;
pub use stanh::STanhKernelOp;
pub use swish::SwishKernelOp;
pub use tanh::TanhKernelOp;
pub use tanh_shrink::TanhShrinkKernelOp;
pub use thresholded_relu::ThresholdedReluKernelOp;
