//! # actkern-core
//!
//! Elementwise activation functions over nd arrays, with their first and
//! second derivatives, behind one kernel invocation protocol.
//!
//! See [feature flags](#feature-flags) for compile time configuration.
//!
//! # Tensors & Devices
//!
//! *See [tensor] for more information.*
//!
//! A [`tensor::Tensor`] is a runtime shaped array stored on a device. The
//! only device is [tensor::Cpu], which keeps data on the heap:
//!
//! ```rust
//! # use actkern_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let t: Tensor<f32> = dev.tensor([[1.0, -2.0, 3.0], [0.5, 0.0, -0.5]]);
//! assert_eq!(t.shape().dims(), &[2, 3]);
//! ```
//!
//! # Running an activation
//!
//! *See [tensor_ops] for more information.*
//!
//! Every activation is a small functor type (e.g. [tensor_ops::SigmoidKernelOp]).
//! An invocation names its operands in [tensor_ops::Bindings] and its
//! parameters in an [tensor_ops::AttrTable]; a driver resolves the operands,
//! fills the functor's attributes and runs the device kernel.
//!
//! ```rust
//! # use actkern_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let x: Tensor<f32> = dev.tensor([-1.0, 0.3, 0.6]);
//! let attrs = AttrTable::new().with("threshold", 0.5);
//!
//! let mut fwd = Bindings::new().with_input(Slot::X, x.clone()).with_output(Slot::Out);
//! try_activation_forward::<HardShrinkKernelOp, _, _>(&dev, &mut fwd, &attrs).unwrap();
//! let out = fwd.take_output(Slot::Out).unwrap();
//! assert_eq!(out.value().as_vec(), [-1.0, 0.0, 0.6]);
//!
//! let mut bwd = Bindings::new()
//!     .with_input(Slot::X, x)
//!     .with_input(Slot::DOut, dev.tensor([1.0f32; 3]))
//!     .with_output(Slot::DX);
//! try_activation_backward::<HardShrinkKernelOp, _, _>(&dev, &mut bwd, &attrs).unwrap();
//! assert_eq!(bwd.output(Slot::DX).unwrap().value().as_vec(), [1.0, 0.0, 1.0]);
//! ```
//!
//! The same entry points are reachable by name through
//! [tensor_ops::Registry], e.g. `"hard_shrink"` and `"hard_shrink_grad"`.
//!
//! # Feature flags
//!
//! - `std` (default): implements `std::error::Error` for [tensor::Error].
//! - `parallel`: runs elementwise loops on the rayon thread pool.
//! - `cblas`: routes `axpy` through a linked CBLAS library, and switches gelu
//!   to a staged slice formulation built on [dtypes::VecMath].
//! - `f16`: adds `half::f16` as an element type.
//! - `test-f64` / `test-f16`: runs the unit tests with that element type.

extern crate self as actkern;

pub mod dtypes;
pub mod shapes;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::dtypes::*;
    pub use crate::shapes::*;
    pub use crate::tensor::*;
    pub use crate::tensor_ops::*;
}
