//! # actkern
//!
//! actkern is a library of elementwise activation functions (sigmoid, relu,
//! gelu, swish, and about thirty more) with their first derivatives, and
//! second derivatives for a handful of them, written entirely in rust.
//!
//! Every function is exposed as a set of entry points with one calling
//! convention, so that a computation graph can run them by name without
//! knowing anything about the math:
//!
//! - `name` computes `Out = f(X)`
//! - `name_grad` computes `DX = DOut * f'`
//! - `name_grad_grad` computes the gradient of `name_grad`
//!
//! # Tensors & Devices
//!
//! *See [tensor] for more information.*
//!
//! A [`tensor::Tensor`] is an nd array with a runtime shape
//! ([`shapes::Shape`]), living on a device. The device allocates memory and
//! runs the kernels; [`tensor::Cpu`] is the only one provided.
//!
//! ```rust
//! # use actkern::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32> = dev.tensor([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! let b: Tensor<f64> = dev.sample_normal_like([2, 3]);
//! assert_eq!(a.shape(), b.shape());
//! ```
//!
//! # Bindings, attributes and drivers
//!
//! *See [tensor_ops] for more information.*
//!
//! The operands of an invocation are bound to named [`tensor_ops::Slot`]s, and
//! scalar parameters are looked up by name in an [`tensor_ops::AttrTable`].
//! What a backward pass must be given depends on the function: `sigmoid_grad`
//! needs `Out`, `sin_grad` needs `X`, and `floor_grad` needs neither. This is
//! declared once per function as a [`tensor_ops::ForwardDependency`], and the
//! driver checks it before running anything.
//!
//! ```rust
//! # use actkern::prelude::*;
//! let dev: Cpu = Default::default();
//! let x: Tensor<f32> = dev.tensor([-1.0, 0.0, 1.0]);
//!
//! let mut fwd = Bindings::new().with_input(Slot::X, x).with_output(Slot::Out);
//! try_activation_forward::<SigmoidKernelOp, _, _>(&dev, &mut fwd, &AttrTable::new()).unwrap();
//! let out = fwd.take_output(Slot::Out).unwrap();
//!
//! // sigmoid's derivative only needs the output
//! let mut bwd = Bindings::new()
//!     .with_input(Slot::Out, out)
//!     .with_input(Slot::DOut, dev.tensor([1.0f32; 3]))
//!     .with_output(Slot::DX);
//! try_activation_backward::<SigmoidKernelOp, _, _>(&dev, &mut bwd, &AttrTable::new()).unwrap();
//! let dx = bwd.output(Slot::DX).unwrap().value().as_vec();
//! assert!((dx[1] - 0.25).abs() < 1e-6);
//! ```
//!
//! # Running by name
//!
//! [`tensor_ops::Registry`] maps every entry point name to its driver:
//!
//! ```rust
//! # use actkern::prelude::*;
//! let dev: Cpu = Default::default();
//! let registry: Registry<f32> = Registry::new();
//! let mut b = Bindings::new()
//!     .with_input(Slot::X, dev.tensor([-2.0f32, 0.5]))
//!     .with_output(Slot::Out);
//! let attrs = AttrTable::new().with("alpha", 0.1);
//! registry.try_run("leaky_relu", &dev, &mut b, &attrs).unwrap();
//! assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [-0.2, 0.5]);
//! ```
//!
//! # Custom functions
//!
//! A function is a functor type. Derive [Attributes] for its parameters, and
//! implement [`tensor_ops::Activation`] and
//! [`tensor_ops::ActivationDerivative`]:
//!
//! ```rust
//! # use actkern::prelude::*;
//! #[derive(Debug, Default, Clone, Copy, Attributes)]
//! struct Scale {
//!     #[attr]
//!     factor: f32,
//! }
//!
//! impl Activation for Scale {
//!     const NAME: &'static str = "scale";
//!     const DEPS: ForwardDependency = ForwardDependency::NoDeps;
//! }
//!
//! impl ActivationDerivative<f32> for Scale {
//!     fn f(&self, x: &f32) -> f32 {
//!         x * self.factor
//!     }
//!     fn df(&self, _: &f32) -> f32 {
//!         self.factor
//!     }
//!     fn const_df(&self) -> f32 {
//!         self.factor
//!     }
//! }
//!
//! let dev: Cpu = Default::default();
//! let mut b = Bindings::new()
//!     .with_input(Slot::X, dev.tensor([1.0f32, 2.0]))
//!     .with_output(Slot::Out);
//! let attrs = AttrTable::new().with("factor", 3.0);
//! try_activation_forward::<Scale, _, _>(&dev, &mut b, &attrs).unwrap();
//! assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [3.0, 6.0]);
//! ```

pub mod feature_flags;

pub use actkern_core::*;

pub use actkern_derives::Attributes;

pub mod prelude {
    pub use actkern_core::prelude::*;
}
