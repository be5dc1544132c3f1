mod attrs;
mod bindings;
pub(crate) mod cpu_kernels;
mod deps;
mod device;
pub(crate) mod ops;
mod registry;
pub(crate) mod resolve;

pub use attrs::{AttrError, AttrTable, AttrValue, Attributes};
pub use bindings::{Bindings, Slot};
pub use cpu_kernels::{ActivationDerivative, ActivationDoubleDerivative};
pub use deps::{ForwardDependency, Saved};
pub use device::Device;
pub use ops::{
    try_activation_backward, try_activation_double_backward, try_activation_forward,
    try_bind_attributes, Activation, ActivationDoubleKernel, ActivationKernel, DoubleGradActivation,
    DoubleGradOperands,
};
pub use registry::{Direction, KernelFn, OpKernel, Registry};
