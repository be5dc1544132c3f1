use std::borrow::Cow;

use log::{debug, trace};

use super::{
    attrs::{AttrError, AttrTable, Attributes},
    bindings::{Bindings, Slot},
    deps::{ForwardDependency, Saved},
    resolve::{
        missing, resolve_backward, resolve_double_backward, resolve_forward, take_inplace,
        BackwardOperands, ForwardOperands,
    },
};
use crate::{
    dtypes::Dtype,
    tensor::{Error, Layout, Storage, Tensor},
};

/// An elementwise activation function.
///
/// Implementors are small values whose only state is their attributes. A
/// fresh one is built with [Default] and filled from the attribute table for
/// every invocation.
pub trait Activation: 'static + Default + Clone + Send + Sync + std::fmt::Debug + Attributes {
    /// Registered name of the forward entry point.
    const NAME: &'static str;
    /// What the backward formula reads from the forward pass.
    const DEPS: ForwardDependency;
    /// Whether the function maps zero to zero, so it can run on sparse rows.
    const SPARSE_SAFE: bool = false;
}

/// Which operands a second order entry point consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleGradOperands {
    /// `DDX` and the saved value in; `DDOut` and a zero first order gradient out.
    Standard,
    /// `X`, `DDX` and optionally `DOut` in; `DDOut` and `DX` out.
    GradOutAsInput,
    /// `Out`, `DDX` and `DX` in; `DDOut` and `DOut` out.
    GradInAsInput,
}

/// An activation with a second order entry point.
pub trait DoubleGradActivation: Activation {
    const DOUBLE_GRAD: DoubleGradOperands;
}

pub trait ActivationKernel<Op: Activation, E: Dtype>: Storage<E> {
    /// Computes `f` elementwise. An owned input is overwritten and returned.
    fn forward(&self, op: &Op, inp: Cow<Tensor<E, Self>>) -> Result<Tensor<E, Self>, Error>;

    /// Computes `dx = dout * f'` elementwise. An owned `grad_out` is
    /// overwritten and returned.
    fn backward(
        &self,
        op: &Op,
        saved: Saved<&Tensor<E, Self>>,
        grad_out: Cow<Tensor<E, Self>>,
    ) -> Result<Tensor<E, Self>, Error>;
}

pub trait ActivationDoubleKernel<Op: DoubleGradActivation, E: Dtype>:
    ActivationKernel<Op, E>
{
    /// Returns `(ddout, cross)`, each computed only when asked for. `cross`
    /// is the first order gradient this layout produces.
    #[allow(clippy::type_complexity)]
    fn double_backward(
        &self,
        op: &Op,
        saved: &Tensor<E, Self>,
        dd_inp: &Tensor<E, Self>,
        grad: Option<&Tensor<E, Self>>,
        want_dd_out: bool,
        want_cross: bool,
    ) -> Result<(Option<Tensor<E, Self>>, Option<Tensor<E, Self>>), Error>;
}

pub(crate) fn attr_error(op: &str, e: AttrError) -> Error {
    match e {
        AttrError::Missing(attr) => Error::MissingAttribute {
            op: op.to_string(),
            attr,
        },
        AttrError::WrongType(attr) => Error::AttributeType {
            op: op.to_string(),
            attr,
        },
    }
}

/// Builds a fresh functor and fills its attributes.
pub fn try_bind_attributes<Op: Activation>(op: &str, attrs: &AttrTable) -> Result<Op, Error> {
    let mut f = Op::default();
    f.try_set_attributes(attrs).map_err(|e| attr_error(op, e))?;
    Ok(f)
}

pub(crate) fn grad_name<Op: Activation>() -> String {
    format!("{}_grad", Op::NAME)
}

pub(crate) fn grad_grad_name<Op: Activation>() -> String {
    format!("{}_grad_grad", Op::NAME)
}

/// Forward entry point: reads `X`, writes `Out`.
///
/// `Out` has the shape and layout of `X`. If `Out` is bound to the storage of
/// `X` and the op's backward pass doesn't read `X`, the input is consumed and
/// the result is computed in its storage.
pub fn try_activation_forward<Op, E, D>(
    dev: &D,
    bindings: &mut Bindings<E, D>,
    attrs: &AttrTable,
) -> Result<(), Error>
where
    Op: Activation,
    E: Dtype,
    D: ActivationKernel<Op, E>,
{
    let name = Op::NAME;
    trace!("{name}: forward");
    let operands = resolve_forward::<Op, E, D>(name, bindings)?;
    let op = try_bind_attributes::<Op>(name, attrs)?;
    run_forward(dev, &op, name, bindings, operands)
}

pub(crate) fn run_forward<Op, E, D>(
    dev: &D,
    op: &Op,
    name: &str,
    bindings: &mut Bindings<E, D>,
    operands: ForwardOperands<E, D>,
) -> Result<(), Error>
where
    Op: Activation,
    E: Dtype,
    D: ActivationKernel<Op, E>,
{
    let ForwardOperands {
        x,
        layout,
        inplace,
    } = operands;
    let out = if inplace {
        debug!("{name}: writing Out into the storage of X");
        drop(x);
        let x = take_inplace(bindings, Slot::X, Slot::Out).ok_or_else(|| missing(name, Slot::X))?;
        dev.forward(op, Cow::Owned(x))?
    } else {
        dev.forward(op, Cow::Borrowed(&x))?
    };
    bindings.release_output_buffer(Slot::Out);
    bindings.set_output(Slot::Out, layout.wrap(out));
    Ok(())
}

/// Backward entry point: reads `DOut` plus whatever [Activation::DEPS] names,
/// writes `DX`.
///
/// `X` may be missing when the op doesn't need it: the forward pass is then
/// assumed to have run in place. `DX` has the shape and layout of `DOut`, and
/// is computed in the storage of `DOut` when bound to it.
pub fn try_activation_backward<Op, E, D>(
    dev: &D,
    bindings: &mut Bindings<E, D>,
    attrs: &AttrTable,
) -> Result<(), Error>
where
    Op: Activation,
    E: Dtype,
    D: ActivationKernel<Op, E>,
{
    let name = grad_name::<Op>();
    trace!("{name}: backward");
    let operands = resolve_backward::<Op, E, D>(&name, bindings)?;
    let op = try_bind_attributes::<Op>(&name, attrs)?;
    run_backward(dev, &op, &name, bindings, operands)
}

pub(crate) fn run_backward<Op, E, D>(
    dev: &D,
    op: &Op,
    name: &str,
    bindings: &mut Bindings<E, D>,
    operands: BackwardOperands<E, D>,
) -> Result<(), Error>
where
    Op: Activation,
    E: Dtype,
    D: ActivationKernel<Op, E>,
{
    let BackwardOperands {
        saved,
        grad_out,
        layout,
        inplace,
    } = operands;
    let dx = if inplace {
        debug!("{name}: writing DX into the storage of DOut");
        drop(grad_out);
        let grad_out =
            take_inplace(bindings, Slot::DOut, Slot::DX).ok_or_else(|| missing(name, Slot::DOut))?;
        dev.backward(op, saved.as_ref(), Cow::Owned(grad_out))?
    } else {
        dev.backward(op, saved.as_ref(), Cow::Borrowed(&grad_out))?
    };
    bindings.release_output_buffer(Slot::DX);
    bindings.set_output(Slot::DX, layout.wrap(dx));
    Ok(())
}

/// Second order entry point. Which slots are read and written depends on
/// [DoubleGradActivation::DOUBLE_GRAD]; outputs that aren't requested are not
/// computed.
pub fn try_activation_double_backward<Op, E, D>(
    dev: &D,
    bindings: &mut Bindings<E, D>,
    attrs: &AttrTable,
) -> Result<(), Error>
where
    Op: DoubleGradActivation,
    E: Dtype,
    D: ActivationDoubleKernel<Op, E>,
{
    let name = grad_grad_name::<Op>();
    trace!("{name}: double backward");
    let ops = resolve_double_backward::<Op, E, D>(&name, bindings)?;
    let op = try_bind_attributes::<Op>(&name, attrs)?;

    let (dd_out, cross) = dev.double_backward(
        &op,
        &ops.saved,
        &ops.dd_inp,
        ops.grad.as_ref(),
        ops.dd_out.is_some(),
        ops.cross.is_some(),
    )?;
    for (slot, value) in [(ops.dd_out, dd_out), (ops.cross, cross)] {
        if let (Some(slot), Some(value)) = (slot, value) {
            bindings.release_output_buffer(slot);
            bindings.set_output(slot, Layout::Dense.wrap(value));
        }
    }
    Ok(())
}
