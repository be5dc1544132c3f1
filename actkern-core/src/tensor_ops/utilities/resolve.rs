//! Decides which bound tensors an entry point reads and where it writes.
//!
//! Every check runs before anything is taken out of the bindings, so a failed
//! resolution leaves them exactly as they were.

use log::debug;

use super::{
    bindings::{Bindings, Slot},
    deps::Saved,
    ops::{Activation, DoubleGradActivation, DoubleGradOperands},
};
use crate::{
    shapes::Shape,
    tensor::{Error, Layout, Storage, Tensor, Variable},
};

pub(crate) struct ForwardOperands<E, D: Storage<E>> {
    pub x: Tensor<E, D>,
    pub layout: Layout,
    /// `Out` is bound to the storage of `X`, and the op allows overwriting it.
    pub inplace: bool,
}

pub(crate) struct BackwardOperands<E, D: Storage<E>> {
    pub saved: Saved<Tensor<E, D>>,
    pub grad_out: Tensor<E, D>,
    pub layout: Layout,
    /// `DX` is bound to the storage of `DOut`.
    pub inplace: bool,
}

pub(crate) struct DoubleBackwardOperands<E, D: Storage<E>> {
    /// `X` or `Out`, whichever the op's second derivative is written in.
    pub saved: Tensor<E, D>,
    pub dd_inp: Tensor<E, D>,
    /// The first order gradient bound as an input, if the layout has one.
    pub grad: Option<Tensor<E, D>>,
    pub dd_out: Option<Slot>,
    /// The first order gradient the kernel writes, if requested.
    pub cross: Option<Slot>,
}

pub(crate) fn missing(op: &str, slot: Slot) -> Error {
    Error::MissingOperand {
        op: op.to_string(),
        slot: slot.as_str(),
    }
}

fn required_input<'a, E, D: Storage<E>>(
    op: &str,
    bindings: &'a Bindings<E, D>,
    slot: Slot,
) -> Result<&'a Variable<E, D>, Error> {
    bindings.input(slot).ok_or_else(|| missing(op, slot))
}

fn required_output<E, D: Storage<E>>(
    op: &str,
    bindings: &Bindings<E, D>,
    slot: Slot,
) -> Result<(), Error> {
    if bindings.is_output_requested(slot) {
        Ok(())
    } else {
        Err(missing(op, slot))
    }
}

fn check_layout<E, D: Storage<E>>(
    op: &str,
    slot: Slot,
    value: &Variable<E, D>,
    sparse_ok: bool,
) -> Result<(), Error> {
    if value.is_selected_rows() && !sparse_ok {
        Err(Error::ShapeOrDeviceMismatch {
            op: op.to_string(),
            slot: slot.as_str(),
            expected: "dense tensor".to_string(),
            found: value.layout_name().to_string(),
        })
    } else {
        Ok(())
    }
}

fn check_shape(op: &str, slot: Slot, expected: &Shape, found: &Shape) -> Result<(), Error> {
    if expected != found {
        Err(Error::ShapeOrDeviceMismatch {
            op: op.to_string(),
            slot: slot.as_str(),
            expected: format!("shape {expected}"),
            found: format!("shape {found}"),
        })
    } else {
        Ok(())
    }
}

/// Shape-checks a caller supplied output buffer against the result it will
/// hold. Returns whether it shares storage with `source`.
fn check_buffer<E, D: Storage<E>>(
    op: &str,
    bindings: &Bindings<E, D>,
    slot: Slot,
    source: &Tensor<E, D>,
) -> Result<bool, Error> {
    match bindings.output_buffer(slot) {
        Some(buffer) => {
            check_shape(op, slot, source.shape(), buffer.shape())?;
            Ok(buffer.shares_storage_with(source))
        }
        None => Ok(false),
    }
}

/// Moves `input` out of the bindings and drops the buffer of `output`, so the
/// kernel holds the only reference to their shared storage.
pub(crate) fn take_inplace<E, D: Storage<E>>(
    bindings: &mut Bindings<E, D>,
    input: Slot,
    output: Slot,
) -> Option<Tensor<E, D>> {
    bindings.release_output_buffer(output);
    bindings.take_input(input).map(Variable::into_value)
}

pub(crate) fn resolve_forward<Op: Activation, E, D: Storage<E>>(
    op: &str,
    bindings: &Bindings<E, D>,
) -> Result<ForwardOperands<E, D>, Error> {
    let x = required_input(op, bindings, Slot::X)?;
    required_output(op, bindings, Slot::Out)?;
    check_layout(op, Slot::X, x, Op::SPARSE_SAFE)?;

    let shares = check_buffer(op, bindings, Slot::Out, x.value())?;
    Ok(ForwardOperands {
        x: x.value().clone(),
        layout: x.layout(),
        inplace: shares && Op::DEPS.supports_inplace(),
    })
}

pub(crate) fn resolve_backward<Op: Activation, E, D: Storage<E>>(
    op: &str,
    bindings: &Bindings<E, D>,
) -> Result<BackwardOperands<E, D>, Error> {
    let deps = Op::DEPS;
    let grad_out = required_input(op, bindings, Slot::DOut)?;
    required_output(op, bindings, Slot::DX)?;
    check_layout(op, Slot::DOut, grad_out, Op::SPARSE_SAFE)?;
    let shape = grad_out.value().shape();

    let out = if deps.needs_output() {
        Some(required_input(op, bindings, Slot::Out)?)
    } else {
        // only read for the shape check; the formula never sees it
        bindings.input(Slot::Out)
    };
    if let Some(out) = out {
        check_layout(op, Slot::Out, out, Op::SPARSE_SAFE)?;
        check_shape(op, Slot::Out, shape, out.value().shape())?;
    }

    let x = if deps.needs_input() {
        Some(required_input(op, bindings, Slot::X)?)
    } else {
        None
    };
    if let Some(x) = x {
        check_layout(op, Slot::X, x, Op::SPARSE_SAFE)?;
        check_shape(op, Slot::X, shape, x.value().shape())?;
    } else if !bindings.has_input(Slot::X) {
        debug!("{op}: X is not bound, running as in-place activation");
    }

    let inplace = check_buffer(op, bindings, Slot::DX, grad_out.value())?;

    let saved = match (x, out.filter(|_| deps.needs_output())) {
        (None, None) => Saved::Nothing,
        (Some(x), None) => Saved::Input(x.value().clone()),
        (None, Some(out)) => Saved::Output(out.value().clone()),
        (Some(x), Some(out)) => Saved::InputAndOutput {
            input: x.value().clone(),
            output: out.value().clone(),
        },
    };

    Ok(BackwardOperands {
        saved,
        grad_out: grad_out.value().clone(),
        layout: grad_out.layout(),
        inplace,
    })
}

pub(crate) fn resolve_double_backward<Op: DoubleGradActivation, E, D: Storage<E>>(
    op: &str,
    bindings: &Bindings<E, D>,
) -> Result<DoubleBackwardOperands<E, D>, Error> {
    let deps = Op::DEPS;
    let dd_inp = required_input(op, bindings, Slot::DDX)?;

    let (saved_slot, grad_slot, cross_slot, grad_required) = match Op::DOUBLE_GRAD {
        DoubleGradOperands::Standard if deps.needs_input() => (Slot::X, None, Slot::DX, false),
        DoubleGradOperands::Standard => (Slot::Out, None, Slot::DOut, false),
        DoubleGradOperands::GradOutAsInput => {
            let wants_dx = bindings.is_output_requested(Slot::DX);
            (Slot::X, Some(Slot::DOut), Slot::DX, wants_dx)
        }
        DoubleGradOperands::GradInAsInput => (Slot::Out, Some(Slot::DX), Slot::DOut, true),
    };

    let saved = required_input(op, bindings, saved_slot)?;
    let grad = match grad_slot {
        Some(slot) if grad_required => Some(required_input(op, bindings, slot)?),
        Some(slot) => bindings.input(slot),
        None => None,
    };

    let shape = dd_inp.value().shape();
    for (slot, value) in [(Slot::DDX, Some(dd_inp)), (saved_slot, Some(saved))]
        .into_iter()
        .chain(grad_slot.map(|s| (s, grad)))
    {
        if let Some(value) = value {
            check_layout(op, slot, value, false)?;
            check_shape(op, slot, shape, value.value().shape())?;
        }
    }

    let dd_out = bindings.is_output_requested(Slot::DDOut).then_some(Slot::DDOut);
    let cross = bindings.is_output_requested(cross_slot).then_some(cross_slot);
    for slot in dd_out.iter().chain(cross.iter()) {
        check_buffer(op, bindings, *slot, dd_inp.value())?;
    }

    Ok(DoubleBackwardOperands {
        saved: saved.value().clone(),
        dd_inp: dd_inp.value().clone(),
        grad: grad.map(|g| g.value().clone()),
        dd_out,
        cross,
    })
}
