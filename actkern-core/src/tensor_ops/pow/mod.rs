mod cpu_kernel;

use log::{debug, trace};

use super::{
    ops::{attr_error, grad_name, run_backward, run_forward, Activation, ActivationKernel},
    resolve::{resolve_backward, resolve_forward},
};
use crate::{
    dtypes::Dtype,
    tensor::{Cpu, Error, Storage},
    tensor_ops::{AttrError, AttrTable, AttrValue, Attributes, Bindings, ForwardDependency, Slot},
};

/// `x^factor`. The derivative is `factor * x^(factor - 1)`.
///
/// `factor` comes from the attribute table, unless a one element tensor is
/// bound to [Slot::FactorTensor], in which case that value wins. Use
/// [try_pow_forward] and [try_pow_backward] to get the override; the generic
/// drivers only read the attribute.
///
/// Examples:
/// ```rust
/// # use actkern_core::prelude::*;
/// # let dev: Cpu = Default::default();
/// let x: Tensor<f32> = dev.tensor([1.0, 2.0, 3.0]);
/// let mut b = Bindings::new()
///     .with_input(Slot::X, x)
///     .with_input(Slot::FactorTensor, dev.tensor([3.0f32]))
///     .with_output(Slot::Out);
/// let attrs = AttrTable::new().with("factor", 2.0);
/// try_pow_forward(&dev, &mut b, &attrs).unwrap();
/// assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [1.0, 8.0, 27.0]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct PowKernelOp {
    pub factor: f32,
}

impl Activation for PowKernelOp {
    const NAME: &'static str = "pow";
    const DEPS: ForwardDependency = ForwardDependency::NeedsInput;
}

impl Attributes for PowKernelOp {
    const ATTR_NAMES: &'static [&'static str] = &["factor"];

    fn try_set_attributes(&mut self, attrs: &AttrTable) -> Result<(), AttrError> {
        self.factor = match attrs.get("factor") {
            Some(AttrValue::Floats(v)) if v.len() == 1 => v[0],
            Some(AttrValue::Floats(_)) => return Err(AttrError::WrongType("factor")),
            _ => attrs.try_get_f32("factor")?,
        };
        Ok(())
    }
}

/// Builds the functor, with `FactorTensor` overriding the `factor` attribute.
fn try_bind_factor<E, D>(
    name: &str,
    bindings: &Bindings<E, D>,
    attrs: &AttrTable,
) -> Result<PowKernelOp, Error>
where
    E: Dtype,
    D: Storage<E>,
{
    if let Some(factor) = bindings.input(Slot::FactorTensor) {
        // may live on another device, so read it back on the host
        let host = factor.value().try_to_device(&Cpu::default())?;
        if host.num_elements() != 1 {
            return Err(Error::InvalidFactorShape {
                op: name.to_string(),
                numel: host.num_elements(),
            });
        }
        let factor = host.to_dtype::<f32>().as_vec()[0];
        debug!("{name}: factor {factor} taken from FactorTensor");
        return Ok(PowKernelOp { factor });
    }

    if let Some(AttrValue::Floats(v)) = attrs.get("factor") {
        if v.len() != 1 {
            return Err(Error::InvalidFactorShape {
                op: name.to_string(),
                numel: v.len(),
            });
        }
    }
    let mut op = PowKernelOp::default();
    op.try_set_attributes(attrs).map_err(|e| attr_error(name, e))?;
    Ok(op)
}

/// Forward entry point of `pow`. Like [super::try_activation_forward], with
/// the exponent optionally read from [Slot::FactorTensor].
pub fn try_pow_forward<E, D>(
    dev: &D,
    bindings: &mut Bindings<E, D>,
    attrs: &AttrTable,
) -> Result<(), Error>
where
    E: Dtype,
    D: ActivationKernel<PowKernelOp, E>,
{
    let name = PowKernelOp::NAME;
    trace!("{name}: forward");
    let operands = resolve_forward::<PowKernelOp, E, D>(name, bindings)?;
    let op = try_bind_factor(name, bindings, attrs)?;
    run_forward(dev, &op, name, bindings, operands)
}

/// Backward entry point of `pow`. Like [super::try_activation_backward], with
/// the exponent optionally read from [Slot::FactorTensor].
pub fn try_pow_backward<E, D>(
    dev: &D,
    bindings: &mut Bindings<E, D>,
    attrs: &AttrTable,
) -> Result<(), Error>
where
    E: Dtype,
    D: ActivationKernel<PowKernelOp, E>,
{
    let name = grad_name::<PowKernelOp>();
    trace!("{name}: backward");
    let operands = resolve_backward::<PowKernelOp, E, D>(&name, bindings)?;
    let op = try_bind_factor(&name, bindings, attrs)?;
    run_backward(dev, &op, &name, bindings, operands)
}
