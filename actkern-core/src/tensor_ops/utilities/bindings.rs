use std::collections::BTreeMap;

use crate::tensor::{Cpu, Storage, Tensor, Variable};

/// Logical operand names of an activation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    X,
    Out,
    DOut,
    DX,
    DDX,
    DDOut,
    FactorTensor,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::X,
        Slot::Out,
        Slot::DOut,
        Slot::DX,
        Slot::DDX,
        Slot::DDOut,
        Slot::FactorTensor,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Slot::X => "X",
            Slot::Out => "Out",
            Slot::DOut => "DOut",
            Slot::DX => "DX",
            Slot::DDX => "DDX",
            Slot::DDOut => "DDOut",
            Slot::FactorTensor => "FactorTensor",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Slot {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("unknown slot `{s}`"))
    }
}

#[derive(Debug)]
enum OutputState<E, D: Storage<E>> {
    Requested,
    Buffer(Tensor<E, D>),
    Written(Variable<E, D>),
}

/// Named tensor bindings of a single invocation.
///
/// Inputs are read by the kernels. Outputs must be requested before the call;
/// an output without a request is never computed. A requested output may come
/// with a buffer: it must have the shape of the result, and if it shares
/// storage with the tensor the result is computed from, the computation
/// happens in that storage.
///
/// ```rust
/// # use actkern_core::prelude::*;
/// let dev: Cpu = Default::default();
/// let x: Tensor<f32> = dev.tensor([-1.0, 2.0]);
/// let mut b = Bindings::new().with_input(Slot::X, x).with_output(Slot::Out);
/// try_activation_forward::<ReluKernelOp, _, _>(&dev, &mut b, &AttrTable::new()).unwrap();
/// assert_eq!(b.output(Slot::Out).unwrap().value().as_vec(), [0.0, 2.0]);
/// ```
#[derive(Debug)]
pub struct Bindings<E, D: Storage<E> = Cpu> {
    inputs: BTreeMap<Slot, Variable<E, D>>,
    outputs: BTreeMap<Slot, OutputState<E, D>>,
}

impl<E, D: Storage<E>> Default for Bindings<E, D> {
    fn default() -> Self {
        Self {
            inputs: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }
}

impl<E, D: Storage<E>> Bindings<E, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, slot: Slot, value: impl Into<Variable<E, D>>) -> Self {
        self.bind_input(slot, value);
        self
    }

    /// Requests `slot` as an output, to be allocated by the kernel.
    pub fn with_output(mut self, slot: Slot) -> Self {
        self.request_output(slot);
        self
    }

    /// Requests `slot` as an output written into `buffer`.
    pub fn with_output_buffer(mut self, slot: Slot, buffer: Tensor<E, D>) -> Self {
        self.outputs.insert(slot, OutputState::Buffer(buffer));
        self
    }

    pub fn bind_input(&mut self, slot: Slot, value: impl Into<Variable<E, D>>) {
        self.inputs.insert(slot, value.into());
    }

    pub fn request_output(&mut self, slot: Slot) {
        self.outputs.insert(slot, OutputState::Requested);
    }

    pub fn has_input(&self, slot: Slot) -> bool {
        self.inputs.contains_key(&slot)
    }

    pub fn input(&self, slot: Slot) -> Option<&Variable<E, D>> {
        self.inputs.get(&slot)
    }

    /// Removes an input, handing its storage to the caller.
    pub fn take_input(&mut self, slot: Slot) -> Option<Variable<E, D>> {
        self.inputs.remove(&slot)
    }

    /// Whether `slot` is an output the caller wants. Stays true after the
    /// output is written.
    pub fn is_output_requested(&self, slot: Slot) -> bool {
        self.outputs.contains_key(&slot)
    }

    /// The written value of an output slot.
    pub fn output(&self, slot: Slot) -> Option<&Variable<E, D>> {
        match self.outputs.get(&slot) {
            Some(OutputState::Written(v)) => Some(v),
            _ => None,
        }
    }

    /// Removes a written output.
    pub fn take_output(&mut self, slot: Slot) -> Option<Variable<E, D>> {
        match self.outputs.remove(&slot) {
            Some(OutputState::Written(v)) => Some(v),
            Some(other) => {
                self.outputs.insert(slot, other);
                None
            }
            None => None,
        }
    }

    /// Whether any requested output has been written.
    pub fn any_output_written(&self) -> bool {
        self.outputs
            .values()
            .any(|o| matches!(o, OutputState::Written(_)))
    }

    pub(crate) fn output_buffer(&self, slot: Slot) -> Option<&Tensor<E, D>> {
        match self.outputs.get(&slot) {
            Some(OutputState::Buffer(t)) => Some(t),
            _ => None,
        }
    }

    /// Drops the caller's buffer so the kernel can own its storage.
    pub(crate) fn release_output_buffer(&mut self, slot: Slot) {
        if let Some(OutputState::Buffer(_)) = self.outputs.get(&slot) {
            self.outputs.insert(slot, OutputState::Requested);
        }
    }

    pub(crate) fn set_output(&mut self, slot: Slot, value: Variable<E, D>) {
        self.outputs.insert(slot, OutputState::Written(value));
    }
}
