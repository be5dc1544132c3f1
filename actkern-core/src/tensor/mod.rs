//! The [Tensor] struct, [Cpu] device, and traits like [ZerosTensor] and
//! [TensorFrom].
//!
//! At a high level a tensor is made up of:
//! 1. A runtime [crate::shapes::Shape]
//! 2. The element type ([crate::dtypes::Dtype])
//! 3. Reference counted storage owned by a device ([Storage])
//!
//! Cloning a tensor is cheap; both clones point at the same storage, and a
//! kernel writing through one of them copies the data first unless it holds
//! the only reference.
//!
//! # Creating tensors
//!
//! ```rust
//! # use actkern_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32> = dev.tensor([1.0, 2.0, 3.0]);
//! let b: Tensor<f32> = dev.tensor([[1.0, 2.0], [3.0, 4.0]]);
//! let c: Tensor<f32> = dev.tensor((vec![0.0; 6], [2, 3]));
//! let z: Tensor<f32> = dev.zeros_like([4, 5]);
//! assert_eq!(b.shape().dims(), &[2, 2]);
//! assert_eq!(c.num_elements(), 6);
//! assert_eq!(z.as_vec(), vec![0.0; 20]);
//! # let _ = a;
//! ```
//!
//! # Sparse rows
//!
//! A [SelectedRows] stores only some rows of a logically larger matrix; rows
//! that aren't stored are zero. Bindings hold either kind through [Variable].

pub(crate) mod cpu;
mod error;
mod selected_rows;
pub(crate) mod storage_traits;

pub use cpu::Cpu;
pub use error::Error;
pub use selected_rows::SelectedRows;
pub use storage_traits::{SampleTensor, Storage, TensorFrom, TensorFromVec, ZerosTensor};

use crate::shapes::Shape;
use std::sync::Arc;

/// An id used to distinguish tensors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueId(usize);

pub(crate) fn unique_id() -> UniqueId {
    static COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
    UniqueId(COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
}

impl UniqueId {
    pub fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

/// A dense nd array with runtime [Shape], element type `E`, stored on device `D`.
pub struct Tensor<E, D: Storage<E> = Cpu> {
    pub(crate) id: UniqueId,
    pub(crate) data: Arc<D::Vec>,
    pub(crate) shape: Shape,
    pub(crate) device: D,
}

impl<E, D: Storage<E>> Tensor<E, D> {
    pub fn id(&self) -> UniqueId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn num_elements(&self) -> usize {
        self.shape.num_elements()
    }

    /// Whether both tensors point at the same storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<E, D: Storage<E>> Clone for Tensor<E, D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            data: self.data.clone(),
            shape: self.shape.clone(),
            device: self.device.clone(),
        }
    }
}

impl<E, D: Storage<E>> std::fmt::Debug for Tensor<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("id", &self.id)
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

/// The value of a bound slot: a dense tensor or a sparse-row tensor.
#[derive(Debug)]
pub enum Variable<E, D: Storage<E> = Cpu> {
    Dense(Tensor<E, D>),
    SelectedRows(SelectedRows<E, D>),
}

impl<E, D: Storage<E>> Clone for Variable<E, D> {
    fn clone(&self) -> Self {
        match self {
            Self::Dense(t) => Self::Dense(t.clone()),
            Self::SelectedRows(s) => Self::SelectedRows(s.clone()),
        }
    }
}

impl<E, D: Storage<E>> Variable<E, D> {
    /// The dense tensor the kernels read. For sparse rows this is the stored
    /// row block.
    pub fn value(&self) -> &Tensor<E, D> {
        match self {
            Self::Dense(t) => t,
            Self::SelectedRows(s) => &s.value,
        }
    }

    pub(crate) fn into_value(self) -> Tensor<E, D> {
        match self {
            Self::Dense(t) => t,
            Self::SelectedRows(s) => s.value,
        }
    }

    pub fn is_selected_rows(&self) -> bool {
        matches!(self, Self::SelectedRows(_))
    }

    pub fn as_dense(&self) -> Option<&Tensor<E, D>> {
        match self {
            Self::Dense(t) => Some(t),
            Self::SelectedRows(_) => None,
        }
    }

    pub fn as_selected_rows(&self) -> Option<&SelectedRows<E, D>> {
        match self {
            Self::Dense(_) => None,
            Self::SelectedRows(s) => Some(s),
        }
    }

    pub(crate) fn layout_name(&self) -> &'static str {
        match self {
            Self::Dense(_) => "dense tensor",
            Self::SelectedRows(_) => "selected rows",
        }
    }

    /// The layout of this value, without its storage.
    pub(crate) fn layout(&self) -> Layout {
        match self {
            Self::Dense(_) => Layout::Dense,
            Self::SelectedRows(s) => Layout::SelectedRows {
                rows: s.rows.clone(),
                height: s.height,
            },
        }
    }
}

/// How a computed tensor is handed back: as is, or as the stored rows of a
/// sparse-row tensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Layout {
    Dense,
    SelectedRows { rows: Vec<usize>, height: usize },
}

impl Layout {
    pub(crate) fn wrap<E, D: Storage<E>>(self, value: Tensor<E, D>) -> Variable<E, D> {
        match self {
            Self::Dense => Variable::Dense(value),
            Self::SelectedRows { rows, height } => Variable::SelectedRows(SelectedRows {
                rows,
                height,
                value,
            }),
        }
    }
}

impl<E, D: Storage<E>> From<Tensor<E, D>> for Variable<E, D> {
    fn from(value: Tensor<E, D>) -> Self {
        Self::Dense(value)
    }
}

impl<E, D: Storage<E>> From<SelectedRows<E, D>> for Variable<E, D> {
    fn from(value: SelectedRows<E, D>) -> Self {
        Self::SelectedRows(value)
    }
}
