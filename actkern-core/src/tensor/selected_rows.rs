use super::{Error, Storage, Tensor};

/// A sparse-row tensor: a logical `[height, ..]` array of which only the rows
/// listed in `rows` are stored, in order, as the rows of `value`. Every other
/// row is zero.
///
/// ```rust
/// # use actkern_core::prelude::*;
/// let dev: Cpu = Default::default();
/// let value: Tensor<f32> = dev.tensor([[1.0, -2.0], [0.0, 0.0]]);
/// let sr = SelectedRows::try_new(vec![1, 4], 6, value).unwrap();
/// assert_eq!(sr.height(), 6);
/// assert_eq!(sr.to_dense_vec()[2..4], [1.0, -2.0]);
/// ```
pub struct SelectedRows<E, D: Storage<E>> {
    pub(crate) rows: Vec<usize>,
    pub(crate) height: usize,
    pub(crate) value: Tensor<E, D>,
}

impl<E, D: Storage<E>> SelectedRows<E, D> {
    /// Fails with [Error::WrongNumElements] when `value` doesn't hold one row per
    /// entry of `rows`, or a row index is out of `height`.
    pub fn try_new(rows: Vec<usize>, height: usize, value: Tensor<E, D>) -> Result<Self, Error> {
        let stored = if value.shape.num_dims() == 0 {
            1
        } else {
            value.shape.rows()
        };
        if stored != rows.len() || rows.iter().any(|&r| r >= height) {
            return Err(Error::WrongNumElements);
        }
        Ok(Self {
            rows,
            height,
            value,
        })
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn value(&self) -> &Tensor<E, D> {
        &self.value
    }
}

impl<E: Copy + Default, D: Storage<E>> SelectedRows<E, D> {
    /// Expands the stored rows into a dense, row major `Vec` of `height` rows.
    pub fn to_dense_vec(&self) -> Vec<E> {
        let stored = self.value.as_vec();
        let width = if self.rows.is_empty() {
            0
        } else {
            stored.len() / self.rows.len()
        };
        let mut dense = vec![E::default(); self.height * width];
        for (i, &r) in self.rows.iter().enumerate() {
            dense[r * width..(r + 1) * width].copy_from_slice(&stored[i * width..(i + 1) * width]);
        }
        dense
    }
}

impl<E, D: Storage<E>> Clone for SelectedRows<E, D> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            height: self.height,
            value: self.value.clone(),
        }
    }
}

impl<E, D: Storage<E>> std::fmt::Debug for SelectedRows<E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedRows")
            .field("rows", &self.rows)
            .field("height", &self.height)
            .field("value", &self.value)
            .finish()
    }
}
