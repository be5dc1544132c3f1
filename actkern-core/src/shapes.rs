//! Runtime shapes of nd arrays.
//!
//! Every activation is elementwise, so the only thing kernels ever ask of a
//! shape is its element count and whether two shapes are equal.

/// The dimensions of a tensor, outermost first. The empty shape `[]` is a
/// scalar with one element.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self(dims.into())
    }

    /// Dimensions of the shape.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn num_dims(&self) -> usize {
        self.0.len()
    }

    /// The number of elements in this shape; the product of its dimensions.
    pub fn num_elements(&self) -> usize {
        self.0.iter().product()
    }

    /// Size of the first dimension. For a sparse-row value tensor this is the
    /// number of stored rows.
    pub fn rows(&self) -> usize {
        self.0.first().copied().unwrap_or(1)
    }

    /// Replaces the first dimension, keeping the remaining ones.
    pub fn with_rows(&self, rows: usize) -> Self {
        let mut dims = self.0.clone();
        match dims.first_mut() {
            Some(d) => *d = rows,
            None => dims.push(rows),
        }
        Self(dims)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value)
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.to_vec())
    }
}

impl From<usize> for Shape {
    fn from(value: usize) -> Self {
        Self(vec![value])
    }
}

impl From<()> for Shape {
    fn from(_: ()) -> Self {
        Self(Vec::new())
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
