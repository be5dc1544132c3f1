use rand::distributions::Distribution;
use rand_distr::{Standard, StandardNormal};
use std::vec::Vec;

use crate::shapes::Shape;

use super::{Error, Tensor};

/// Something that can store nd arrays of element type `E`.
pub trait Storage<E>: 'static + std::fmt::Debug + Default + Clone + Send + Sync {
    /// Generic Storage type
    type Vec: 'static + std::fmt::Debug + Clone + Send + Sync;

    /// Allocates zero filled storage for `len` elements.
    fn try_alloc_len(&self, len: usize) -> Result<Self::Vec, Error>;

    /// Copies the tensor's elements to host memory.
    fn tensor_to_vec(&self, tensor: &Tensor<E, Self>) -> Vec<E>;

    fn len(&self, v: &Self::Vec) -> usize;
}

impl<E, D: Storage<E>> Tensor<E, D> {
    pub fn as_vec(&self) -> std::vec::Vec<E> {
        self.device.tensor_to_vec(self)
    }
}

pub trait ZerosTensor<E>: Storage<E> {
    /// Creates a tensor filled with zeros.
    /// ```rust
    /// # use actkern_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32> = dev.zeros_like([2, 3]);
    /// let b: Tensor<f32> = dev.zeros_like(a.shape().clone());
    /// ```
    fn zeros_like<S: Into<Shape>>(&self, shape: S) -> Tensor<E, Self> {
        self.try_zeros_like(shape).unwrap()
    }

    fn try_zeros_like<S: Into<Shape>>(&self, shape: S) -> Result<Tensor<E, Self>, Error>;
}

pub trait SampleTensor<E>: Storage<E> {
    /// Samples a tensor with a given shape from a uniform distribution
    fn sample_uniform_like<S: Into<Shape>>(&self, shape: S) -> Tensor<E, Self>
    where
        Standard: Distribution<E>,
    {
        self.sample_like(shape, Standard)
    }

    /// Samples a tensor with a given shape from a normal distribution
    fn sample_normal_like<S: Into<Shape>>(&self, shape: S) -> Tensor<E, Self>
    where
        StandardNormal: Distribution<E>,
    {
        self.sample_like(shape, StandardNormal)
    }

    /// Samples a tensor with a given shape from a given distribution.
    fn sample_like<S: Into<Shape>, D: Distribution<E>>(
        &self,
        shape: S,
        distr: D,
    ) -> Tensor<E, Self> {
        self.try_sample_like(shape, distr).unwrap()
    }

    /// Fallibly samples a tensor with a given shape from a given distribution.
    fn try_sample_like<S: Into<Shape>, D: Distribution<E>>(
        &self,
        shape: S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error>;
}

/// Construct tensors from rust vectors. This trait is only used to implement TensorFrom.
pub trait TensorFromVec<E>: Storage<E> {
    fn tensor_from_vec<S: Into<Shape>>(&self, src: Vec<E>, shape: S) -> Tensor<E, Self> {
        self.try_tensor_from_vec(src, shape).unwrap()
    }

    fn try_tensor_from_vec<S: Into<Shape>>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error>;
}

impl<E, D: Storage<E>> Tensor<E, D> {
    /// Fallibly clones the tensor onto a different device.
    pub fn try_to_device<Dst: TensorFromVec<E>>(
        &self,
        device: &Dst,
    ) -> Result<Tensor<E, Dst>, Error> {
        let buf = self.as_vec();
        device.try_tensor_from_vec(buf, self.shape.clone())
    }
}

/// Construct tensors from rust data
pub trait TensorFrom<Src, E>: Storage<E> {
    /// Create a tensor from rust data
    /// ```rust
    /// # use actkern_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let _: Tensor<f32> = dev.tensor([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let _: Tensor<f32> = dev.tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// // Note: arguments are in a tuple when the shape isn't implied by the data
    /// let _: Tensor<f32> = dev.tensor((vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], [2, 3]));
    /// ```
    fn tensor(&self, src: Src) -> Tensor<E, Self> {
        self.try_tensor(src).unwrap()
    }
    /// Fallible version of [TensorFrom::tensor]
    fn try_tensor(&self, src: Src) -> Result<Tensor<E, Self>, Error>;
}

impl<E: Copy, const M: usize, D: TensorFromVec<E>> TensorFrom<[E; M], E> for D {
    fn try_tensor(&self, src: [E; M]) -> Result<Tensor<E, Self>, Error> {
        self.try_tensor_from_vec(src.to_vec(), [M])
    }
}

impl<E: Copy, const M: usize, const N: usize, D: TensorFromVec<E>> TensorFrom<[[E; N]; M], E>
    for D
{
    fn try_tensor(&self, src: [[E; N]; M]) -> Result<Tensor<E, Self>, Error> {
        let vec: Vec<E> = src.iter().flat_map(|v| v.iter().copied()).collect();
        self.try_tensor_from_vec(vec, [M, N])
    }
}

impl<E, D: TensorFromVec<E>> TensorFrom<Vec<E>, E> for D {
    fn try_tensor(&self, src: Vec<E>) -> Result<Tensor<E, Self>, Error> {
        let len = src.len();
        self.try_tensor_from_vec(src, [len])
    }
}

impl<E, S: Into<Shape>, D: TensorFromVec<E>> TensorFrom<(Vec<E>, S), E> for D {
    fn try_tensor(&self, (src, shape): (Vec<E>, S)) -> Result<Tensor<E, Self>, Error> {
        self.try_tensor_from_vec(src, shape)
    }
}
