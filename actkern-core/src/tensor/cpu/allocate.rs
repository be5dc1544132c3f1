use crate::{
    dtypes::Dtype,
    shapes::Shape,
    tensor::{storage_traits::*, unique_id, Error, Tensor},
};

use super::Cpu;

use rand::distributions::Distribution;
use std::{sync::Arc, vec::Vec};

impl Cpu {
    #[inline]
    pub(crate) fn try_alloc_zeros<E: Copy + Default>(&self, numel: usize) -> Result<Vec<E>, Error> {
        self.try_alloc_elem::<E>(numel, Default::default())
    }

    #[inline]
    pub(crate) fn try_alloc_elem<E: Copy>(&self, numel: usize, elem: E) -> Result<Vec<E>, Error> {
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        data.resize(numel, elem);
        Ok(data)
    }

    pub(crate) fn build_tensor<E>(&self, shape: Shape, data: Vec<E>) -> Tensor<E, Self>
    where
        Self: Storage<E, Vec = Vec<E>>,
    {
        Tensor {
            id: unique_id(),
            data: Arc::new(data),
            shape,
            device: self.clone(),
        }
    }
}

impl<E> ZerosTensor<E> for Cpu
where
    Self: Storage<E, Vec = Vec<E>>,
    E: Copy + Default,
{
    fn try_zeros_like<S: Into<Shape>>(&self, shape: S) -> Result<Tensor<E, Self>, Error> {
        let shape = shape.into();
        let data = self.try_alloc_zeros::<E>(shape.num_elements())?;
        Ok(self.build_tensor(shape, data))
    }
}

impl<E> SampleTensor<E> for Cpu
where
    Self: Storage<E, Vec = Vec<E>>,
    E: Copy + Default,
{
    fn try_sample_like<S: Into<Shape>, D: Distribution<E>>(
        &self,
        shape: S,
        distr: D,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = shape.into();
        let mut data = self.try_alloc_zeros::<E>(shape.num_elements())?;
        {
            let mut rng = self.rng.lock().unwrap();
            for x in data.iter_mut() {
                *x = distr.sample(&mut *rng);
            }
        }
        Ok(self.build_tensor(shape, data))
    }
}

impl<E> TensorFromVec<E> for Cpu
where
    Self: Storage<E, Vec = Vec<E>>,
{
    fn try_tensor_from_vec<S: Into<Shape>>(
        &self,
        src: Vec<E>,
        shape: S,
    ) -> Result<Tensor<E, Self>, Error> {
        let shape = shape.into();
        if src.len() != shape.num_elements() {
            Err(Error::WrongNumElements)
        } else {
            Ok(self.build_tensor(shape, src))
        }
    }
}

impl<E: Dtype> Tensor<E, Cpu> {
    /// Converts every element to another float type.
    pub fn to_dtype<Dst: Dtype>(&self) -> Tensor<Dst, Cpu> {
        let data = self
            .data
            .iter()
            .map(|x| Dst::from_f64(x.to_f64().unwrap_or(f64::NAN)).unwrap_or(Dst::nan()))
            .collect();
        Cpu::build_tensor(&self.device, self.shape.clone(), data)
    }
}
