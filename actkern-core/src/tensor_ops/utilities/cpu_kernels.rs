use std::{borrow::Cow, sync::Arc};

use super::{
    deps::Saved,
    ops::{
        Activation, ActivationDoubleKernel, ActivationKernel, DoubleGradActivation,
        DoubleGradOperands,
    },
};
use crate::{
    dtypes::Dtype,
    tensor::{unique_id, Cpu, Error, Tensor},
};

pub trait ActivationDerivative<E>: Activation {
    /// Whether [ActivationDerivative::f_slice] and
    /// [ActivationDerivative::df_slice] replace the elementwise loops.
    const HAS_SLICE_PATH: bool = false;

    fn f(&self, x: &E) -> E;

    /// Receives `f(x)` if [Activation::DEPS] only needs the output,
    /// otherwise `x`.
    fn df(&self, x: &E) -> E;

    /// The derivative of ops that don't read any forward value.
    fn const_df(&self) -> E {
        unimplemented!()
    }

    /// Overwrites `xs` with `f(xs)`.
    fn f_slice(&self, _xs: &mut [E]) {
        unimplemented!()
    }

    /// Multiplies `grad` by `f'` at `xs`, where `xs` is what
    /// [ActivationDerivative::df] would receive.
    fn df_slice(&self, _xs: &[E], _grad: &mut [E]) {
        unimplemented!()
    }
}

pub trait ActivationDoubleDerivative<E>: ActivationDerivative<E> + DoubleGradActivation {
    /// `ddout` from the saved value and `ddx`.
    fn dd_out(&self, saved: &E, ddx: &E) -> E;

    /// The first order gradient produced next to `ddout`, from the saved value,
    /// `ddx` and the gradient bound as input. Not called for the standard
    /// layout, whose first order output is zero.
    fn cross(&self, _saved: &E, _ddx: &E, _grad: &E) -> E {
        unimplemented!()
    }
}

/// Calls `f(i, &mut buf[i])` for every element.
#[inline]
pub(crate) fn for_each_indexed<E: Send, F: Fn(usize, &mut E) + Send + Sync>(buf: &mut [E], f: F) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        buf.par_iter_mut().enumerate().for_each(|(i, x)| f(i, x));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, x) in buf.iter_mut().enumerate() {
        f(i, x);
    }
}

/// Converts an f32 constant or attribute into the element type.
#[inline(always)]
pub(crate) fn cast<F: num_traits::Float>(v: f32) -> F {
    F::from(v).unwrap()
}

/// Reuses the storage of an owned tensor, or shares the storage of a
/// borrowed one until it is written to.
fn take_storage<E: Dtype>(dev: &Cpu, inp: Cow<Tensor<E, Cpu>>) -> Tensor<E, Cpu> {
    match inp {
        Cow::Borrowed(inp) => Tensor {
            id: unique_id(),
            data: inp.data.clone(),
            shape: inp.shape.clone(),
            device: dev.clone(),
        },
        Cow::Owned(mut inp) => {
            inp.id = unique_id();
            inp
        }
    }
}

impl<E: Dtype, Op: ActivationDerivative<E>> ActivationKernel<Op, E> for Cpu {
    fn forward(&self, op: &Op, inp: Cow<Tensor<E, Self>>) -> Result<Tensor<E, Self>, Error> {
        let mut out = take_storage(self, inp);
        let buf = Arc::make_mut(&mut out.data);
        if Op::HAS_SLICE_PATH {
            op.f_slice(buf);
        } else {
            for_each_indexed(buf, |_, x| *x = op.f(x));
        }
        Ok(out)
    }

    fn backward(
        &self,
        op: &Op,
        saved: Saved<&Tensor<E, Self>>,
        grad_out: Cow<Tensor<E, Self>>,
    ) -> Result<Tensor<E, Self>, Error> {
        let mut grad = take_storage(self, grad_out);
        let buf = Arc::make_mut(&mut grad.data);
        match saved.primary() {
            None => {
                let df = op.const_df();
                for_each_indexed(buf, |_, g| *g = df * *g);
            }
            Some(s) if Op::HAS_SLICE_PATH => op.df_slice(&s.data, buf),
            Some(s) => {
                let s = &s.data;
                for_each_indexed(buf, |i, g| *g = op.df(&s[i]) * *g);
            }
        }
        Ok(grad)
    }
}

impl<E: Dtype, Op: ActivationDoubleDerivative<E>> ActivationDoubleKernel<Op, E> for Cpu {
    fn double_backward(
        &self,
        op: &Op,
        saved: &Tensor<E, Self>,
        dd_inp: &Tensor<E, Self>,
        grad: Option<&Tensor<E, Self>>,
        want_dd_out: bool,
        want_cross: bool,
    ) -> Result<(Option<Tensor<E, Self>>, Option<Tensor<E, Self>>), Error> {
        let numel = dd_inp.shape.num_elements();
        let s = &saved.data;
        let ddx = &dd_inp.data;

        let dd_out = if want_dd_out {
            let mut buf = self.try_alloc_zeros::<E>(numel)?;
            for_each_indexed(&mut buf, |i, o| *o = op.dd_out(&s[i], &ddx[i]));
            Some(self.build_tensor(dd_inp.shape.clone(), buf))
        } else {
            None
        };

        let cross = if want_cross {
            let mut buf = self.try_alloc_zeros::<E>(numel)?;
            match (Op::DOUBLE_GRAD, grad) {
                (DoubleGradOperands::Standard, _) => (),
                (_, Some(g)) => {
                    let g = &g.data;
                    for_each_indexed(&mut buf, |i, o| *o = op.cross(&s[i], &ddx[i], &g[i]));
                }
                _ => unreachable!(),
            }
            Some(self.build_tensor(dd_inp.shape.clone(), buf))
        } else {
            None
        };

        Ok((dd_out, cross))
    }
}
