use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative, ActivationDoubleDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::SqrtKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.sqrt()
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        cast::<F>(0.5) / *fx
    }
}

impl<F: num_traits::Float> ActivationDoubleDerivative<F> for super::SqrtKernelOp {
    #[inline(always)]
    fn dd_out(&self, out: &F, ddx: &F) -> F {
        *ddx * cast(0.5) / *out
    }

    #[inline(always)]
    fn cross(&self, out: &F, ddx: &F, dx: &F) -> F {
        -*dx * *ddx / *out
    }
}
