use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative, ActivationDoubleDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::SquareKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.powi(2)
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        *x + *x
    }
}

impl<F: num_traits::Float> ActivationDoubleDerivative<F> for super::SquareKernelOp {
    #[inline(always)]
    fn dd_out(&self, x: &F, ddx: &F) -> F {
        cast::<F>(2.0) * *ddx * *x
    }

    #[inline(always)]
    fn cross(&self, _: &F, ddx: &F, dout: &F) -> F {
        cast::<F>(2.0) * *ddx * *dout
    }
}
