use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative, ActivationDoubleDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::LeakyReluKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.max(*x * cast(self.alpha))
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        if *fx >= F::zero() {
            F::one()
        } else {
            cast(self.alpha)
        }
    }
}

impl<F: num_traits::Float> ActivationDoubleDerivative<F> for super::LeakyReluKernelOp {
    #[inline(always)]
    fn dd_out(&self, out: &F, ddx: &F) -> F {
        *ddx * self.df(out)
    }
}
