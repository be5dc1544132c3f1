use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative, ActivationDoubleDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::EluKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let alpha: F = cast(self.alpha);
        x.max(F::zero()) + (alpha * (x.exp() - F::one())).min(F::zero())
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        if *x > F::zero() {
            F::one()
        } else if *x < F::zero() {
            cast::<F>(self.alpha) * x.exp()
        } else {
            F::zero()
        }
    }
}

impl<F: num_traits::Float> ActivationDoubleDerivative<F> for super::EluKernelOp {
    #[inline(always)]
    fn dd_out(&self, x: &F, ddx: &F) -> F {
        *ddx * self.df(x)
    }

    #[inline(always)]
    fn cross(&self, x: &F, ddx: &F, dout: &F) -> F {
        if *x < F::zero() {
            *ddx * *dout * cast(self.alpha) * x.exp()
        } else {
            F::zero()
        }
    }
}
