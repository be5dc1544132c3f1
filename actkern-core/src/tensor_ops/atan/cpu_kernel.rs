use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::AtanKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.atan()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        (F::one() + x.powi(2)).recip()
    }
}
