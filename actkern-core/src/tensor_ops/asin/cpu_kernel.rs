use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::AsinKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.asin()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        (F::one() - x.powi(2)).sqrt().recip()
    }
}
