use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::AcosKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.acos()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        -(F::one() - x.powi(2)).sqrt().recip()
    }
}
