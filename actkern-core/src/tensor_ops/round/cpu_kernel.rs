use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::RoundKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.round()
    }

    #[inline(always)]
    fn df(&self, _: &F) -> F {
        F::zero()
    }

    #[inline(always)]
    fn const_df(&self) -> F {
        F::zero()
    }
}
