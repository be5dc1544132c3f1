use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::SoftplusKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let m = x.max(F::zero());
        m + ((-m).exp() + (*x - m).exp()).ln()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let m = x.max(F::zero());
        let e = (*x - m).exp();
        e / ((-m).exp() + e)
    }
}
