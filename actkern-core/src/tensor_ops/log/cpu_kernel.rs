use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::LogKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.ln()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        x.recip()
    }
}
