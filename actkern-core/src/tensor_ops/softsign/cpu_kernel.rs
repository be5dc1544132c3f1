use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::SoftsignKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        *x / (F::one() + x.abs())
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        (F::one() + x.abs()).powi(2).recip()
    }
}
