use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::TanhKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.tanh()
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        F::one() - fx.powi(2)
    }
}
