use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::SigmoidKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        F::one() / (F::one() + x.neg().exp())
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        *fx * (F::one() - *fx)
    }
}
