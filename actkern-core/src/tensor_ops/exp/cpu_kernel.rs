use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::ExpKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.exp()
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        *fx
    }
}
