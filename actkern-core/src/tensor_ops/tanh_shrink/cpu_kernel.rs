use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::TanhShrinkKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        *x - x.tanh()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        x.tanh().powi(2)
    }
}
