use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::CosKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.cos()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        -x.sin()
    }
}
