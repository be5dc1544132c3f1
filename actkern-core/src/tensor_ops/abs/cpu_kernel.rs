use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::AbsKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.abs()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        if x > &F::zero() {
            F::one()
        } else if x < &F::zero() {
            -F::one()
        } else {
            F::zero()
        }
    }
}
