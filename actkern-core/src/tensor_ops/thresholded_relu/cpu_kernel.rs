use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::ThresholdedReluKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        if *x > cast(self.threshold) {
            *x
        } else {
            F::zero()
        }
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        if *x > cast(self.threshold) {
            F::one()
        } else {
            F::zero()
        }
    }
}
