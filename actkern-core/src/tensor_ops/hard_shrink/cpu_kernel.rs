use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::HardShrinkKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let threshold: F = cast(self.threshold);
        if *x < -threshold || *x > threshold {
            *x
        } else {
            F::zero()
        }
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let threshold: F = cast(self.threshold);
        if *x < -threshold || *x > threshold {
            F::one()
        } else {
            F::zero()
        }
    }
}
