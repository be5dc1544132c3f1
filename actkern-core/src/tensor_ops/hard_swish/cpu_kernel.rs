use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::HardSwishKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let shifted = *x + cast(self.offset);
        shifted.max(F::zero()).min(cast(self.threshold)) * *x / cast(self.scale)
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let shifted = *x + cast(self.offset);
        if shifted >= cast(self.threshold) {
            F::one()
        } else if shifted > F::zero() {
            (*x + *x + cast(self.offset)) / cast(self.scale)
        } else {
            F::zero()
        }
    }
}
