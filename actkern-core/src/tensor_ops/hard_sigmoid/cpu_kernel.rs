use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::HardSigmoidKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let y = cast::<F>(self.slope) * *x + cast(self.offset);
        y.max(F::zero()).min(F::one())
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        if *fx > F::zero() && *fx < F::one() {
            cast(self.slope)
        } else {
            F::zero()
        }
    }
}
