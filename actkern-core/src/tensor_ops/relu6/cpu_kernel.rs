use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::Relu6KernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.max(F::zero()).min(cast(self.threshold))
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        if *fx > F::zero() && *fx < cast(self.threshold) {
            F::one()
        } else {
            F::zero()
        }
    }
}
