use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::SoftReluKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let t: F = cast(self.threshold);
        (F::one() + x.max(-t).min(t).exp()).ln()
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        let t: F = cast(self.threshold);
        if *fx > -t && *fx < t {
            F::one() - (-*fx).exp()
        } else {
            F::zero()
        }
    }
}
