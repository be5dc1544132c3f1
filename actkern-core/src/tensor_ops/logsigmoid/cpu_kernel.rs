use crate::tensor_ops::cpu_kernels::ActivationDerivative;

impl<F: num_traits::Float> ActivationDerivative<F> for super::LogSigmoidKernelOp {
    // -(m + log(e^-m + e^(-x - m))), m = max(-x, 0)
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let m = x.neg().max(F::zero());
        -(m + (m.neg().exp() + (x.neg() - m).exp()).ln())
    }

    // e^(-x - m) / (e^-m + e^(-x - m))
    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let m = x.neg().max(F::zero());
        let e = (x.neg() - m).exp();
        e / (m.neg().exp() + e)
    }
}
