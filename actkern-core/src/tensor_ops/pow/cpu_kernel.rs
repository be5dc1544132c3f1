use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::PowKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.powf(cast(self.factor))
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let factor: F = cast(self.factor);
        factor * x.powf(factor - F::one())
    }
}
