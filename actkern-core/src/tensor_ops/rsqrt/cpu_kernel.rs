use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::RsqrtKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.sqrt().recip()
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        cast::<F>(-0.5) * fx.powi(3)
    }
}
