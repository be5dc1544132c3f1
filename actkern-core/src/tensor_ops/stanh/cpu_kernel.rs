use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::STanhKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        cast::<F>(self.scale_b) * (cast::<F>(self.scale_a) * *x).tanh()
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let a: F = cast(self.scale_a);
        let b: F = cast(self.scale_b);
        let t = (a * *x).tanh();
        a * b * (F::one() - t * t)
    }
}
