use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::SwishKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let beta: F = cast(self.beta);
        *x / (F::one() + (-beta * *x).exp())
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let beta: F = cast(self.beta);
        let out = self.f(x);
        let s = (F::one() + (-beta * *x).exp()).recip();
        beta * out + s * (F::one() - beta * out)
    }
}
