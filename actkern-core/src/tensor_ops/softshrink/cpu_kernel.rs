use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::SoftShrinkKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let lambda: F = cast(self.lambda);
        if *x > lambda {
            *x - lambda
        } else if *x < -lambda {
            *x + lambda
        } else {
            F::zero()
        }
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let lambda: F = cast(self.lambda);
        if *x > lambda || *x < -lambda {
            F::one()
        } else {
            F::zero()
        }
    }
}
