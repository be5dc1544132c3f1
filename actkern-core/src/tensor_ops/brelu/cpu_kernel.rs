use crate::tensor_ops::cpu_kernels::{cast, ActivationDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::BReluKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.max(cast(self.t_min)).min(cast(self.t_max))
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        if *x > cast(self.t_min) && *x < cast(self.t_max) {
            F::one()
        } else {
            F::zero()
        }
    }
}
