use crate::tensor_ops::cpu_kernels::{ActivationDerivative, ActivationDoubleDerivative};

impl<F: num_traits::Float> ActivationDerivative<F> for super::ReluKernelOp {
    #[inline(always)]
    fn f(&self, x: &F) -> F {
        x.max(F::zero())
    }

    #[inline(always)]
    fn df(&self, fx: &F) -> F {
        if fx > &F::zero() {
            F::one()
        } else {
            F::zero()
        }
    }
}

impl<F: num_traits::Float> ActivationDoubleDerivative<F> for super::ReluKernelOp {
    #[inline(always)]
    fn dd_out(&self, out: &F, ddx: &F) -> F {
        if out > &F::zero() {
            *ddx
        } else {
            F::zero()
        }
    }
}
