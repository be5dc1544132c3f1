use crate::{
    dtypes::Dtype,
    tensor_ops::cpu_kernels::{cast, ActivationDerivative},
};

const SQRT_1_2: f32 = std::f32::consts::FRAC_1_SQRT_2;
// 1 / sqrt(2 * pi)
const INV_SQRT_2PI: f32 = std::f32::consts::FRAC_2_SQRT_PI * std::f32::consts::FRAC_1_SQRT_2 * 0.5;

impl<F: Dtype> ActivationDerivative<F> for super::GeluKernelOp {
    const HAS_SLICE_PATH: bool = cfg!(feature = "cblas");

    #[inline(always)]
    fn f(&self, x: &F) -> F {
        let half: F = cast(0.5);
        half * *x * (F::one() + (*x * cast(SQRT_1_2)).erf())
    }

    #[inline(always)]
    fn df(&self, x: &F) -> F {
        let half: F = cast(0.5);
        let first = half * (F::one() + (*x * cast(SQRT_1_2)).erf());
        let second = *x * (-half * *x * *x).exp() * cast(INV_SQRT_2PI);
        first + second
    }

    fn f_slice(&self, xs: &mut [F]) {
        let n = xs.len();
        let mut out = vec![F::zero(); n];
        // out = erf(x / sqrt(2))
        F::axpy(cast(SQRT_1_2), xs, &mut out);
        F::v_erf(&mut out);
        // out = 0.5 * x * (1 + out)
        for o in out.iter_mut() {
            *o = *o + F::one();
        }
        F::v_mul(xs, &mut out);
        for (x, o) in xs.iter_mut().zip(out.into_iter()) {
            *x = o * cast(0.5);
        }
    }

    fn df_slice(&self, xs: &[F], grad: &mut [F]) {
        let n = xs.len();

        // first = erf(x / sqrt(2))
        let mut first = vec![F::zero(); n];
        F::axpy(cast(SQRT_1_2), xs, &mut first);
        F::v_erf(&mut first);

        // second = x * exp(-x^2 / 2) / sqrt(2 * pi)
        let mut second = vec![F::zero(); n];
        F::v_square(xs, &mut second);
        for s in second.iter_mut() {
            *s = *s * cast(-0.5);
        }
        F::v_exp(&mut second);
        F::v_mul(xs, &mut second);
        for s in second.iter_mut() {
            *s = *s * cast(INV_SQRT_2PI);
        }

        // second = 0.5 + 0.5 * first + second
        F::axpy(cast(0.5), &first, &mut second);
        for s in second.iter_mut() {
            *s = *s + cast(0.5);
        }

        F::v_mul(&second, grad);
    }
}
