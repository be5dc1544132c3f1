/// Slice level math used by the staged (vectorized) activation paths.
///
/// The scalar loops are always available; with the `cblas` feature
/// [VecMath::axpy] is routed through the linked CBLAS library for `f32`
/// and `f64`.
pub trait VecMath: num_traits::Float {
    /// The error function.
    fn erf(self) -> Self;

    /// `y += alpha * x`
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        for (y, &x) in y.iter_mut().zip(x.iter()) {
            *y = *y + alpha * x;
        }
    }

    fn v_erf(xs: &mut [Self]) {
        for x in xs.iter_mut() {
            *x = x.erf();
        }
    }

    fn v_exp(xs: &mut [Self]) {
        for x in xs.iter_mut() {
            *x = x.exp();
        }
    }

    /// `b *= a`
    fn v_mul(a: &[Self], b: &mut [Self]) {
        for (b, &a) in b.iter_mut().zip(a.iter()) {
            *b = *b * a;
        }
    }

    fn v_square(x: &[Self], out: &mut [Self]) {
        for (o, &x) in out.iter_mut().zip(x.iter()) {
            *o = x * x;
        }
    }
}

impl VecMath for f32 {
    #[inline(always)]
    fn erf(self) -> Self {
        libm::erff(self)
    }

    #[cfg(feature = "cblas")]
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        let n = x.len().min(y.len());
        unsafe { cblas_sys::cblas_saxpy(n as i32, alpha, x.as_ptr(), 1, y.as_mut_ptr(), 1) }
    }
}

impl VecMath for f64 {
    #[inline(always)]
    fn erf(self) -> Self {
        libm::erf(self)
    }

    #[cfg(feature = "cblas")]
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        let n = x.len().min(y.len());
        unsafe { cblas_sys::cblas_daxpy(n as i32, alpha, x.as_ptr(), 1, y.as_mut_ptr(), 1) }
    }
}

#[cfg(feature = "f16")]
impl VecMath for half::f16 {
    #[inline(always)]
    fn erf(self) -> Self {
        half::f16::from_f32(libm::erff(self.to_f32()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_values() {
        assert!((0.0f32.erf()).abs() < 1e-7);
        assert!((1.0f64.erf() - 0.8427007929497149).abs() < 1e-12);
        assert!(((-1.0f32).erf() + 0.8427008).abs() < 1e-6);
    }

    #[test]
    fn test_axpy_accumulates() {
        let x = [1.0f32, 2.0, 3.0];
        let mut y = [1.0f32, 1.0, 1.0];
        f32::axpy(0.5, &x, &mut y);
        assert_eq!(y, [1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_v_mul_and_square() {
        let a = [2.0f64, -1.0];
        let mut b = [3.0f64, 4.0];
        f64::v_mul(&a, &mut b);
        assert_eq!(b, [6.0, -4.0]);
        let mut sq = [0.0; 2];
        f64::v_square(&a, &mut sq);
        assert_eq!(sq, [4.0, 1.0]);
    }
}
