//! Module for data type related traits. Contains [Unit], [Dtype] and the
//! [VecMath] capability every activation body can call into.
//!
//! When the `f16` feature is enabled, this exports the [f16] type.

mod vec_math;

pub use vec_math::VecMath;

#[cfg(feature = "f16")]
pub use half::f16;

/// Represents a unit type, but no arithmetic.
pub trait Unit:
    'static
    + Copy
    + Clone
    + Default
    + std::fmt::Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + std::marker::Unpin
{
    const ONE: Self;
}

macro_rules! unit {
    ($type:ty, $one:expr) => {
        impl Unit for $type {
            const ONE: Self = $one;
        }
    };
}

unit!(f32, 1.0);
unit!(f64, 1.0);
unit!(usize, 1);
unit!(i64, 1);
unit!(bool, true);
#[cfg(feature = "f16")]
unit!(f16, f16::ONE);

/// Represents a floating point element that activation kernels can be
/// computed over.
pub trait Dtype:
    Unit
    + num_traits::Float
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + std::fmt::Display
    + VecMath
{
}
impl Dtype for f32 {}
impl Dtype for f64 {}
#[cfg(feature = "f16")]
impl Dtype for f16 {}

/// Represents something that has a [Dtype].
pub trait HasDtype {
    type Dtype: Dtype;
}
