//! Information about the available feature flags.
//!
//! # "std"
//!
//! **Enabled by default**
//!
//! Implements `std::error::Error` for [crate::tensor::Error].
//!
//! # "parallel"
//!
//! Runs the elementwise loops of the [crate::tensor::Cpu] kernels with
//! [rayon](https://docs.rs/rayon/latest/rayon/) parallel iterators.
//!
//! # "cblas"
//!
//! Routes [crate::dtypes::VecMath::axpy] for `f32` and `f64` through a CBLAS
//! library, and switches gelu and gelu_grad to a staged slice formulation built
//! on it. The results agree with the default path up to rounding.
//!
//! A CBLAS implementation must be linked by the final binary, e.g. by
//! depending on `openblas-src` or `intel-mkl-src`.
//!
//! # "f16"
//!
//! Adds [half::f16](https://docs.rs/half/latest/half/struct.f16.html) as an
//! element type. Math is done in `f16` except for `erf`, which goes through
//! `f32`.
//!
//! # "test-f64"
//!
//! Runs the unit tests of `actkern-core` with `f64` instead of `f32`.
