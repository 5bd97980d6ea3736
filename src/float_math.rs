//! Trigonometry that dispatches to either the standard library or `libm`.
//!
//! The elemental rotation matrices are the only place this crate evaluates transcendental
//! functions, so picking `libm` gives bit-for-bit identical matrices across platforms.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "euler-frames requires floating-point math support. \
     Enable either the `std` feature (default) or the `libm` feature."
);

/// Extension trait for f64 that routes through the selected math backend.
///
/// Call sites use the fully qualified form (`FloatMath::sin(x)`) so that the inherent `f64`
/// methods never shadow the `libm` implementation.
pub(crate) trait FloatMath {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

#[cfg(feature = "std")]
impl FloatMath for f64 {
    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatMath for f64 {
    #[inline]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        libm::cos(self)
    }
}
