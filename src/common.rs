// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![cfg_attr(
    not(feature = "std"),
    expect(missing_docs, reason = "the float methods are documented in std")
)]

#[cfg(not(feature = "std"))]
mod sealed {
    /// A [sealed trait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/)
    /// which stops [`super::FloatFuncs`] from being implemented outside knotwork.
    pub trait FloatFuncsSealed {}
}

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {

        /// Since core doesn't depend upon libm, this provides libm implementations
        /// of float functions which are typically provided by the std library, when
        /// the `std` feature is not enabled.
        ///
        /// For documentation see the respective functions in the std library.
        #[cfg(not(feature = "std"))]
        pub trait FloatFuncs : Sized + sealed::FloatFuncsSealed {
            /// For documentation see <https://doc.rust-lang.org/std/primitive.f64.html#method.rem_euclid>
            ///
            /// Special implementation, because libm doesn't have it.
            fn rem_euclid(self, rhs: Self) -> Self;

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl sealed::FloatFuncsSealed for f64 {}

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            #[inline]
            fn rem_euclid(self, rhs: Self) -> Self {
                let r = self % rhs;
                if r < 0.0 {
                    r + rhs.abs()
                } else {
                    r
                }
            }

            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("knotwork requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn atan2(self, other: Self) -> Self => atan2;
    fn cos(self) -> Self => cos;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
    fn trunc(self) -> Self => trunc;
}

/// Compare two floats with a tolerance scaled by their magnitude.
///
/// Values below 1.0 in magnitude are compared absolutely.
///
/// # Examples
///
/// ```
/// use knotwork::common::approx_eq;
///
/// assert!(approx_eq(11.0 / 6.0, 1.8333333333333333, 1e-12));
/// assert!(!approx_eq(1.0, 1.001, 1e-9));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

#[cfg(test)]
mod tests {
    use super::approx_eq;

    #[test]
    fn approx_eq_scales_with_magnitude() {
        assert!(approx_eq(1e6, 1e6 + 1e-4, 1e-9));
        assert!(!approx_eq(1e-3, 2e-3, 1e-9));
        assert!(approx_eq(0.0, 1e-10, 1e-9));
    }
}
