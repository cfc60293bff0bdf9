//! Complex number arithmetic for the transform core.
//! Immutable value semantics: every operation returns a new value.
//! no_std + alloc compatible.

use core::fmt;

use libm::{cos, cosf, sin, sincos, sincosf, sinf, sqrt, sqrtf};

/// Minimal float abstraction the transform is generic over.
///
/// Math functions route through `libm` so the same impls work with and
/// without `std`. `f64` is the primary precision; `f32` shares the surface.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Convert a sample count into the floating-point type. Rounds when the
    /// count is not exactly representable; every power of two in range is,
    /// and the transform only ever converts powers of two and their indices.
    fn from_usize(x: usize) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
    fn pi() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn cos(self) -> Self {
        cosf(self)
    }
    fn sin(self) -> Self {
        sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        sincosf(self)
    }
    fn sqrt(self) -> Self {
        sqrtf(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn cos(self) -> Self {
        cos(self)
    }
    fn sin(self) -> Self {
        sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        sincos(self)
    }
    fn sqrt(self) -> Self {
        sqrt(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

/// A complex number as a real/imaginary pair.
///
/// Plain value type: `Copy`, componentwise equality, no identity. NaN and
/// infinity pass through every operation arithmetically, never rejected.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// `exp(i·theta)` on the unit circle; the twiddle-factor constructor.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    /// Complex product, computed with the plain componentwise formula. No fma
    /// contraction; results are bit-identical across targets.
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
    /// Complex conjugate `(re, -im)`.
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// Multiply both components by a real scalar.
    #[inline(always)]
    pub fn scale(self, s: T) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }
    /// Magnitude `sqrt(re² + im²)`. Diagnostic helper; the transform itself
    /// never calls it.
    #[inline(always)]
    pub fn abs(self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

/// Sign-aware rendering for diagnostics: `3 + 4i`, `3 - 4i`, a bare real
/// when `im` is zero, a bare `imi` when `re` is zero.
impl<T: Float + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == T::zero() {
            write!(f, "{}", self.re)
        } else if self.re == T::zero() {
            write!(f, "{}i", self.im)
        } else if self.im < T::zero() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
