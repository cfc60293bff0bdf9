//! Fast Fourier Transform (FFT), radix-2 decimation in time.
//!
//! This module implements the forward transform with the recursive
//! [Cooley-Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! and derives the inverse from it by conjugating the input and the output
//! and scaling by `1/n`. Input lengths must be powers of two; twiddle factors
//! are computed on demand, never cached.
//! no_std + alloc compatible.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

pub use crate::num::{Complex, Complex32, Complex64, Float};

/// Errors that can occur when applying a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The input length is zero or not a power of two.
    NonPowerOfTwo,
    /// The output buffer length differs from the input length.
    MismatchedLengths,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::NonPowerOfTwo => write!(f, "input length must be a power of two"),
            FftError::MismatchedLengths => {
                write!(f, "output length must equal the input length")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Compute the DFT of `input`, whose length must be a power of two.
///
/// # Parameters
/// - `input`: complex samples; the slice is not modified.
///
/// # Returns
/// `Ok` with a vector of the same length holding
/// `y[k] = Σ_j x[j]·exp(-2πi·j·k/n)`, the unnormalized DFT, or
/// `Err(FftError::NonPowerOfTwo)` if the length is zero or not a power of
/// two.
///
/// # Algorithm
/// Decimation in time: the samples are split by index parity, each half is
/// transformed recursively, and the halves are recombined with one butterfly
/// per output pair. Recursion depth is `log2(n)`.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    // A length of zero would split into two empty halves and recurse forever,
    // so reject it up front; every other invalid length surfaces as an odd
    // sublength inside the recursion.
    if input.is_empty() {
        return Err(FftError::NonPowerOfTwo);
    }
    #[cfg(feature = "verbose-logging")]
    log::debug!("fft: forward transform, n = {}", input.len());
    fft_recursive(input)
}

fn fft_recursive<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = input.len();

    // The DFT of a single sample is the sample itself.
    if n == 1 {
        return Ok(vec![input[0]]);
    }
    // An odd length at any level means the top-level length was not a power
    // of two.
    if n % 2 != 0 {
        return Err(FftError::NonPowerOfTwo);
    }

    let even: Vec<Complex<T>> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<T>> = input.iter().skip(1).step_by(2).copied().collect();

    let even_out = fft_recursive(&even)?;
    let odd_out = fft_recursive(&odd)?;

    let half = n / 2;
    let mut output = vec![Complex::zero(); n];
    for k in 0..half {
        let theta = T::from_f32(-2.0) * T::pi() * T::from_usize(k) / T::from_usize(n);
        let t = Complex::expi(theta).mul(odd_out[k]);
        output[k] = even_out[k].add(t);
        output[k + half] = even_out[k].sub(t);
    }
    Ok(output)
}

/// Compute the inverse DFT of `input`, whose length must be a power of two.
///
/// # Returns
/// `Ok` with a vector of the same length holding
/// `x[j] = (1/n)·Σ_k y[k]·exp(+2πi·j·k/n)`, or
/// `Err(FftError::NonPowerOfTwo)` for an invalid length.
///
/// # Algorithm
/// Conjugation trick: conjugate every sample, apply the forward transform,
/// conjugate the result, scale by `1/n`. This is algebraically exact, not an
/// approximation, so no second transform kernel is needed.
pub fn ifft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    #[cfg(feature = "verbose-logging")]
    log::debug!("ifft: inverse transform, n = {}", input.len());

    let conjugated: Vec<Complex<T>> = input.iter().map(|c| c.conj()).collect();
    let mut output = fft(&conjugated)?;

    let scale = T::one() / T::from_usize(output.len());
    for c in output.iter_mut() {
        *c = c.conj().scale(scale);
    }
    Ok(output)
}

/// Forward transform into a caller-provided buffer.
///
/// `output` must have the same length as `input`; the input slice is left
/// untouched. Runs the same recursion as [`fft`].
pub fn fft_into<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<(), FftError> {
    if input.len() != output.len() {
        return Err(FftError::MismatchedLengths);
    }
    let result = fft(input)?;
    output.copy_from_slice(&result);
    Ok(())
}

/// Inverse transform into a caller-provided buffer.
///
/// `output` must have the same length as `input`; the input slice is left
/// untouched. Runs the same recursion as [`ifft`].
pub fn ifft_into<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
) -> Result<(), FftError> {
    if input.len() != output.len() {
        return Err(FftError::MismatchedLengths);
    }
    let result = ifft(input)?;
    output.copy_from_slice(&result);
    Ok(())
}


#[cfg(all(feature = "internal-tests", test))]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn signal_of_power_of_two_len() -> impl Strategy<Value = Vec<Complex64>> {
        (0u32..=7).prop_flat_map(|exp| {
            proptest::collection::vec(
                (-1000.0f64..1000.0, -1000.0f64..1000.0)
                    .prop_map(|(re, im)| Complex64::new(re, im)),
                1usize << exp,
            )
        })
    }

    proptest! {
        #[test]
        fn prop_roundtrip_recovers_signal(x in signal_of_power_of_two_len()) {
            let z = ifft(&fft(&x).unwrap()).unwrap();
            for (a, b) in z.iter().zip(x.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-6);
                prop_assert!((a.im - b.im).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_length_is_preserved(x in signal_of_power_of_two_len()) {
            prop_assert_eq!(fft(&x).unwrap().len(), x.len());
            prop_assert_eq!(ifft(&x).unwrap().len(), x.len());
        }

        #[test]
        fn prop_non_power_of_two_always_errors(n in 2usize..200) {
            prop_assume!(!n.is_power_of_two());
            let x = vec![Complex64::new(1.0, 0.0); n];
            prop_assert_eq!(fft(&x), Err(FftError::NonPowerOfTwo));
        }
    }
}
