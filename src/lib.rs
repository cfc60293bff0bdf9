//! # ditfft - Recursive radix-2 FFT for Rust
//!
//! A small, allocation-per-call Fast Fourier Transform built on the textbook
//! Cooley-Tukey decimation-in-time recursion, with the inverse derived from
//! the forward transform by conjugation. Ships its own complex arithmetic
//! type, works on `no_std` targets with `alloc`, and is generic over `f32`
//! and `f64`.
//!
//! ## Features
//!
//! - **Forward and inverse transforms** for power-of-two lengths
//! - **Self-contained complex type** with value-semantics arithmetic
//! - **no_std + alloc** support for embedded targets
//! - **Deterministic output**: no caches, no global state, no threads
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for error types
//! - `verbose-logging`: emit `log` records describing each transform
//! - `internal-tests`: enable property-based and randomized test suites
//!
//! ## Example
//!
//! ```
//! use ditfft::{fft, ifft, Complex64};
//!
//! let x = vec![Complex64::new(1.0, 0.0); 4];
//! let y = fft(&x).unwrap();
//! assert!((y[0].re - 4.0).abs() < 1e-9);
//!
//! let z = ifft(&y).unwrap();
//! assert!((z[0].re - 1.0).abs() < 1e-9);
//! ```
//!
//! Run the demos with:
//! ```bash
//! cargo run --example basic_usage
//! cargo run --example verbose_logging --features verbose-logging
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod fft;
pub mod num;

pub use fft::{fft, fft_into, ifft, ifft_into, FftError};
pub use num::{Complex, Complex32, Complex64, Float};


#[cfg(all(feature = "internal-tests", test))]
mod random_tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::Rng;

    #[test]
    fn random_signals_roundtrip_at_every_power_of_two() {
        let mut rng = rand::thread_rng();
        for exp in 0..=10 {
            let n = 1usize << exp;
            let x: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
                .collect();
            let z = ifft(&fft(&x).unwrap()).unwrap();
            for (a, b) in z.iter().zip(x.iter()) {
                assert!((a.re - b.re).abs() < 1e-9);
                assert!((a.im - b.im).abs() < 1e-9);
            }
        }
    }
}
