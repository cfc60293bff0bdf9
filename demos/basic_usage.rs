//! Basic usage example for ditfft
//!
//! Transforms a 32-sample real signal, then reconstructs it with the
//! inverse transform and prints every stage.

use ditfft::{fft, ifft, Complex64};

fn show(title: &str, data: &[Complex64]) {
    println!("{}", title);
    println!("-------------------");
    for c in data {
        println!("{}", c);
    }
    println!();
}

fn main() {
    let values = [
        2.28025, 1.32888, 0.39326, -0.49619, -1.31121, -2.02672, -2.62174, -3.08015, -3.39124,
        -3.55077, -3.55763, -3.42069, -3.15151, -2.76733, -2.28963, -1.74326, -1.15541, -0.55456,
        0.03068, 0.57271, 1.04606, 1.42835, 1.7122, 1.85105, 1.86948, 1.75376, 1.50688, 1.13742,
        0.65924, 0.09094, -0.54489, -1.22254,
    ];

    let x: Vec<Complex64> = values.iter().map(|&re| Complex64::new(re, 0.0)).collect();
    show("x", &x);

    let y = fft(&x).unwrap();
    show("y = fft(x)", &y);

    let z = ifft(&y).unwrap();
    show("z = ifft(y)", &z);
}
