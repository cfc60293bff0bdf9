//! Demonstrates enabling verbose logging for ditfft.
use ditfft::{fft, ifft, Complex64};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let x = vec![
        Complex64::new(1.0, 0.0),
        Complex64::new(2.0, 0.0),
        Complex64::new(3.0, 0.0),
        Complex64::new(4.0, 0.0),
    ];
    let y = fft(&x).unwrap();
    let _ = ifft(&y).unwrap();
}
