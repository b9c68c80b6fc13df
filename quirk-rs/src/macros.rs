/// Build a [`num_complex::Complex64`] with only a real component.
#[macro_export]
macro_rules! real {
    ($value:expr) => {{
        ::num_complex::Complex64::new($value, 0f64)
    }};
}

/// Build a [`num_complex::Complex64`] with only an imaginary component.
#[macro_export]
macro_rules! imag {
    ($value:expr) => {{
        ::num_complex::Complex64::new(0f64, $value)
    }};
}
