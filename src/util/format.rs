use num_traits::Float;

/// Printed in place of a value which isn't available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Options for formatting floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatFormat {
    /// Minimum width, numbers are right-aligned and padded with spaces.
    pub width: usize,
    /// The precision displayed when formatting the float.
    pub precision: usize,
}

impl Default for FloatFormat {
    fn default() -> Self {
        FloatFormat {
            width: 5,
            precision: 2,
        }
    }
}

/// Format a float according to the given options.
pub fn float<F: Float>(n: F, fmt: &FloatFormat) -> String {
    let n = n.to_f64().unwrap_or(f64::NAN);
    format!(
        "{:>width$.precision$}",
        n,
        width = fmt.width,
        precision = fmt.precision
    )
}

/// Format an optional float, or `N/A` if it's missing.
pub fn float_or_na<F: Float>(n: Option<F>, fmt: &FloatFormat) -> String {
    match n {
        Some(n) => float(n, fmt),
        None => NOT_AVAILABLE.into(),
    }
}
