/// Formats number with at most four decimal places, dropping trailing zeros.
/// ```
/// use agon_core::util::format_decimal;
/// assert_eq!(format_decimal(1.0), "1");
/// assert_eq!(format_decimal(2.0/3.0), "0.6667");
/// assert_eq!(format_decimal(-0.0), "0");
/// assert_eq!(format_decimal(-7.5), "-7.5");
/// ```
pub fn format_decimal(value: f64) -> String{
    let s = format!("{value:.4}");
    let s = if s.contains('.'){
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// Formats slice of numbers as `[a, b, ...]` using [`format_decimal`].
pub fn format_vector<'a>(values: impl IntoIterator<Item = &'a f64>) -> String{
    let inner = values.into_iter()
        .map(|v| format_decimal(*v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}
