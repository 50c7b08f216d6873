/// Renders a result value as a trimmed decimal string.
///
/// The value is first rendered with a fixed ten decimal places, then trailing
/// fractional zeros are stripped. If nothing remains after the decimal point,
/// the point itself is stripped too, so whole numbers print without a
/// fractional part.
///
/// # Parameters
/// - `value`: The value to render.
///
/// # Returns
/// The trimmed decimal representation.
///
/// # Example
/// ```
/// use summa::util::fmt::format_result;
///
/// assert_eq!(format_result(4.0), "4");
/// assert_eq!(format_result(4.5), "4.5");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    let mut rendered = format!("{value:.10}");

    while rendered.ends_with('0') {
        rendered.pop();
    }

    if rendered.ends_with('.') {
        rendered.pop();
    }

    rendered
}
