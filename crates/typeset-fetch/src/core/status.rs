/// Returns `true` if the HTTP status code lies in the success range `[200, 300)`.
///
/// # Examples
///
/// ```
/// use typeset_fetch::core::is_success;
///
/// assert!(is_success(200));
/// assert!(is_success(204));
/// assert!(!is_success(304));
/// assert!(!is_success(404));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
