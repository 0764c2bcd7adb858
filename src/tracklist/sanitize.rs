/// Clean an artist or title so it can be used in a file name and a tag.
///
/// Keeps word characters (letters, digits, `_`) and spaces, drops everything
/// else, then trims. Spacing between words is left as it was.
pub fn sanitize(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == ' ')
        .collect();
    kept.trim().to_string()
}
