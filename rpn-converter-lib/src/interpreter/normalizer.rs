/// Removes all whitespace and lowercases every letter. Other characters are kept as-is.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize(" SiN ( 2 + 3 ) "), "sin(2+3)");
/// ```
pub fn normalize(expression: &str) -> String {
    expression
        .chars()
        .filter(|character| !character.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
