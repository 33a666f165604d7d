use crate::engine::Post;

/// Parses a post number (`"1"`, `"2"` or `"3"`) into a `Post`.
///
/// Surrounding whitespace is ignored.
///
/// # Returns
/// * `Ok(Post)` if `s` is one of the three post numbers.
/// * `Err(String)` if `s` is not a number, or names a post outside 1 to 3.
///
/// # Examples
/// ```
/// use hanoi_solver::engine::Post;
/// use hanoi_solver::utils::parse_post;
///
/// assert_eq!(parse_post("3"), Ok(Post::Third));
/// assert!(parse_post("4").is_err());
/// assert!(parse_post("x").is_err());
/// ```
pub fn parse_post(s: &str) -> Result<Post, String> {
    let trimmed = s.trim();
    let number: u8 = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a post number", trimmed))?;
    Post::try_from(number).map_err(|e| e.to_string())
}

/// Parses a move written as two post numbers separated by whitespace, e.g. `"1 3"`.
///
/// # Returns
/// * `Ok((source, dest))` on success.
/// * `Err(String)` if the input does not hold exactly two valid post numbers.
pub fn parse_move(s: &str) -> Result<(Post, Post), String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    match parts.as_slice() {
        [source, dest] => Ok((parse_post(source)?, parse_post(dest)?)),
        _ => Err(format!(
            "Expected two post numbers (e.g. '1 3'), found {} value(s)",
            parts.len()
        )),
    }
}
