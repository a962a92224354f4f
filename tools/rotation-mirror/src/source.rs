//! The forward rotation functions that the mirror pass runs over.

/// Forward rotations `rotate_1` .. `rotate_6`, exactly as they appear in
/// the cube implementation. Column layout matters: the swap offsets in
/// [`crate::config::SwapColumns`] index straight into these lines.
pub const ROTATIONS_SOURCE: &str = include_str!("../assets/rotations.rs.in");

/// Split the embedded source into lines.
///
/// Splits on `'\n'` rather than using `str::lines`, so the leading and
/// trailing newlines of the literal each produce an empty line.
pub fn source_lines() -> Vec<&'static str> {
    ROTATIONS_SOURCE.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_ascii() {
        assert!(ROTATIONS_SOURCE.is_ascii());
    }

    #[test]
    fn test_source_lines_keep_outer_blanks() {
        let lines = source_lines();
        assert_eq!(lines.len(), 181);
        assert_eq!(lines.first(), Some(&""));
        assert_eq!(lines.last(), Some(&""));
        assert_eq!(lines[1], "    fn rotate_1(&self) -> Cube {");
    }
}
