/// Delimiter used by the simulator's text output.
pub const FIELD_DELIMITER: char = ' ';

/// Splits `line` on `delimiter`, dropping the empty segments produced by
/// consecutive, leading or trailing delimiters.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .collect()
}
