//! Non-blank line counting over stripped source bytes

/// Bytes that do not make a line count.
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

/// Count lines that contain at least one byte other than space, tab or CR.
///
/// Lines are delimited by `\n`. A final line without a trailing newline is
/// counted under the same rule.
pub fn count_non_blank_lines(bytes: &[u8]) -> usize {
    bytes
        .split(|&b| b == b'\n')
        .filter(|line| line.iter().any(|&b| !is_blank(b)))
        .count()
}
