//! Comment stripping for C-style source files
//!
//! The stripper is a flat byte scanner with six states. It removes `//` line
//! comments and `/* */` block comments while leaving everything else intact,
//! including the contents of double-quoted strings, backtick raw strings and
//! single-quoted character literals. Newlines inside comments are kept so the
//! line structure of the surrounding code survives.
//!
//! Only ASCII markers are inspected; every other byte (including the parts of
//! multi-byte UTF-8 sequences) passes through untouched.
//!
//! # Example
//!
//! ```
//! use treeloc::strip_comments;
//!
//! let out = strip_comments(b"a // trailing comment\nb\n");
//! assert_eq!(out, b"a \nb\n");
//!
//! let url = strip_comments(b"x := \"http://example.com\"");
//! assert_eq!(url, b"x := \"http://example.com\"");
//! ```

/// Lexical state of the scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Normal,
    LineComment,
    BlockComment,
    InString,
    InRawString,
    InChar,
}

/// Bytes that can change state when scanning ordinary code.
fn is_normal_marker(b: u8) -> bool {
    matches!(b, b'/' | b'"' | b'`' | b'\'')
}

/// Comment-stripping scanner.
///
/// A stripper starts in [`ScanState::Normal`]. Use a fresh stripper per file;
/// the state left behind by an unterminated comment or literal must not leak
/// into the next input.
#[derive(Debug, Default)]
pub struct Stripper {
    state: ScanState,
}

impl Stripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Strip comments from `input`, appending the surviving bytes to `out`.
    ///
    /// The whole input is treated as one file: a `/` on the last byte has no
    /// lookahead and is emitted literally.
    pub fn strip_into(&mut self, input: &[u8], out: &mut Vec<u8>) {
        out.reserve(input.len());
        let len = input.len();
        let mut i = 0;

        while i < len {
            i = match self.state {
                ScanState::Normal => self.scan_normal(input, i, out),
                ScanState::LineComment => self.scan_line_comment(input, i, out),
                ScanState::BlockComment => self.scan_block_comment(input, i, out),
                ScanState::InString => self.scan_quoted(input, i, b'"', out),
                ScanState::InChar => self.scan_quoted(input, i, b'\'', out),
                ScanState::InRawString => self.scan_raw(input, i, out),
            };
        }
    }

    fn scan_normal(&mut self, input: &[u8], i: usize, out: &mut Vec<u8>) -> usize {
        let rest = &input[i..];
        let run = rest
            .iter()
            .position(|&b| is_normal_marker(b))
            .unwrap_or(rest.len());
        out.extend_from_slice(&rest[..run]);

        let mut i = i + run;
        let Some(&c) = input.get(i) else {
            return i;
        };
        i += 1;

        match c {
            b'/' => match input.get(i) {
                Some(b'/') => {
                    self.state = ScanState::LineComment;
                    i += 1;
                }
                Some(b'*') => {
                    self.state = ScanState::BlockComment;
                    i += 1;
                }
                _ => out.push(c),
            },
            b'"' => {
                out.push(c);
                self.state = ScanState::InString;
            }
            b'`' => {
                out.push(c);
                self.state = ScanState::InRawString;
            }
            _ => {
                out.push(c);
                self.state = ScanState::InChar;
            }
        }
        i
    }

    fn scan_line_comment(&mut self, input: &[u8], i: usize, out: &mut Vec<u8>) -> usize {
        match input[i..].iter().position(|&b| b == b'\n') {
            Some(pos) => {
                out.push(b'\n');
                self.state = ScanState::Normal;
                i + pos + 1
            }
            None => input.len(),
        }
    }

    fn scan_block_comment(&mut self, input: &[u8], i: usize, out: &mut Vec<u8>) -> usize {
        let rest = &input[i..];
        let Some(pos) = rest.iter().position(|&b| b == b'\n' || b == b'*') else {
            return input.len();
        };

        let i = i + pos + 1;
        if rest[pos] == b'\n' {
            out.push(b'\n');
            return i;
        }
        if input.get(i) == Some(&b'/') {
            self.state = ScanState::Normal;
            return i + 1;
        }
        i
    }

    /// Double-quoted strings and char literals: backslash escapes pass through
    /// as a pair, the matching quote returns to normal code.
    fn scan_quoted(&mut self, input: &[u8], i: usize, quote: u8, out: &mut Vec<u8>) -> usize {
        let rest = &input[i..];
        let run = rest
            .iter()
            .position(|&b| b == b'\\' || b == quote)
            .unwrap_or(rest.len());
        out.extend_from_slice(&rest[..run]);

        let mut i = i + run;
        let Some(&c) = input.get(i) else {
            return i;
        };
        out.push(c);
        i += 1;

        if c == quote {
            self.state = ScanState::Normal;
        } else if let Some(&escaped) = input.get(i) {
            out.push(escaped);
            i += 1;
        }
        i
    }

    fn scan_raw(&mut self, input: &[u8], i: usize, out: &mut Vec<u8>) -> usize {
        let rest = &input[i..];
        match rest.iter().position(|&b| b == b'`') {
            Some(pos) => {
                out.extend_from_slice(&rest[..=pos]);
                self.state = ScanState::Normal;
                i + pos + 1
            }
            None => {
                out.extend_from_slice(rest);
                input.len()
            }
        }
    }
}

/// Strip comments from a complete file's bytes.
pub fn strip_comments(input: &[u8]) -> Vec<u8> {
    strip_with_state(input).0
}

/// Strip comments and also return the state the scanner ended in.
///
/// A non-`Normal` final state means the input ended inside an unterminated
/// comment or literal. That is not an error.
pub fn strip_with_state(input: &[u8]) -> (Vec<u8>, ScanState) {
    let mut stripper = Stripper::new();
    let mut out = Vec::with_capacity(input.len());
    stripper.strip_into(input, &mut out);
    (out, stripper.state())
}
