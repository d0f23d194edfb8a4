//! # Notation Lexer
//!
//! Splits a notation string into operator tokens, a seed letter and the
//! seed parameter:
//!
//! ```text
//! t4 d k Y 4
//! ^^ ^ ^ ^ ^
//! |  | | | seed parameter (trailing digit run)
//! |  | | seed letter (the char before it)
//! operator codes, each with an optional digit argument
//! ```
//!
//! Decoding never fails; unknown letters are left for the interpreter to
//! report.
//!
//! Digits after an operator code are that operator's argument, so `k3C` is
//! kis on triangles only. Classic notation readers skip those digits and
//! read `k3C` as plain `kC`.

/// One operator code with its optional numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpToken {
    /// Operator code as written.
    pub code: char,
    /// Digits written directly after the code. Saturates at `u32::MAX`.
    pub arg: Option<u32>,
}

/// A decoded notation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    /// Operator tokens in written order, outermost first.
    pub ops: Vec<OpToken>,
    /// Seed letter, `None` when the string has no non-digit character.
    pub seed: Option<char>,
    /// Seed parameter: zero when absent, `-1` when it overflows `u32`.
    pub param: i64,
}

impl Notation {
    /// Decodes `text`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use conway_notation::{Notation, OpToken};
    ///
    /// let notation = Notation::decode("k4dP5");
    /// assert_eq!(notation.seed, Some('P'));
    /// assert_eq!(notation.param, 5);
    /// assert_eq!(
    ///     notation.ops,
    ///     [
    ///         OpToken { code: 'k', arg: Some(4) },
    ///         OpToken { code: 'd', arg: None },
    ///     ]
    /// );
    /// ```
    pub fn decode(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();

        let mut end = chars.len();
        while end > 0 && chars[end - 1].is_ascii_digit() {
            end -= 1;
        }
        let param = match &chars[end..] {
            [] => 0,
            digits => parse_digits(digits).map_or(-1, i64::from),
        };

        if end == 0 {
            return Self {
                ops: Vec::new(),
                seed: None,
                param,
            };
        }

        Self {
            ops: tokenize(&chars[..end - 1]),
            seed: Some(chars[end - 1]),
            param,
        }
    }
}

fn tokenize(chars: &[char]) -> Vec<OpToken> {
    let mut ops = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let code = chars[i];
        i += 1;
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let arg = match &chars[start..i] {
            [] => None,
            digits => Some(parse_digits(digits).unwrap_or(u32::MAX)),
        };
        ops.push(OpToken { code, arg });
    }
    ops
}

fn parse_digits(digits: &[char]) -> Option<u32> {
    digits.iter().collect::<String>().parse().ok()
}

// =============================================================================
// TESTS
// =============================================================================
