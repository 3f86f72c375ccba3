//! Lexical rules shared by the decoder and the encoder.

pub(crate) const OBJECT_OPEN: u8 = b'<';
pub(crate) const OBJECT_CLOSE: u8 = b'>';
pub(crate) const ARRAY_OPEN: u8 = b'[';
pub(crate) const ARRAY_CLOSE: u8 = b']';
pub(crate) const ITEM_SEPARATOR: u8 = b'/';
pub(crate) const KEY_SEPARATOR: u8 = b'-';
pub(crate) const QUOTE: u8 = b'\'';
pub(crate) const ESCAPE: u8 = b'\\';

pub(crate) const TRUE_TAG: &str = "\\true";
pub(crate) const FALSE_TAG: &str = "\\false";
pub(crate) const NONE_TAG: &str = "\\none";

/// ASCII whitespace as classified by C `isspace`, including vertical tab.
#[inline]
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Bytes that terminate an unquoted string.
#[inline]
pub(crate) const fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        ITEM_SEPARATOR | OBJECT_OPEN | OBJECT_CLOSE | ARRAY_OPEN | ARRAY_CLOSE | KEY_SEPARATOR
    ) || is_space(b)
}

/// Bytes that must be backslash-escaped inside a quoted string.
#[inline]
pub(crate) const fn needs_escape(b: u8) -> bool {
    matches!(
        b,
        KEY_SEPARATOR
            | OBJECT_OPEN
            | OBJECT_CLOSE
            | ARRAY_OPEN
            | ARRAY_CLOSE
            | ITEM_SEPARATOR
            | QUOTE
            | ESCAPE
    )
}

/// Whether the number branch is attempted at `pos`: a digit, or `-` directly
/// followed by a digit.
#[inline]
pub(crate) fn starts_number(input: &[u8], pos: usize) -> bool {
    match input.get(pos) {
        Some(b) if b.is_ascii_digit() => true,
        Some(&KEY_SEPARATOR) => input.get(pos + 1).is_some_and(u8::is_ascii_digit),
        _ => false,
    }
}

/// Scans a decimal floating-point lexeme starting at `pos` and returns its end.
///
/// Grammar: `-? digit+ ('.' digit*)? ([eE] [+-]? digit+)?`. An exponent marker
/// that is not followed by digits is left unconsumed.
pub(crate) fn scan_number(input: &[u8], pos: usize) -> Option<usize> {
    let mut end = pos;
    if input.get(end) == Some(&b'-') {
        end += 1;
    }

    let digits_start = end;
    end = skip_digits(input, end);
    if end == digits_start {
        return None;
    }

    if input.get(end) == Some(&b'.') {
        end = skip_digits(input, end + 1);
    }

    if matches!(input.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(input.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = skip_digits(input, exp);
        if exp_digits > exp {
            end = exp_digits;
        }
    }

    Some(end)
}

#[inline]
fn skip_digits(input: &[u8], mut pos: usize) -> usize {
    while input.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Whether a string used as an object key must be quoted.
pub(crate) fn key_needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.chars().any(|ch| {
            ch.is_whitespace() || (ch.is_ascii() && (is_delimiter(ch as u8) || needs_escape(ch as u8)))
        })
}

/// Whether a string used as an array element must be quoted.
///
/// Elements are decoded as full values, so a leading digit would be read
/// back as a number.
pub(crate) fn element_needs_quotes(s: &str) -> bool {
    key_needs_quotes(s) || s.as_bytes()[0].is_ascii_digit()
}
