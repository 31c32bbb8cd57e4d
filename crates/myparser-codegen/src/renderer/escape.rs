// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Escaping of literal text embedded in generated C++.
//!
//! Keyword text, rule names, error messages and regex patterns all end up
//! inside a narrow string literal wrapped by the runtime's `MP_STR` macro.
//! The escape works on UTF-8 bytes and only ever emits printable ASCII, so
//! the result is valid whatever the source encoding of the generated file.

/// Name of the runtime macro turning a string literal into a type.
pub const STR_MACRO: &str = "MP_STR";

/// Escape `text` for use between the quotes of a C++ string literal.
///
/// Bytes without a simple escape are written as three-digit octal escapes.
/// Octal escapes stop after three digits, unlike hex escapes, so a digit
/// following the escape is never absorbed into it.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            // `??x` could form a trigraph
            b'?' => out.push_str("\\?"),
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            0x0B => out.push_str("\\v"),
            0x0C => out.push_str("\\f"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
    out
}

/// Wrap `text` in the runtime string construct: `MP_STR("...")`.
pub fn str_literal(text: &str) -> String {
    format!("{STR_MACRO}(\"{}\")", escape_literal(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(escape_literal("Expr"), "Expr");
        assert_eq!(escape_literal("[a-z_]+"), "[a-z_]+");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn test_quote_and_backslash() {
        assert_eq!(escape_literal(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_literal(r"\d+"), r"\\d+");
        assert_eq!(escape_literal("'"), "'");
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(escape_literal("a\nb\tc\r"), "a\\nb\\tc\\r");
        assert_eq!(escape_literal("\u{7}\u{8}\u{b}\u{c}"), "\\a\\b\\v\\f");
        assert_eq!(escape_literal("\0"), "\\000");
        assert_eq!(escape_literal("\u{1b}"), "\\033");
        assert_eq!(escape_literal("\u{7f}"), "\\177");
    }

    #[test]
    fn test_octal_escape_does_not_swallow_digits() {
        assert_eq!(escape_literal("\u{1}7"), "\\0017");
    }

    #[test]
    fn test_trigraph_is_broken() {
        assert_eq!(escape_literal("??="), "\\?\\?=");
    }

    #[test]
    fn test_non_ascii_is_escaped_bytewise() {
        // U+00E9 is C3 A9 in UTF-8
        assert_eq!(escape_literal("é"), "\\303\\251");
        assert!(escape_literal("λ→∀").is_ascii());
    }

    #[test]
    fn test_str_literal() {
        assert_eq!(str_literal("+"), "MP_STR(\"+\")");
        assert_eq!(str_literal("\""), "MP_STR(\"\\\"\")");
    }
}
