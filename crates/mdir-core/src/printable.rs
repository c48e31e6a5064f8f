//! # PrintableString Character Class
//!
//! Membership predicates for the restricted PrintableString alphabet
//! (X.520, RFC 2252): letters, digits, and a small fixed set of
//! punctuation plus space. Syntax-validation collaborators consult these
//! when an attribute's declared syntax is PrintableString
//! (1.3.6.1.4.1.1466.115.121.1.44).
//!
//! Everything outside the set, including the other ASCII punctuation
//! and every non-ASCII code point, is non-printable.

/// Returns true if `c` belongs to the PrintableString alphabet:
/// `A`–`Z`, `a`–`z`, `0`–`9`, `'`, `(`, `)`, `+`, `,`, `-`, `.`, `=`,
/// `/`, `:`, `?`, and space.
pub fn is_printable_char(c: char) -> bool {
    matches!(c,
        'a'..='z'
        | 'A'..='Z'
        | '0'..='9'
        | '\'' | '(' | ')' | '+' | ',' | '-' | '.' | '=' | '/' | ':' | '?' | ' ')
}

/// Returns true if every character of `s` is printable.
///
/// An absent value is not a printable string (`false`); an empty string
/// is (no character violates the predicate). The scan short-circuits on
/// the first disqualifying character. Never fails.
pub fn is_printable_string(s: Option<&str>) -> bool {
    match s {
        None => false,
        Some(s) => s.chars().all(is_printable_char),
    }
}
