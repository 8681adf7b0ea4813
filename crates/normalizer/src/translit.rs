use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::token::WILDCARD;

/// Transliteration and final fold (pipeline stages 5 and 6).
///
/// Applies the configured fold table, then NFKD decomposition with
/// combining-mark stripping, which reduces accented Latin letters (the full
/// Romanian alphabet included) to their ASCII base letters. Everything that
/// is not a letter or digit is dropped, except the literal [`WILDCARD`]
/// marker, and the remainder is uppercased.
pub(crate) fn fold_token(name: &str, fold_table: &HashMap<char, String>) -> String {
    let mut replaced = String::with_capacity(name.len());
    for ch in name.chars() {
        match fold_table.get(&ch) {
            Some(repl) => replaced.push_str(repl),
            None => replaced.push(ch),
        }
    }

    let mut token = String::with_capacity(replaced.len());
    for ch in replaced.nfkd() {
        if ch == WILDCARD {
            token.push(WILDCARD);
        } else if !is_combining_mark(ch) && ch.is_alphanumeric() {
            token.extend(ch.to_uppercase());
        }
    }
    token
}
