//! Tokenizer for the dot/bracket path grammar.
//!
//! ```text
//! path     := segment ( '.' segment )*
//! segment  := ident? ( '[' key ']' )*
//! ```
//!
//! The tokenizer never fails. Empty segments are dropped, a stray `]` is
//! ignored, and an unclosed `[` takes the rest of the input as one key.
//! Whatever comes out is checked later by the walk.

/// Splits a path string into its keys.
///
/// # Examples
///
/// ```
/// use exist::path::parse::tokenize;
///
/// assert_eq!(tokenize("employees[0].name"), vec!["employees", "0", "name"]);
/// assert_eq!(tokenize("[0].name"), vec!["0", "name"]);
/// assert_eq!(tokenize("matrix[1][2]"), vec!["matrix", "1", "2"]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => flush(&mut keys, &mut current),
            '[' => {
                flush(&mut keys, &mut current);
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    current.push(inner);
                }
                flush(&mut keys, &mut current);
            }
            ']' => {}
            _ => current.push(c),
        }
    }
    flush(&mut keys, &mut current);

    keys
}

fn flush(keys: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        keys.push(std::mem::take(current));
    }
}
