//! The ignored-token skipper.
//!
//! GraphQL treats a byte-order mark, whitespace, line terminators,
//! `#`-to-end-of-line comments, and commas as
//! [ignored tokens](https://spec.graphql.org/October2021/#sec-Language.Source-Text.Ignored-Tokens):
//! they carry no grammatical meaning and may appear between any two
//! lexical tokens.

use crate::SourceCursor;

/// Consumes zero or more ignored tokens from the cursor.
///
/// Stops exactly at the first character that is not ignorable. Running it
/// a second time in a row is a no-op; absence of trivia is success, so
/// there is no error case.
pub(crate) fn skip_ignored(cursor: &mut SourceCursor<'_>) {
    loop {
        match cursor.peek() {
            Some(' ' | '\t' | '\n' | '\r' | '\u{FEFF}' | ',') => {
                cursor.bump();
            }
            Some('#') => {
                cursor.bump();
                skip_comment_body(cursor);
            }
            _ => break,
        }
    }
}

/// Consumes a comment body through (and including) its line terminator.
///
/// The comment runs to the next `\n` or `\r`; at EOF the comment simply
/// ends with the input.
fn skip_comment_body(cursor: &mut SourceCursor<'_>) {
    let rest = cursor.rest();
    match memchr::memchr2(b'\n', b'\r', rest.as_bytes()) {
        Some(idx) => {
            cursor.advance_bytes(idx);
            // The terminator itself is whitespace; eat it here so a
            // comment at end-of-line is fully consumed in one step.
            cursor.bump();
            if cursor.peek() == Some('\n') && rest.as_bytes()[idx] == b'\r' {
                cursor.bump();
            }
        }
        None => {
            cursor.advance_bytes(rest.len());
        }
    }
}
