use logos::Logos;

use crate::error::{ParseError, ParseResult};

/// Raw source chunks recognized while stripping comments.
///
/// The scanner does not tokenize the language itself; it only separates
/// well-formed block comments from everything else. A lone `(` needs its own
/// token so the plain-text pattern stays disjoint from the comment markers.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Chunk {
    /// A complete block comment, possibly spanning several lines. The first
    /// close marker ends the comment.
    #[regex(r"\(\*[^*]*\*+([^)*][^*]*\*+)*\)")]
    Comment,
    /// A comment open marker with no matching close marker after it.
    #[regex(r"\(\*[^*]*(\*+[^*)][^*]*)*\**")]
    OpenMarker,
    /// A run of ordinary text.
    #[regex(r"[^(]+")]
    Text,
    /// A `(` that does not open a comment.
    #[token("(")]
    Paren,
}

/// Removes every `(* ... *)` block comment from the source text.
///
/// Comments may span multiple lines and are not nestable; the first close
/// marker after an open marker ends the comment. The newlines inside a
/// removed comment are kept in the output so that line numbers reported by
/// later stages still refer to the original source.
///
/// # Parameters
/// - `source`: Raw trn source text.
///
/// # Returns
/// The source text with all block comments removed.
///
/// # Errors
/// Returns `ParseError::MalformedComment` if an open marker has no matching
/// close marker before the end of input.
///
/// # Example
/// ```
/// use trn::loader::scanner::strip_comments;
///
/// let cleaned = strip_comments("set a = (* the answer *) 42;").unwrap();
/// assert_eq!(cleaned, "set a =  42;");
///
/// assert!(strip_comments("(* never closed").is_err());
/// ```
pub fn strip_comments(source: &str) -> ParseResult<String> {
    let mut cleaned = String::with_capacity(source.len());
    let mut line = 1;
    let mut lexer = Chunk::lexer(source);

    while let Some(chunk) = lexer.next() {
        let slice = lexer.slice();
        let newlines = slice.matches('\n').count();

        match chunk {
            Ok(Chunk::Comment) => {
                for _ in 0..newlines {
                    cleaned.push('\n');
                }
            },
            Ok(Chunk::OpenMarker) => return Err(ParseError::MalformedComment { line }),
            Ok(Chunk::Text | Chunk::Paren) | Err(()) => cleaned.push_str(slice),
        }

        line += newlines;
    }

    Ok(cleaned)
}
