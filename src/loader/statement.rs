use indexmap::IndexMap;

use crate::{
    error::{ParseError, ParseResult},
    loader::{
        LoaderConfig,
        split::split_table_items,
        value_parser::{identifier_len, parse_value},
    },
    value::{Environment, Value},
};

/// Builds the environment from comment-stripped source text.
///
/// The text is consumed line by line. Blank lines are skipped; every other
/// line must open a `set <name> = <value>;` statement. A table literal whose
/// `[` does not close on the same line pulls in subsequent lines until one
/// ends with `]`, forming a single logical statement. Each parsed binding is
/// inserted in declaration order; rebinding a name overwrites the previous
/// value, last write wins.
///
/// # Parameters
/// - `text`: Source text with comments already removed.
/// - `config`: Loader configuration carrying the nesting limit.
///
/// # Returns
/// The complete environment, handed to the caller only when every statement
/// parsed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a line does not match the assignment grammar,
/// - a multi-line table never closes,
/// - any value, table entry, or expression fails to parse.
pub fn build_environment(text: &str, config: &LoaderConfig) -> ParseResult<Environment> {
    let mut env = Environment::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (name, rest) = split_assignment(line, line_no)?;

        let value = if let Some(opened) = rest.strip_prefix('[') {
            let content = collect_table(opened, &mut lines, line_no)?;
            Value::Table(parse_table_entries(&content, &env, config, line_no)?)
        } else {
            let value_text = rest.strip_suffix(';')
                                 .ok_or_else(|| syntax_error(line, line_no))?;
            parse_value(value_text, &env, 0, config, line_no)?
        };

        env.insert(name.to_string(), value);
    }

    Ok(env)
}

/// Splits an assignment line into its variable name and value text.
///
/// The line must read `set`, whitespace, an identifier, `=`, and the value
/// text. The trailing `;` is left on the value text; the caller strips it,
/// since table literals may instead continue on later lines.
///
/// # Errors
/// Returns `ParseError::SyntaxError` carrying the offending line when the
/// shape does not match, including an invalid identifier such as `1x`.
fn split_assignment(line: &str, line_no: usize) -> ParseResult<(&str, &str)> {
    let rest = line.strip_prefix("set")
                   .ok_or_else(|| syntax_error(line, line_no))?;
    let after_keyword = rest.trim_start();
    if after_keyword.len() == rest.len() {
        // `set` must be a word of its own, not a prefix like `setnum`.
        return Err(syntax_error(line, line_no));
    }

    let name_len = identifier_len(after_keyword);
    if name_len == 0 {
        return Err(syntax_error(line, line_no));
    }
    let (name, rest) = after_keyword.split_at(name_len);

    let rest = rest.trim_start()
                   .strip_prefix('=')
                   .ok_or_else(|| syntax_error(line, line_no))?;

    Ok((name, rest.trim()))
}

/// Assembles the interior of a table literal into a single flat string.
///
/// `opened` is the text following the opening `[`. If the table closes on
/// the same line, its interior is returned directly. Otherwise subsequent
/// lines are accumulated, trimmed, until one ends with `]` (a trailing `;`
/// on the closing line is accepted), and the pieces are joined with single
/// spaces.
///
/// # Errors
/// Returns `ParseError::UnterminatedTable` carrying the opening line when
/// the input ends before the closing `]`.
fn collect_table<'a>(opened: &str,
                     lines: &mut impl Iterator<Item = (usize, &'a str)>,
                     open_line: usize)
                     -> ParseResult<String> {
    let first = strip_terminator(opened.trim());
    if let Some(interior) = first.strip_suffix(']') {
        return Ok(interior.trim().to_string());
    }

    let mut parts = Vec::new();
    if !first.is_empty() {
        parts.push(first.to_string());
    }

    for (_, raw) in lines.by_ref() {
        let piece = strip_terminator(raw.trim());
        if let Some(last) = piece.strip_suffix(']') {
            let last = last.trim();
            if !last.is_empty() {
                parts.push(last.to_string());
            }
            return Ok(parts.join(" "));
        }
        if !piece.is_empty() {
            parts.push(piece.to_string());
        }
    }

    Err(ParseError::UnterminatedTable { line: open_line })
}

/// Parses the flat table interior into an ordered key/value mapping.
///
/// Items are split on `,` at depth zero; empty items are skipped. Every
/// remaining item must read `<identifier> => <value>`, and each value text
/// is parsed with the same environment, so a table value may reference
/// previous bindings, hold an array, or be an expression.
///
/// # Errors
/// Returns `ParseError::InvalidTableEntry` for an item outside the
/// `key => value` grammar, or whatever error its value text produces.
fn parse_table_entries(content: &str,
                       env: &Environment,
                       config: &LoaderConfig,
                       line: usize)
                       -> ParseResult<IndexMap<String, Value>> {
    let mut table = IndexMap::new();

    for item in split_table_items(content) {
        if item.is_empty() {
            continue;
        }

        let (key, value_text) =
            split_entry(&item).ok_or_else(|| ParseError::InvalidTableEntry { text: item.clone(),
                                                                             line })?;
        let value = parse_value(value_text, env, 1, config, line)?;
        table.insert(key.to_string(), value);
    }

    Ok(table)
}

/// Splits one table item into its key and value text, or returns `None`
/// when the item does not match `<identifier> => <value>`.
fn split_entry(item: &str) -> Option<(&str, &str)> {
    let key_len = identifier_len(item);
    if key_len == 0 {
        return None;
    }
    let (key, rest) = item.split_at(key_len);

    let value_text = rest.trim_start().strip_prefix("=>")?;
    Some((key, value_text.trim()))
}

/// Removes a trailing `;` and any whitespace before it.
fn strip_terminator(text: &str) -> &str {
    text.strip_suffix(';').unwrap_or(text).trim_end()
}

fn syntax_error(line: &str, line_no: usize) -> ParseError {
    ParseError::SyntaxError { text: line.to_string(),
                              line: line_no, }
}
