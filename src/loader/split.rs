/// Splits an item list on a separator, respecting nested delimiters.
///
/// The separator only splits at delimiter depth zero. Depth is a single
/// signed counter incremented on any of `{ ( [` and decremented on any of
/// `} ) ]`, so a separator inside a nested array, table, or expression is
/// literal text. Each emitted item is trimmed; a trailing empty segment is
/// dropped, while empty segments in the middle of the list are kept for the
/// downstream parser to reject.
///
/// Malformed nesting is not detected here. An item with unbalanced
/// delimiters fails later, when the value parser cannot classify it.
///
/// # Parameters
/// - `content`: The flat item list, without its surrounding delimiters.
/// - `separator`: The separator character, `,` for tables and `.` for
///   arrays.
///
/// # Returns
/// The ordered sequence of trimmed items.
pub fn split_items(content: &str, separator: char) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0_i64;

    for c in content.chars() {
        match c {
            '{' | '(' | '[' => depth += 1,
            '}' | ')' | ']' => depth -= 1,
            _ => {},
        }

        if c == separator && depth == 0 {
            items.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }

    let last = current.trim();
    if !last.is_empty() {
        items.push(last.to_string());
    }

    items
}

/// Splits table content into `key => value` items on `,` at depth zero.
///
/// # Example
/// ```
/// use trn::loader::split::split_table_items;
///
/// let items = split_table_items("key1 => 10, key2 => \"value\"");
/// assert_eq!(items, ["key1 => 10", "key2 => \"value\""]);
/// ```
#[must_use]
pub fn split_table_items(content: &str) -> Vec<String> {
    split_items(content, ',')
}

/// Splits array content into items on `.` at depth zero.
///
/// # Example
/// ```
/// use trn::loader::split::split_array_items;
///
/// let items = split_array_items("1. 2. { 3. 4. }");
/// assert_eq!(items, ["1", "2", "{ 3. 4. }"]);
/// ```
#[must_use]
pub fn split_array_items(content: &str) -> Vec<String> {
    split_items(content, '.')
}
