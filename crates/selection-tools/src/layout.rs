//! Column measurement for indentation.
//!
//! Every character counts as one column except `'\t'`, which advances to the next tab stop.
//! Widths are in columns of a monospace grid; they are not UAX #11 cell widths.

/// Width (in columns) of `ch` when it starts at `column`.
///
/// For `'\t'` this is the distance to the next multiple of `tab_size`.
pub fn column_width_at(ch: char, column: usize, tab_size: usize) -> usize {
    if ch == '\t' {
        let tab_size = tab_size.max(1);
        tab_size - column % tab_size
    } else {
        1
    }
}

/// Visual column reached after the first `char_column` characters of `line`.
///
/// Stops early if `line` is shorter than `char_column`.
pub fn visual_column(line: &str, char_column: usize, tab_size: usize) -> usize {
    let mut x = 0usize;
    for ch in line.chars().take(char_column) {
        x = x.saturating_add(column_width_at(ch, x, tab_size));
    }
    x
}

/// Number of leading whitespace characters in `line`.
///
/// Whitespace follows [`char::is_whitespace`], so it is not limited to spaces and tabs. The
/// caller passes a single line without its terminator; the count never exceeds the line.
pub fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// A run of `width` spaces.
pub fn space_run(width: usize) -> String {
    " ".repeat(width)
}
