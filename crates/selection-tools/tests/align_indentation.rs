use pretty_assertions::assert_eq;
use selection_tools::{
    CommandResult, EditorHost, Region, SelectionCommand, Span, TextBuffer, align_indentation,
    execute,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("selection_tools=trace"))
        .with_test_writer()
        .try_init();
}

fn align(text: &str, regions: &[Region], tab_size: Option<usize>) -> TextBuffer {
    init_tracing();
    let mut buffer = TextBuffer::new(text);
    buffer.set_tab_size(tab_size);
    buffer.set_selections(regions.iter().copied());
    align_indentation(&mut buffer).unwrap();
    buffer
}

#[test]
fn test_call_arguments_align_after_bracket() {
    let text = "call(\n    a,\n  b,\n      c)";
    let buffer = align(text, &[Region::new(5, 26)], None);

    assert_eq!(buffer.text(), "call(\n     a,\n     b,\n     c)");
}

#[test]
fn test_selection_starting_at_bracket_aligns_to_bracket() {
    let text = "call(\n    a,\n  b)";
    let buffer = align(text, &[Region::new(4, 17)], None);

    assert_eq!(buffer.text(), "call(\n    a,\n    b)");
}

#[test]
fn test_tab_before_start_column_expands_to_spaces() {
    // The tab reaches column 4, then "foo(" adds four more.
    let buffer = align("\tfoo(\n\tx", &[Region::new(5, 8)], Some(4));
    assert_eq!(buffer.text(), "\tfoo(\n        x");
    assert!(!buffer.line_text(1).unwrap().contains('\t'));
}

#[test]
fn test_tab_after_text_stops_at_next_tab_stop() {
    // "ab" ends at column 2, the tab jumps to 4, "c" makes 5.
    let buffer = align("ab\tc(\nx", &[Region::new(4, 7)], Some(4));
    assert_eq!(buffer.text(), "ab\tc(\n     x");
}

#[test]
fn test_missing_or_zero_tab_size_falls_back_to_four() {
    let expected = "\t(\n     x";
    assert_eq!(align("\t(\nx", &[Region::new(2, 4)], None).text(), expected);
    assert_eq!(align("\t(\nx", &[Region::new(2, 4)], Some(0)).text(), expected);

    assert_eq!(
        align("\t(\nx", &[Region::new(2, 4)], Some(8)).text(),
        "\t(\n         x"
    );
}

#[test]
fn test_first_line_is_never_touched() {
    let text = "  if (a &&\n b)";
    let buffer = align(text, &[Region::new(6, 14)], None);

    assert_eq!(buffer.line_text(0).unwrap(), "  if (a &&");
    assert_eq!(buffer.line_text(1).unwrap(), "      b)");
}

#[test]
fn test_backward_selection_uses_its_start() {
    let text = "call(\n    a,\n  b)";
    let forward = align(text, &[Region::new(5, 17)], None);
    let backward = align(text, &[Region::new(17, 5)], None);

    assert_eq!(forward.text(), backward.text());
}

#[test]
fn test_single_line_selections_and_carets_do_nothing() {
    let text = "foo(\n  bar)";
    let mut buffer = TextBuffer::new(text);
    buffer.set_selections([Region::new(0, 3), Region::caret(8)]);

    let result = execute(&mut buffer, SelectionCommand::AlignIndentation).unwrap();

    assert_eq!(result, CommandResult::Aligned { replacements: 0 });
    assert_eq!(buffer.text(), text);
    assert!(!buffer.can_undo());
    assert!(buffer.last_text_delta().is_none());
}

#[test]
fn test_multiple_selections_align_independently() {
    let text = "f(\na)\ngg(\nb)";
    // First selection starts after "f(", second after "gg(".
    let buffer = align(text, &[Region::new(2, 5), Region::new(9, 12)], None);

    assert_eq!(buffer.text(), "f(\n  a)\ngg(\n   b)");
}

#[test]
fn test_alignment_is_idempotent() {
    let text = "call(\n  a,\n        b)";
    let mut buffer = TextBuffer::new(text);
    buffer.set_selections([Region::new(5, text.chars().count())]);

    align_indentation(&mut buffer).unwrap();
    let once = buffer.text();
    let regions = buffer.regions().to_vec();

    align_indentation(&mut buffer).unwrap();
    assert_eq!(buffer.text(), once);
    assert_eq!(buffer.regions(), regions.as_slice());
}

#[test]
fn test_crlf_terminators_are_preserved() {
    let text = "call(\r\n  a,\r\n b)";
    let buffer = align(text, &[Region::new(5, 16)], None);

    assert_eq!(buffer.text(), "call(\r\n     a,\r\n     b)");
}

#[test]
fn test_non_ascii_counts_one_column_per_character() {
    let text = "déjà(\nx)";
    let buffer = align(text, &[Region::new(5, 8)], None);

    assert_eq!(buffer.text(), "déjà(\n     x)");
}

#[test]
fn test_realignment_is_one_undo_step() {
    let text = "call(\n    a,\n  b,\n      c)";
    let mut buffer = TextBuffer::new(text);
    buffer.set_selections([Region::new(5, 26)]);

    let result = execute(&mut buffer, SelectionCommand::AlignIndentation).unwrap();
    assert_eq!(result, CommandResult::Aligned { replacements: 3 });
    assert_eq!(buffer.undo_depth(), 1);

    let delta = buffer.last_text_delta().unwrap();
    assert_eq!(delta.edits.len(), 3);
    let starts: Vec<usize> = delta.edits.iter().map(|e| e.span.start).collect();
    assert_eq!(starts, vec![18, 13, 6]);

    buffer.undo().unwrap();
    assert_eq!(buffer.text(), text);
    assert_eq!(buffer.regions(), &[Region::new(5, 26)]);
    assert!(!buffer.can_undo());
}

#[test]
fn test_selection_grows_with_inserted_indentation() {
    let mut buffer = TextBuffer::new("ab(\nc\nd)");
    buffer.set_selections([Region::new(3, 8)]);

    align_indentation(&mut buffer).unwrap();

    assert_eq!(buffer.text(), "ab(\n   c\n   d)");
    assert_eq!(buffer.regions(), &[Region::new(3, 14)]);
    assert_eq!(buffer.substr(Span::new(3, 14)).unwrap(), "\n   c\n   d)");
}
