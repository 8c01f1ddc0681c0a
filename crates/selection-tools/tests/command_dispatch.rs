use selection_tools::{
    CommandResult, Direction, EditorHost, Region, ReplacementBatch, SelectionCommand, Span,
    TextBuffer, UnknownCommand, execute, execute_batch,
};
use thiserror::Error;

#[test]
fn test_parse_command_names() {
    let cases = [
        ("multi_quick_find_all", SelectionCommand::FindAllMulti),
        ("align_indentation", SelectionCommand::AlignIndentation),
        (
            "reverse_selection_direction",
            SelectionCommand::ReverseSelectionDirection,
        ),
        ("shorten_selection", SelectionCommand::ShrinkSelection),
    ];
    for (name, command) in cases {
        assert_eq!(name.parse::<SelectionCommand>(), Ok(command));
    }

    assert_eq!(
        "Align_Indentation".parse::<SelectionCommand>(),
        Err(UnknownCommand("Align_Indentation".to_string()))
    );
}

#[test]
fn test_execute_batch_runs_in_order() {
    let mut buffer = TextBuffer::new("f(\"x\", \"y\")");
    buffer.set_selections([Region::new(2, 5)]);

    let results = execute_batch(
        &mut buffer,
        [
            SelectionCommand::ShrinkSelection,
            SelectionCommand::ReverseSelectionDirection,
        ],
    )
    .unwrap();

    assert_eq!(
        results,
        vec![
            CommandResult::Shrunk { selections: 1 },
            CommandResult::Reversed {
                direction: Direction::Backward
            },
        ]
    );
    assert_eq!(buffer.regions(), &[Region::new(4, 3)]);
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("host is read-only")]
struct ReadOnly;

/// Host whose document can be read but never edited.
struct ReadOnlyHost {
    buffer: TextBuffer,
}

impl EditorHost for ReadOnlyHost {
    type Error = ReadOnly;

    fn substr(&self, span: Span) -> Result<String, ReadOnly> {
        self.buffer.substr(span).map_err(|_| ReadOnly)
    }

    fn line_span(&self, offset: usize) -> Result<Span, ReadOnly> {
        self.buffer.line_span(offset).map_err(|_| ReadOnly)
    }

    fn lines(&self, span: Span) -> Result<Vec<Span>, ReadOnly> {
        self.buffer.lines(span).map_err(|_| ReadOnly)
    }

    fn find_all_literal(&self, needle: &str) -> Result<Vec<Span>, ReadOnly> {
        self.buffer.find_all_literal(needle).map_err(|_| ReadOnly)
    }

    fn tab_size(&self) -> Option<usize> {
        Some(2)
    }

    fn selections(&self) -> Vec<Region> {
        self.buffer.selections()
    }

    fn replace_selections(&mut self, regions: Vec<Region>) -> Result<(), ReadOnly> {
        self.buffer.set_selections(regions);
        Ok(())
    }

    fn add_selection(&mut self, region: Region) -> Result<(), ReadOnly> {
        self.buffer.add_selection(region).map_err(|_| ReadOnly)
    }

    fn apply_batched_edit(&mut self, _batch: ReplacementBatch) -> Result<(), ReadOnly> {
        Err(ReadOnly)
    }
}

#[test]
fn test_host_errors_are_returned_unchanged() {
    let mut buffer = TextBuffer::new("g(\nx)");
    buffer.set_selections([Region::new(2, 5)]);
    let mut host = ReadOnlyHost { buffer };

    assert_eq!(
        execute(&mut host, SelectionCommand::AlignIndentation),
        Err(ReadOnly)
    );
    assert_eq!(host.buffer.text(), "g(\nx)");

    // Selection-only commands never reach the edit primitive.
    assert_eq!(
        execute(&mut host, SelectionCommand::ShrinkSelection),
        Ok(CommandResult::Shrunk { selections: 1 })
    );
}

#[test]
fn test_execute_through_trait_object() {
    let mut buffer = TextBuffer::new("ab ab");
    buffer.set_selections([Region::new(0, 2)]);

    let host: &mut dyn EditorHost<Error = selection_tools::BufferError> = &mut buffer;
    let result = execute(host, SelectionCommand::FindAllMulti).unwrap();

    assert_eq!(
        result,
        CommandResult::Found {
            matches: 2,
            selections: 2
        }
    );
}
