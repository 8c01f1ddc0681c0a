//! Command Interface Layer
//!
//! The four selection commands as a plain enum, dispatched by [`execute`] against any
//! [`EditorHost`].
//!
//! # Example
//!
//! ```rust
//! use selection_tools::{CommandResult, Region, SelectionCommand, TextBuffer, execute};
//!
//! let mut buffer = TextBuffer::new("let a = b + a;");
//! buffer.set_selections([Region::new(4, 5)]);
//!
//! let command: SelectionCommand = "multi_quick_find_all".parse().unwrap();
//! let result = execute(&mut buffer, command).unwrap();
//!
//! assert_eq!(result, CommandResult::Found { matches: 2, selections: 2 });
//! assert_eq!(buffer.regions(), &[Region::new(4, 5), Region::new(12, 13)]);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::align::align_indentation;
use crate::direction::reverse_selection_direction;
use crate::find_all::find_all_multi;
use crate::host::EditorHost;
use crate::region::Direction;
use crate::shrink::shrink_selection;

/// Selection commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCommand {
    /// Add every occurrence of every selected string to the selection set.
    FindAllMulti,
    /// Re-indent continuation lines of multi-line selections to the selection's start column.
    AlignIndentation,
    /// Flip all selections to a single direction.
    ReverseSelectionDirection,
    /// Shorten every selection by one character at each end.
    ShrinkSelection,
}

impl SelectionCommand {
    /// Every command, in a stable order.
    pub const ALL: [SelectionCommand; 4] = [
        SelectionCommand::FindAllMulti,
        SelectionCommand::AlignIndentation,
        SelectionCommand::ReverseSelectionDirection,
        SelectionCommand::ShrinkSelection,
    ];

    /// Canonical command name, as bound in key maps.
    pub fn name(self) -> &'static str {
        match self {
            SelectionCommand::FindAllMulti => "multi_quick_find_all",
            SelectionCommand::AlignIndentation => "align_indentation",
            SelectionCommand::ReverseSelectionDirection => "reverse_selection_direction",
            SelectionCommand::ShrinkSelection => "shorten_selection",
        }
    }

    /// Returns `true` if the command may change document text.
    pub fn edits_text(self) -> bool {
        matches!(self, SelectionCommand::AlignIndentation)
    }
}

impl fmt::Display for SelectionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that matches no [`SelectionCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for SelectionCommand {
    type Err = UnknownCommand;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "multi_quick_find_all" | "find_all_multi" => Ok(SelectionCommand::FindAllMulti),
            "align_indentation" => Ok(SelectionCommand::AlignIndentation),
            "reverse_selection_direction" => Ok(SelectionCommand::ReverseSelectionDirection),
            "shorten_selection" | "shrink_selection" => Ok(SelectionCommand::ShrinkSelection),
            _ => Err(UnknownCommand(name.to_string())),
        }
    }
}

/// Command execution result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Find-all finished.
    Found {
        /// Matches added (including ones that were already selected).
        matches: usize,
        /// Size of the selection set afterwards.
        selections: usize,
    },
    /// Indentation alignment finished.
    Aligned {
        /// Replacements applied in the batched edit (0 if no edit was issued).
        replacements: usize,
    },
    /// Selection direction reversed.
    Reversed {
        /// Direction every selection now points in.
        direction: Direction,
    },
    /// Selections shrunk.
    Shrunk {
        /// Size of the selection set afterwards.
        selections: usize,
    },
}

/// Run `command` against `host`.
///
/// Host failures are returned unchanged.
pub fn execute<H>(host: &mut H, command: SelectionCommand) -> Result<CommandResult, H::Error>
where
    H: EditorHost + ?Sized,
{
    tracing::debug!(
        command = %command,
        selections = host.selections().len(),
        "executing selection command"
    );

    let result = match command {
        SelectionCommand::FindAllMulti => {
            let matches = find_all_multi(host)?;
            CommandResult::Found {
                matches,
                selections: host.selections().len(),
            }
        }
        SelectionCommand::AlignIndentation => CommandResult::Aligned {
            replacements: align_indentation(host)?,
        },
        SelectionCommand::ReverseSelectionDirection => CommandResult::Reversed {
            direction: reverse_selection_direction(host)?,
        },
        SelectionCommand::ShrinkSelection => CommandResult::Shrunk {
            selections: shrink_selection(host)?,
        },
    };

    tracing::debug!(command = %command, ?result, "selection command finished");
    Ok(result)
}

/// Run `commands` in order, stopping at the first failure.
pub fn execute_batch<H>(
    host: &mut H,
    commands: impl IntoIterator<Item = SelectionCommand>,
) -> Result<Vec<CommandResult>, H::Error>
where
    H: EditorHost + ?Sized,
{
    let mut results = Vec::new();
    for command in commands {
        results.push(execute(host, command)?);
    }
    Ok(results)
}
