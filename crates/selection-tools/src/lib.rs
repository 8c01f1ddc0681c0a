#![warn(missing_docs)]
//! Selection Tools - Headless Multi-Selection Editing Commands
//!
//! # Overview
//!
//! `selection-tools` implements a small set of editor commands that act on a multi-selection:
//! selecting every occurrence of several strings at once, aligning continuation lines to the
//! column where a selection starts, flipping the direction of every selection, and shrinking
//! selections by one character at each end.
//!
//! The commands never own a document. They talk to the editor through the [`EditorHost`]
//! trait, and [`TextBuffer`] is a ready-made in-memory host (rope-backed, with undo/redo and
//! text deltas) for tests, tools and embedders without an editor of their own.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (SelectionCommand)       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Operations (find all / align / reverse /   │
//! │  shrink)                                    │  ← Pure selection logic
//! ├─────────────────────────────────────────────┤
//! │  EditorHost trait                           │  ← Host boundary
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer (LineIndex + undo history)      │  ← Reference host
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use selection_tools::{Direction, Region, SelectionCommand, TextBuffer, execute};
//!
//! let mut buffer = TextBuffer::new("foo(bar)");
//! buffer.set_selections([Region::new(3, 8)]);
//!
//! // Drop the brackets from the selection.
//! execute(&mut buffer, SelectionCommand::ShrinkSelection).unwrap();
//! assert_eq!(buffer.regions(), &[Region::new(4, 7)]);
//!
//! // Put the caret at the start.
//! execute(&mut buffer, SelectionCommand::ReverseSelectionDirection).unwrap();
//! assert_eq!(buffer.regions()[0].direction(), Direction::Backward);
//! ```
//!
//! # Module Description
//!
//! - [`region`] - Spans, directed regions and selection normalization
//! - [`host`] - The [`EditorHost`] boundary and replacement batches
//! - [`align`], [`find_all`], [`direction`], [`shrink`] - The four operations
//! - [`commands`] - Named commands and dispatch
//! - [`buffer`] - In-memory [`TextBuffer`] host
//! - [`line_index`] - Rope based line index
//! - [`layout`] - Visual column math with tab stops
//! - [`search`] - Literal search over a document
//!
//! # Coordinates
//!
//! All offsets are character offsets (Unicode scalar values), not bytes. Visual columns count
//! one per character, except that a tab advances to the next tab stop.

pub mod align;
pub mod buffer;
pub mod commands;
pub mod delta;
pub mod direction;
pub mod find_all;
pub mod host;
pub mod layout;
pub mod line_index;
pub mod region;
pub mod search;
pub mod settings;
pub mod shrink;

pub use align::{align_indentation, plan_alignment};
pub use buffer::{BufferError, DEFAULT_MAX_UNDO, TextBuffer};
pub use commands::{CommandResult, SelectionCommand, UnknownCommand, execute, execute_batch};
pub use delta::{TextDelta, TextDeltaEdit};
pub use direction::{reverse_regions, reverse_selection_direction};
pub use find_all::find_all_multi;
pub use host::{EditorHost, Replacement, ReplacementBatch};
pub use line_index::LineIndex;
pub use region::{Direction, Region, Span, insert_region, normalize_regions};
pub use search::SearchError;
pub use settings::{DEFAULT_TAB_SIZE, IndentSettings};
pub use shrink::{shrink_region, shrink_selection};
