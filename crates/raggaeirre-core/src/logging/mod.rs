//! Structured logging.
//!
//! Console output goes through `tracing-subscriber`'s fmt layer on stderr.
//! Optionally every event is also appended to a JSONL journal:
//!
//! ```text
//! logs/
//! └── raw/
//!     ├── 2026-10-19_desktop.jsonl
//!     └── 2026-10-19_cli.jsonl
//! ```
//!
//! ```bash
//! # every failed submission
//! jq 'select(.msg | test("failed"))' logs/raw/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JournalEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::{read_journal, JournalWriter};
