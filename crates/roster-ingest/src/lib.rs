#![deny(unsafe_code)]

pub mod artifacts;
pub mod delimited;
pub mod pdf_text;

pub use artifacts::{filter_artifacts, is_meeting_artifact};
pub use delimited::{flatten_delimited, flatten_delimited_reader};
pub use pdf_text::extract_names_from_text;
