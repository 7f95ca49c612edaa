//! Data model for parsed examples — format-agnostic.

use serde::Serialize;
use std::path::PathBuf;

/// One documentation/code pairing, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Comment text, prefix stripped, space-joined
    pub docs: String,
    /// Code lines verbatim, outer blank lines trimmed
    pub code: String,
    /// A blank line followed the code before the next segment began
    pub add_blank_after: bool,
}

impl Segment {
    /// True when neither side has anything to show.
    pub fn is_blank(&self) -> bool {
        self.docs.trim().is_empty() && self.code.trim().is_empty()
    }
}

/// Parse result for a single source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedFile {
    /// Leading comment block before any code
    pub header: String,
    pub segments: Vec<Segment>,
}

/// A loaded example directory.
#[derive(Debug, Serialize)]
pub struct Example {
    pub name: String,
    /// Element id used on the rendered page
    pub id: String,
    pub source_file: PathBuf,
    pub source: ParsedFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ParsedFile>,
}

/// Entry in the index and in prev/next navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}
