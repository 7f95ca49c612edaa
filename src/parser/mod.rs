//! Parser module — dispatch by file extension.

pub mod lang;
pub mod segments;

use crate::model::ParsedFile;
use anyhow::{anyhow, Result};
use std::path::Path;

pub use segments::parse;

/// Parse a source file using the comment prefix of the language its
/// extension belongs to.
pub fn parse_file(path: &Path, content: &str) -> Result<ParsedFile> {
    let language = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(lang::by_extension)
        .ok_or_else(|| anyhow!("unsupported file type: {}", path.display()))?;
    Ok(parse(content, language.comment_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_uses_language_prefix() {
        let parsed = parse_file(Path::new("Hello/Hello.sh"), "# run\n$ x\n").unwrap();
        assert_eq!(parsed.header, "run");
        assert_eq!(parsed.segments[0].code, "$ x");

        let parsed = parse_file(Path::new("Hello/Hello.cs"), "# region\n").unwrap();
        assert_eq!(parsed.header, "");
        assert_eq!(parsed.segments[0].code, "# region");
    }

    #[test]
    fn unsupported_extension_fails() {
        let err = parse_file(Path::new("notes.txt"), "").unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));
    }
}
