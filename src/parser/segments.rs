//! Segment parser — line-by-line state machine.
//!
//! Splits an annotated source file into a leading header and an ordered list
//! of (docs, code) segments. A line is documentation when, once trimmed, it
//! starts with the comment prefix; every other line is code.
//!
//! | state          | comment                      | blank                 | code             |
//! |----------------|------------------------------|-----------------------|------------------|
//! | `Header`       | append to header             | skip                  | -> `Code`        |
//! | `Docs`/`Code`  | close segment, -> `Docs`     | keep, mark if in code | append, -> `Code`|

use crate::model::{ParsedFile, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Leading comment block, left at the first code line and never re-entered
    Header,
    AccumulatingDocs,
    AccumulatingCode,
}

enum LineKind<'a> {
    /// Comment text with the prefix stripped and trimmed
    Comment(&'a str),
    Blank,
    Code,
}

struct ParserState<'a> {
    prefix: &'a str,
    state: State,
    header: Vec<&'a str>,
    current_docs: Vec<&'a str>,
    current_code: Vec<&'a str>,
    pending_blank_line: bool,
    segments: Vec<Segment>,
}

// -- Public API ---------------------------------------------------------------

/// Parse `content` into a header and segments, treating lines that start with
/// `comment_prefix` as documentation.
pub fn parse(content: &str, comment_prefix: &str) -> ParsedFile {
    let mut state = ParserState {
        prefix: comment_prefix,
        state: State::Header,
        header: Vec::new(),
        current_docs: Vec::new(),
        current_code: Vec::new(),
        pending_blank_line: false,
        segments: Vec::new(),
    };

    for line in content.split('\n') {
        state.process_line(line);
    }

    state.finish()
}

// -- Line processing ----------------------------------------------------------

impl<'a> ParserState<'a> {
    fn classify(&self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim();
        if let Some(text) = trimmed.strip_prefix(self.prefix) {
            LineKind::Comment(text.trim())
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Code
        }
    }

    fn process_line(&mut self, line: &'a str) {
        self.state = match (self.state, self.classify(line)) {
            (State::Header, LineKind::Comment(text)) => {
                self.header.push(text);
                State::Header
            }
            (State::Header, LineKind::Blank) => State::Header,
            (_, LineKind::Comment(text)) => {
                self.close_segment();
                self.current_docs.push(text);
                State::AccumulatingDocs
            }
            (_, LineKind::Blank) if !self.current_code.is_empty() => {
                self.pending_blank_line = true;
                self.current_code.push(line);
                State::AccumulatingCode
            }
            // Code, or a blank line before any code of this segment.
            (_, LineKind::Blank | LineKind::Code) => {
                self.current_code.push(line);
                State::AccumulatingCode
            }
        };
    }

    /// Emit the pending segment at a documentation boundary.
    ///
    /// When the buffered code is only blank lines nothing is emitted: the
    /// blanks are dropped along with their spacing mark and the docs carry
    /// over into the next segment.
    fn close_segment(&mut self) {
        if self.current_code.is_empty() {
            return;
        }
        let code = trim_blank_lines(&self.current_code);
        if code.is_empty() {
            self.current_code.clear();
            self.pending_blank_line = false;
            return;
        }
        self.segments.push(Segment {
            docs: self.current_docs.join(" "),
            code,
            add_blank_after: self.pending_blank_line,
        });
        self.current_docs.clear();
        self.current_code.clear();
        self.pending_blank_line = false;
    }

    fn finish(mut self) -> ParsedFile {
        if !self.current_code.is_empty() || !self.current_docs.is_empty() {
            self.segments.push(Segment {
                docs: self.current_docs.join(" "),
                code: trim_blank_lines(&self.current_code),
                add_blank_after: false,
            });
        }

        ParsedFile {
            header: self.header.join(" ").trim().to_string(),
            segments: self.segments,
        }
    }
}

/// Join lines, dropping leading and trailing blank lines but keeping
/// interior ones verbatim.
fn trim_blank_lines(lines: &[&str]) -> String {
    let is_content = |l: &&str| !l.trim().is_empty();
    let Some(start) = lines.iter().position(is_content) else {
        return String::new();
    };
    let end = lines.iter().rposition(is_content).unwrap_or(start);
    lines[start..=end].join("\n")
}
