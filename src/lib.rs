//! by-example — turn annotated example sources into side-by-side
//! documentation | code pages.
//!
//! The [`parser`] splits a source file into a header and (docs, code)
//! segments, [`render`] turns parsed examples into pages and [`site`] drives
//! a whole examples directory.

pub mod model;
pub mod parser;
pub mod render;
pub mod site;
