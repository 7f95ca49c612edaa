//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the parsed examples directly, so custom front ends can do
//! their own templating.

use crate::model::{Example, Link};
use crate::render::{ExamplePage, IndexPage, Renderer};
use anyhow::Result;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct ExampleJson<'a> {
    #[serde(flatten)]
    example: &'a Example,
    language: &'a str,
    prev: Option<&'a Link>,
    next: Option<&'a Link>,
}

#[derive(Serialize)]
struct IndexJson<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    intro: Option<&'a str>,
    examples: &'a [Link],
}

impl Renderer for JsonRenderer {
    fn render_example(&self, page: &ExamplePage) -> Result<String> {
        let json = ExampleJson {
            example: page.example,
            language: page.site.language.name,
            prev: page.prev,
            next: page.next,
        };
        let mut out = serde_json::to_string_pretty(&json)?;
        out.push('\n');
        Ok(out)
    }

    fn render_index(&self, index: &IndexPage) -> Result<String> {
        let json = IndexJson {
            title: &index.site.title,
            intro: index.site.intro.as_deref(),
            examples: index.links,
        };
        let mut out = serde_json::to_string_pretty(&json)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
