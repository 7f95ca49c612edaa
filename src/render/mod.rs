//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;

use crate::model::{Example, Link};
use crate::parser::lang::Language;
use anyhow::{anyhow, Result};

/// Site-wide settings shared by every rendered page.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub title: String,
    pub intro: Option<String>,
    pub source_url: Option<String>,
    pub license_url: Option<String>,
    pub language: Language,
}

/// One example together with its place in the navigation order.
pub struct ExamplePage<'a> {
    pub site: &'a SiteInfo,
    pub example: &'a Example,
    pub prev: Option<&'a Link>,
    pub next: Option<&'a Link>,
}

/// The list of all examples.
pub struct IndexPage<'a> {
    pub site: &'a SiteInfo,
    pub links: &'a [Link],
}

/// Trait for rendering examples and the index into a specific output format.
pub trait Renderer {
    fn render_example(&self, page: &ExamplePage) -> Result<String>;
    fn render_index(&self, index: &IndexPage) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("html").unwrap().file_extension(), "html");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format_fails() {
        let err = create_renderer("pdf").err().unwrap();
        assert!(err.to_string().contains("unknown format: pdf"));
    }
}
