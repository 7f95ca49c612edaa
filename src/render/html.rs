//! HTML renderer — two-column docs | code pages and the example index.

use crate::model::{Link, ParsedFile};
use crate::parser::lang::{Language, SHELL};
use crate::render::{ExamplePage, IndexPage, Renderer, SiteInfo};
use anyhow::Result;

const PRISM_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0";

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_example(&self, page: &ExamplePage) -> Result<String> {
        let site = page.site;
        let example = page.example;
        let mut out = String::new();

        out.push_str(&render_head(&format!("{}: {}", site.title, example.name)));
        out.push_str("<body>\n");
        out.push_str(&format!(
            "<div class=\"example\" id=\"{}\">\n",
            html_escape(&example.id)
        ));
        out.push_str(&format!(
            "<h2><a href=\"./\">{}</a>: {}</h2>\n",
            html_escape(&site.title),
            html_escape(&example.name)
        ));

        if !example.source.header.is_empty() {
            out.push_str(&format!(
                "<p class=\"intro\">{}</p>\n",
                example.source.header
            ));
        }

        let mut languages = vec![site.language];
        out.push_str(&render_table(&example.source, &site.language));
        if let Some(script) = example.script.as_ref().filter(|s| has_content(s)) {
            out.push_str(&render_table(script, &SHELL));
            if site.language != SHELL {
                languages.push(SHELL);
            }
        }

        out.push_str("<p class=\"next\">");
        if let Some(next) = page.next {
            out.push_str(&format!(
                "Next example: <a href=\"{}\">{}</a>.",
                html_escape(&next.url),
                html_escape(&next.name)
            ));
        }
        out.push_str("</p>\n");

        out.push_str(&render_footer(site));
        out.push_str("</div>\n");

        out.push_str(&format!(
            "<script src=\"{}/prism.min.js\"></script>\n",
            PRISM_BASE
        ));
        for component in prism_components(&languages) {
            out.push_str(&format!(
                "<script src=\"{}/components/prism-{}.min.js\"></script>\n",
                PRISM_BASE, component
            ));
        }
        out.push_str(&render_script(page.prev, page.next));
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn render_index(&self, index: &IndexPage) -> Result<String> {
        let site = index.site;
        let mut out = String::new();

        out.push_str(&render_head(&site.title));
        out.push_str("<body>\n<div class=\"example\" id=\"intro\">\n");
        out.push_str(&format!(
            "<h2><a href=\"./\">{}</a></h2>\n",
            html_escape(&site.title)
        ));
        if let Some(ref intro) = site.intro {
            out.push_str(&format!("<p>{}</p>\n", intro));
        }

        out.push_str("<ul>\n");
        for link in index.links {
            out.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                html_escape(&link.url),
                html_escape(&link.name)
            ));
        }
        out.push_str("</ul>\n");

        out.push_str(&render_footer(site));
        out.push_str("</div>\n</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_head(title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    out.push_str("<link rel=\"stylesheet\" href=\"site.css\">\n");
    out.push_str("</head>\n");
    out
}

/// Prism components to load, dependencies first, each once.
fn prism_components(languages: &[Language]) -> Vec<&'static str> {
    let mut components = Vec::new();
    for language in languages {
        for &name in language.requires.iter().chain(std::iter::once(&language.name)) {
            if !components.contains(&name) {
                components.push(name);
            }
        }
    }
    components
}

fn has_content(parsed: &ParsedFile) -> bool {
    parsed.segments.iter().any(|s| !s.is_blank())
}

/// One table row per segment; segments with nothing to show are skipped.
fn render_table(parsed: &ParsedFile, language: &Language) -> String {
    let mut out = String::from("<table>\n");
    let class = language.highlight_class();

    for (i, seg) in parsed.segments.iter().filter(|s| !s.is_blank()).enumerate() {
        let row_class = if seg.add_blank_after { "spaced" } else { "" };
        out.push_str(&format!("  <tr class=\"{}\">\n", row_class));
        out.push_str(&format!(
            "    <td class=\"docs\">\n      <p>{}</p>\n    </td>\n",
            seg.docs
        ));
        if i == 0 {
            out.push_str("    <td class=\"code leading\">\n");
            out.push_str("      <button class=\"copy\" title=\"Copy code\">copy</button>\n");
        } else {
            out.push_str("    <td class=\"code\">\n");
        }
        out.push_str(&format!(
            "      <pre><code class=\"{}\">{}</code></pre>\n    </td>\n  </tr>\n",
            class,
            html_escape(&seg.code)
        ));
    }

    out.push_str("</table>\n");
    out
}

fn render_footer(site: &SiteInfo) -> String {
    let mut links = Vec::new();
    if let Some(ref url) = site.source_url {
        links.push(format!("<a href=\"{}\">source</a>", html_escape(url)));
    }
    if let Some(ref url) = site.license_url {
        links.push(format!("<a href=\"{}\">license</a>", html_escape(url)));
    }
    if links.is_empty() {
        return String::new();
    }
    format!("<p class=\"footer\">{}</p>\n", links.join(" | "))
}

/// Arrow-key navigation and the copy buttons.
fn render_script(prev: Option<&Link>, next: Option<&Link>) -> String {
    let go = |link: Option<&Link>| match link {
        Some(l) => format!("window.location.href = '{}';", js_escape(&l.url)),
        None => String::new(),
    };

    let mut out = String::from("<script>\n");
    out.push_str("window.onkeydown = (e) => {\n");
    out.push_str("  if (e.ctrlKey || e.altKey || e.shiftKey || e.metaKey) return;\n");
    out.push_str(&format!("  if (e.key === \"ArrowLeft\") {{ {} }}\n", go(prev)));
    out.push_str(&format!("  if (e.key === \"ArrowRight\") {{ {} }}\n", go(next)));
    out.push_str("};\n");
    out.push_str("document.querySelectorAll(\"button.copy\").forEach((button) => {\n");
    out.push_str("  button.addEventListener(\"click\", () => {\n");
    out.push_str("    const cells = button.closest(\"table\").querySelectorAll(\"td.code code\");\n");
    out.push_str("    const text = Array.from(cells).map((c) => c.textContent).join(\"\\n\");\n");
    out.push_str("    navigator.clipboard.writeText(text);\n");
    out.push_str("  });\n");
    out.push_str("});\n");
    out.push_str("</script>\n");
    out
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
