//! Site driver — find example directories, parse them and write the pages.

use crate::model::{Example, Link};
use crate::parser::{self, lang::Language};
use crate::render::{ExamplePage, IndexPage, Renderer, SiteInfo};
use anyhow::{anyhow, bail, Context, Result};
use glob::Pattern;
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use url::Url;

static RE_NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]+").unwrap());

/// Everything needed to build a site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub examples_dir: PathBuf,
    pub output_dir: PathBuf,
    pub site: SiteInfo,
    /// Only build examples whose name matches one of these; empty keeps all.
    pub only: Vec<Pattern>,
    /// Copied to `site.css` in the output directory
    pub stylesheet: Option<PathBuf>,
}

impl SiteConfig {
    fn language(&self) -> &Language {
        &self.site.language
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub skipped: usize,
}

/// Build every example page plus the index.
pub fn build(config: &SiteConfig, renderer: &dyn Renderer) -> Result<BuildSummary> {
    let dirs = discover(&config.examples_dir, &config.only)?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;
    let mut summary = BuildSummary::default();

    let mut examples = Vec::new();
    for dir in &dirs {
        match load_example(dir, config.language())? {
            Some(example) => examples.push(example),
            None => summary.skipped += 1,
        }
    }

    let ext = renderer.file_extension().to_string();
    let links = examples
        .iter()
        .map(|e| -> Result<Link> {
            Ok(Link {
                name: e.name.clone(),
                url: page_url(&e.name, &ext)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    for (i, example) in examples.iter().enumerate() {
        let (prev, next) = neighbours(&links, i);
        let page = ExamplePage {
            site: &config.site,
            example,
            prev,
            next,
        };
        let out_path = config.output_dir.join(format!("{}.{}", example.name, ext));
        write(&out_path, &renderer.render_example(&page)?)?;
        summary.pages += 1;
    }

    let index = IndexPage {
        site: &config.site,
        links: &links,
    };
    write(
        &config.output_dir.join(format!("index.{}", ext)),
        &renderer.render_index(&index)?,
    )?;

    if let Some(ref stylesheet) = config.stylesheet {
        let target = config.output_dir.join("site.css");
        fs::copy(stylesheet, &target).with_context(|| {
            format!("failed to copy stylesheet: {}", stylesheet.display())
        })?;
        debug!("copied {} to {}", stylesheet.display(), target.display());
    }

    Ok(summary)
}

/// List example directories, sorted by name for a stable page order.
pub fn discover(examples_dir: &Path, only: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !examples_dir.is_dir() {
        bail!(
            "examples directory not found: {}",
            examples_dir.display()
        );
    }

    let entries = fs::read_dir(examples_dir).with_context(|| {
        format!("failed to read directory: {}", examples_dir.display())
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read directory: {}", examples_dir.display()))?
            .path();
        if !path.is_dir() {
            continue;
        }
        let name = dir_name(&path);
        if !only.is_empty() && !only.iter().any(|p| p.matches(&name)) {
            debug!("filtered out {}", name);
            continue;
        }
        dirs.push(path);
    }

    if dirs.is_empty() {
        warn!("no examples found in {}", examples_dir.display());
    }
    dirs.sort();
    Ok(dirs)
}

/// Load `<dir>/<name>.<ext>` and the optional `<dir>/<name>.sh`.
///
/// Returns `None` when the primary source file is missing.
pub fn load_example(dir: &Path, language: &Language) -> Result<Option<Example>> {
    let name = dir_name(dir);
    let source_file = dir.join(format!("{}.{}", name, language.extension));
    if !source_file.is_file() {
        warn!(
            "skipping {}: no {} found",
            dir.display(),
            source_file.display()
        );
        return Ok(None);
    }

    let content = fs::read_to_string(&source_file)
        .with_context(|| format!("failed to read {}", source_file.display()))?;
    let source = parser::parse(&content, language.comment_prefix);
    info!(
        "parsed {}: {} segments",
        source_file.display(),
        source.segments.len()
    );

    let script_path = dir.join(format!("{}.sh", name));
    let (script_file, script) = if script_path.is_file() && script_path != source_file {
        let content = fs::read_to_string(&script_path)
            .with_context(|| format!("failed to read {}", script_path.display()))?;
        let script = parser::parse_file(&script_path, &content)?;
        info!(
            "parsed {}: {} segments",
            script_path.display(),
            script.segments.len()
        );
        (Some(script_path), Some(script))
    } else {
        (None, None)
    };

    Ok(Some(Example {
        id: slug(&name),
        name,
        source_file,
        source,
        script_file,
        script,
    }))
}

/// Previous and next entries around position `i`.
fn neighbours(links: &[Link], i: usize) -> (Option<&Link>, Option<&Link>) {
    let prev = i.checked_sub(1).and_then(|p| links.get(p));
    (prev, links.get(i + 1))
}

/// Relative link to a page, with the file name percent-encoded.
fn page_url(name: &str, ext: &str) -> Result<String> {
    let mut url = Url::parse("http://site/")?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("cannot build a link for {}", name))?
        .pop_if_empty()
        .push(&format!("{}.{}", name, ext));
    Ok(url.path().trim_start_matches('/').to_string())
}

/// Element id for an example name: lowercased, runs of anything but
/// letters, digits, `_` and `-` replaced by `-`.
pub fn slug(name: &str) -> String {
    let slug = RE_NON_SLUG
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string();
    if slug.is_empty() {
        "example".to_string()
    } else {
        slug
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(())
}
