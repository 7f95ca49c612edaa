//! by-example — generate a "by Example" site from a directory of annotated
//! examples.
//!
//! Each `examples/<Name>/` holds `<Name>.<ext>` and optionally `<Name>.sh`:
//!
//! - `by-example examples -o site`
//! - `by-example examples -o site -l rust --only 'Hello*' -f json`

use anyhow::{Context, Result};
use by_example::parser::lang;
use by_example::render::{self, SiteInfo};
use by_example::site::{self, SiteConfig};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "by-example",
    about = "Generate side-by-side documentation pages from annotated example sources"
)]
struct Cli {
    /// Directory containing one sub-directory per example
    #[arg(default_value = "examples")]
    examples: PathBuf,

    /// Output directory
    #[arg(short = 'o', long, default_value = "site")]
    output: PathBuf,

    /// Language of the example sources (csharp, rust, go, python, ...)
    #[arg(short = 'l', long, default_value = "csharp")]
    lang: String,

    /// Site title. Defaults to "<Language> by Example"
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Introduction paragraph for the index page (HTML allowed)
    #[arg(long)]
    intro: Option<String>,

    /// Link to the site's source repository, shown in the footer
    #[arg(long)]
    source_url: Option<String>,

    /// Link to the license, shown in the footer
    #[arg(long)]
    license_url: Option<String>,

    /// Only build examples whose directory name matches this glob.
    /// Can be specified multiple times.
    #[arg(long)]
    only: Vec<String>,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Stylesheet copied to site.css in the output directory
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;
    let config = site_config(cli)?;
    let summary = site::build(&config, renderer.as_ref())?;

    println!(
        "wrote {} example pages and index to {}{}",
        summary.pages,
        config.output_dir.display(),
        if summary.skipped > 0 {
            format!(" ({} directories skipped)", summary.skipped)
        } else {
            String::new()
        }
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn site_config(cli: Cli) -> Result<SiteConfig> {
    let language = lang::by_name(&cli.lang)?;
    let only = cli
        .only
        .iter()
        .map(|p| {
            glob::Pattern::new(p).with_context(|| format!("invalid glob pattern: {}", p))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SiteConfig {
        examples_dir: cli.examples,
        output_dir: cli.output,
        site: SiteInfo {
            title: cli
                .title
                .unwrap_or_else(|| format!("{} by Example", language.display_name)),
            intro: cli.intro,
            source_url: cli.source_url,
            license_url: cli.license_url,
            language,
        },
        only,
        stylesheet: cli.stylesheet,
    })
}
