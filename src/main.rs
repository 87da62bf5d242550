//! Command-line front end for the reference engine.
//!
//! - `scan <file>` prints detected references as JSON.
//! - `annotate <file> [--edition ID]` prints the text as HTML with references wrapped.
//! - `show <reference> [lang] [--edition ID]` fetches and prints the cited verses.

use anyhow::{Context, Result, anyhow, bail};
use scripture_refs::annotate::annotate_text;
use scripture_refs::config::{AppConfig, DEFAULT_CONFIG_PATH, load_config};
use scripture_refs::content::{ConfiguredSource, VerseFetcher, VerseRequest};
use scripture_refs::editions::{CATALOG_CACHE_PATH, EditionResolver, load_catalog};
use scripture_refs::text_utils::html_to_plain;
use scripture_refs::{Language, ReferenceDetector};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: scripture-refs scan <file> | annotate <file> [--edition ID] | show <reference> [lang] [--edition ID]";

#[derive(Debug)]
enum Command {
    Scan {
        path: String,
    },
    Annotate {
        path: String,
        edition: Option<String>,
    },
    Show {
        reference: String,
        language: Option<Language>,
        edition: Option<String>,
    },
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let command = parse_args(env::args().skip(1).collect())?;
    let config = load_config(Path::new(DEFAULT_CONFIG_PATH));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        mode = %config.display_mode,
        languages = ?config.detection_languages(),
        "Loaded reference engine configuration"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match command {
        Command::Scan { path } => scan(&config, &path),
        Command::Annotate { path, edition } => {
            runtime.block_on(annotate(&config, &path, edition.as_deref()))
        }
        Command::Show {
            reference,
            language,
            edition,
        } => runtime.block_on(show(&config, &reference, language, edition)),
    }
}

fn parse_args(args: Vec<String>) -> Result<Command> {
    let mut positional = Vec::new();
    let mut edition = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--edition" {
            edition = Some(iter.next().ok_or_else(|| anyhow!("--edition needs a value"))?);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let command = positional.next().ok_or_else(|| anyhow!(USAGE))?;
    let target = positional.next().ok_or_else(|| anyhow!(USAGE))?;
    match command.as_str() {
        "scan" => Ok(Command::Scan { path: target }),
        "annotate" => Ok(Command::Annotate {
            path: target,
            edition,
        }),
        "show" => {
            let language = match positional.next() {
                Some(code) => Some(
                    Language::from_code(&code).ok_or_else(|| anyhow!("Unsupported language: {code}"))?,
                ),
                None => None,
            };
            Ok(Command::Show {
                reference: target,
                language,
                edition,
            })
        }
        other => bail!("Unknown command `{other}`. {USAGE}"),
    }
}

fn read_input(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
}

fn scan(config: &AppConfig, path: &str) -> Result<()> {
    let text = read_input(path)?;
    let detector = ReferenceDetector::from_config(config);
    let detections = detector.scan(&text);
    info!(path, count = detections.len(), "Scanned input");
    println!("{}", serde_json::to_string_pretty(&detections)?);
    Ok(())
}

async fn annotate(config: &AppConfig, path: &str, edition: Option<&str>) -> Result<()> {
    let text = read_input(path)?;
    let detector = ReferenceDetector::from_config(config);
    let resolver = load_resolver(config, &reqwest::Client::new()).await;
    println!("{}", annotate_text(&text, &detector, &resolver, config, edition));
    Ok(())
}

async fn show(
    config: &AppConfig,
    reference: &str,
    language: Option<Language>,
    edition: Option<String>,
) -> Result<()> {
    let mut languages = Vec::new();
    languages.extend(language);
    languages.extend(config.detection_languages());
    let detector = ReferenceDetector::new(&languages);

    let request = match detector.scan(reference).first() {
        Some(detection) => {
            let parsed = detection
                .to_reference()
                .ok_or_else(|| anyhow!("Unrecognized book in `{reference}`"))?;
            VerseRequest::new(parsed, detection.language).with_label(&detection.text)
        }
        None => {
            let parsed = detector.parse_reference(reference)?;
            VerseRequest::new(parsed, language.unwrap_or(config.primary_language))
        }
    };
    let request = match edition {
        Some(id) => request.with_edition(id),
        None => request,
    };

    let client = reqwest::Client::new();
    let Some(source) = ConfiguredSource::from_config(config, client.clone()) else {
        bail!("content.source = \"app\" needs a host-provided chapter source");
    };
    let resolver = load_resolver(config, &client).await;
    let fetcher = VerseFetcher::from_config(source, resolver, config);

    let content = fetcher.fetch_verse_content(&request).await?;
    println!("{} ({})", request.label, content.edition);
    println!("{}", html_to_plain(&content.html));
    for note in &content.footnotes {
        println!("  [{}] {}", note.key, note.text);
    }
    Ok(())
}

async fn load_resolver(config: &AppConfig, client: &reqwest::Client) -> EditionResolver {
    let catalog = match config.catalog_url.as_deref() {
        Some(location) => match load_catalog(
            client,
            location,
            config.catalog_cache_ttl_secs,
            Path::new(CATALOG_CACHE_PATH),
            false,
        )
        .await
        {
            Ok(entries) => entries,
            Err(err) => {
                warn!(location, "Edition catalog unavailable: {err:#}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    EditionResolver::from_config(config, &catalog)
}

const FALLBACK_FILTER: &str = "debug";

fn init_tracing() -> ReloadHandle {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        "scripture-refs starting; logging.log_level in {DEFAULT_CONFIG_PATH} or RUST_LOG sets verbosity"
    );
    handle
}

/// Filter for a configured level. Unparseable levels fall back to `debug`.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::builder().parse(level).unwrap_or_else(|err| {
        warn!(%level, "Ignoring unparseable log level: {err}");
        EnvFilter::new(FALLBACK_FILTER)
    })
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let filter = level_filter(level);
    match handle.reload(filter) {
        Ok(()) => info!(%level, "Reference engine log level applied"),
        Err(err) => warn!(%level, "Could not apply reference engine log level: {err}"),
    }
}
