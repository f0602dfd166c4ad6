use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use star_coil::{StarPattern, StarPatternSet};
use std::{io, process::ExitCode};

mod config;
mod render;
mod viewer;

use config::{Cli, Config};
use render::{LabelFont, Renderer};

/// One `--list` entry, the pattern plus the image file it would be written to.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedPattern<'a> {
    #[serde(flatten)]
    pattern: &'a StarPattern,
    file_name: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = {
        let stdin = io::stdin();
        config::resolve(cli, &mut stdin.lock(), &mut io::stdout())?
    };

    if !config.points.has_odd_half() {
        log::warn!(
            "{} points: half of the point count should be an odd number (e.g. 10, 30, 90)",
            config.points
        );
    }

    let patterns = StarPatternSet::enumerate(config.points);
    log::info!(
        "Finding star patterns: {}",
        patterns
            .iter()
            .map(|p| p.index().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    if config.list_only {
        return list_patterns(&patterns);
    }

    if patterns.is_empty() {
        log::warn!("no star patterns exist for {} points", config.points);
        return Ok(());
    }

    generate(&config, &patterns)
}

fn list_patterns(patterns: &StarPatternSet) -> anyhow::Result<()> {
    let listed: Vec<_> = patterns
        .iter()
        .map(|pattern| ListedPattern {
            pattern,
            file_name: pattern.file_name(),
        })
        .collect();

    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &listed).context("failed to write pattern list")?;
    println!();
    Ok(())
}

fn generate(config: &Config, patterns: &StarPatternSet) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let font = LabelFont::load(&config.font, config.font_size);
    let renderer = Renderer::new(config.render, font);
    let files = render::render_all(&renderer, patterns, &config.output_dir)?;
    log::info!("Done!");

    if config.display && !files.is_empty() {
        viewer::open_all(&files);
    }

    Ok(())
}
