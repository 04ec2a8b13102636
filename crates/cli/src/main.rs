mod cli;
mod config;
mod logging;

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use yeardots_core::SceneBuilder;
use yeardots_gateway::{FontConfig, Gateway, Rasterizer, RenderRequest, SystemClock};

use crate::cli::Cli;
use crate::config::FileConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let builder = match &cli.config {
        Some(path) => FileConfig::load(path)?.scene_builder()?,
        None => SceneBuilder::default(),
    };

    let font_buffers = cli
        .font
        .iter()
        .map(|path| std::fs::read(path).with_context(|| format!("reading font {}", path.display())))
        .collect::<Result<Vec<_>>>()?;
    let fonts = FontConfig {
        font_buffers,
        default_family: cli.font_family,
        load_system_fonts: cli.system_fonts,
    };

    let gateway = Gateway::new(builder, Rasterizer::new(fonts));
    let request = RenderRequest {
        date: cli.date,
        timezone: None,
        style: cli.style.into(),
        format: cli.format.into(),
    }
    .with_timezone(cli.tz);

    let rendered = gateway.handle(&request, &SystemClock)?;
    tracing::info!(
        content_type = rendered.content_type,
        cache_control = rendered.cache_control,
        content_disposition = rendered.content_disposition,
        bytes = rendered.body.len(),
        "rendered wallpaper"
    );

    match &cli.out {
        Some(path) => std::fs::write(path, &rendered.body)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered.body).context("writing to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
