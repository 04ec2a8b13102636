use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use yeardots_core::Style;
use yeardots_gateway::OutputFormat;

/// Render a yearly progress calendar wallpaper.
#[derive(Parser)]
#[command(name = "yeardots", version, about = "Yearly progress calendar wallpaper renderer")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Render for this date (YYYY-MM-DD or RFC 3339) instead of today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// IANA timezone used to determine today, e.g. Europe/Berlin.
    #[arg(long)]
    pub tz: Option<String>,

    #[arg(short, long, value_enum, default_value_t = StyleArg::Mono)]
    pub style: StyleArg,

    #[arg(short, long, value_enum, default_value_t = FormatArg::Png)]
    pub format: FormatArg,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Font file (TTF/OTF/TTC) made available to the rasterizer. Repeatable.
    #[arg(long)]
    pub font: Vec<PathBuf>,

    /// Family that generic sans-serif text resolves to.
    #[arg(long, default_value = "Inter")]
    pub font_family: String,

    /// Also load fonts installed on this machine.
    #[arg(long)]
    pub system_fonts: bool,

    /// TOML file overriding layout, palette and holidays.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Mono,
    Colored,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Mono => Style::Monochrome,
            StyleArg::Colored => Style::Colored,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Png,
    Svg,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
