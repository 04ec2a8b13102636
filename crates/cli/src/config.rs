use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use yeardots_core::{Classifier, HolidayCalendar, Layout, LayoutConfig, MonthDay, Palette, SceneBuilder};

/// Contents of a `--config` TOML file. Every table is optional.
///
/// ```toml
/// holidays = [{ month = 11, day = 25 }]
///
/// [layout]
/// dot_radius = 10.0
///
/// [palette]
/// background = "#000000"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub palette: Palette,
    /// Replaces the built-in holiday table. Months are 0-based.
    #[serde(default)]
    pub holidays: Option<Vec<MonthDay>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn scene_builder(self) -> Result<SceneBuilder> {
        let layout = Layout::new(self.layout).context("invalid [layout]")?;
        let classifier = match self.holidays {
            Some(days) => Classifier::new(HolidayCalendar::new(days)),
            None => Classifier::default(),
        };
        Ok(SceneBuilder::new(layout, self.palette, classifier))
    }
}
