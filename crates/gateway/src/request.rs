use serde::{Deserialize, Serialize};
use yeardots_core::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    /// The typed scene as JSON.
    Json,
}

impl OutputFormat {
    /// Anything unrecognised falls back to PNG.
    pub fn from_param(value: &str) -> Self {
        match value {
            "svg" => OutputFormat::Svg,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Png,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Json => "application/json",
        }
    }
}

/// What a caller asked for. The date stays unparsed until resolution so
/// that a bad override can fall back to "now".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub date: Option<String>,
    /// IANA timezone used to resolve "now", e.g. `Europe/Berlin`.
    pub timezone: Option<String>,
    pub style: Style,
    pub format: OutputFormat,
}

impl RenderRequest {
    /// Parse an URL query string such as `date=2025-06-15&style=colored&format=svg`.
    ///
    /// A leading `?` is ignored. Only `style=colored` selects colored mode.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut request = RenderRequest::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "date" if !value.is_empty() => request.date = Some(value.into_owned()),
                "style" => request.style = Style::from(value == "colored"),
                "format" => request.format = OutputFormat::from_param(&value),
                _ => {}
            }
        }
        request
    }

    pub fn with_timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = timezone.filter(|tz| !tz.is_empty());
        self
    }
}
