//! Collaborators around the pure renderer: request parsing, date and
//! timezone resolution, rasterization, and response assembly.

pub mod clock;
pub mod error;
pub mod raster;
pub mod request;

pub use clock::{Clock, FixedClock, SystemClock, resolve_date};
pub use error::GatewayError;
pub use raster::{FontConfig, Rasterizer};
pub use request::{OutputFormat, RenderRequest};

use yeardots_core::SceneBuilder;
use yeardots_core::svg::render_svg;

pub const CACHE_CONTROL: &str = "public, max-age=3600";
pub const PNG_DISPOSITION: &str = r#"inline; filename="wallpaper.png""#;

/// A rendered body plus the headers a transport should send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub cache_control: &'static str,
    pub content_disposition: Option<&'static str>,
}

/// Turns [`RenderRequest`]s into [`Rendered`] responses.
#[derive(Debug, Default)]
pub struct Gateway {
    builder: SceneBuilder,
    rasterizer: Rasterizer,
}

impl Gateway {
    pub fn new(builder: SceneBuilder, rasterizer: Rasterizer) -> Self {
        Self {
            builder,
            rasterizer,
        }
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    #[tracing::instrument(level = "debug", skip_all, fields(format = ?request.format, style = ?request.style))]
    pub fn handle(
        &self,
        request: &RenderRequest,
        clock: &dyn Clock,
    ) -> Result<Rendered, GatewayError> {
        let date = resolve_date(request, clock)?;
        let scene = self.builder.build(&date, request.style);

        let body = match request.format {
            OutputFormat::Svg => render_svg(&scene).into_bytes(),
            OutputFormat::Json => serde_json::to_vec(&scene)?,
            OutputFormat::Png => self.rasterizer.rasterize_png(&render_svg(&scene))?,
        };
        tracing::debug!(bytes = body.len(), "rendered");

        Ok(Rendered {
            body,
            content_type: request.format.content_type(),
            cache_control: CACHE_CONTROL,
            content_disposition: match request.format {
                OutputFormat::Png => Some(PNG_DISPOSITION),
                _ => None,
            },
        })
    }
}
