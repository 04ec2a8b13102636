use thiserror::Error;
use yeardots_core::DateError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("date: {0}")]
    Date(#[from] DateError),
    #[error("svg: {0}")]
    Svg(#[from] usvg::Error),
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
    #[error("png: {0}")]
    Png(#[from] image::ImageError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
