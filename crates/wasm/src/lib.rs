use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use wasm_bindgen::prelude::*;
use yeardots_core::{SceneBuilder, Style};
use yeardots_gateway::{
    FontConfig, Gateway, GatewayError, OutputFormat, Rasterizer, RenderRequest, SystemClock,
};

static GATEWAY: Mutex<Option<Gateway>> = Mutex::new(None);

#[derive(Debug, Error)]
enum BridgeError {
    #[error("renderer state is poisoned")]
    Poisoned,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("rendered scene is not utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn lock() -> Result<MutexGuard<'static, Option<Gateway>>, BridgeError> {
    GATEWAY.lock().map_err(|_| BridgeError::Poisoned)
}

fn install_fonts(font_bytes: Vec<u8>, family: Option<String>) -> Result<bool, BridgeError> {
    let mut gateway = lock()?;
    if gateway.is_some() {
        return Ok(false);
    }
    let mut fonts = FontConfig {
        font_buffers: vec![font_bytes],
        ..FontConfig::default()
    };
    if let Some(family) = family.filter(|f| !f.is_empty()) {
        fonts.default_family = family;
    }
    *gateway = Some(Gateway::new(SceneBuilder::default(), Rasterizer::new(fonts)));
    Ok(true)
}

fn handle(request: &RenderRequest) -> Result<Vec<u8>, BridgeError> {
    let mut gateway = lock()?;
    // Without init_fonts the renderer still works; PNG text just has no glyphs.
    let gateway = gateway.get_or_insert_with(Gateway::default);
    Ok(gateway.handle(request, &SystemClock)?.body)
}

fn scene_json(date: &str, colored: bool) -> Result<String, BridgeError> {
    let request = RenderRequest {
        date: Some(date.to_string()),
        style: Style::from(colored),
        format: OutputFormat::Json,
        ..RenderRequest::default()
    };
    Ok(String::from_utf8(handle(&request)?)?)
}

/// Load the font used for text in PNG output. Only the first call has an
/// effect; returns whether this call performed the setup.
#[wasm_bindgen]
pub fn init_fonts(font_bytes: Vec<u8>, family: Option<String>) -> Result<bool, JsError> {
    Ok(install_fonts(font_bytes, family)?)
}

/// Render for an URL query string such as `style=colored&format=svg`.
///
/// `timezone` is the caller's IANA zone, used when the query has no date.
#[wasm_bindgen]
pub fn render(query: &str, timezone: Option<String>) -> Result<Vec<u8>, JsError> {
    let request = RenderRequest::from_query(query).with_timezone(timezone);
    Ok(handle(&request)?)
}

#[wasm_bindgen]
pub fn content_type(query: &str) -> String {
    RenderRequest::from_query(query)
        .format
        .content_type()
        .to_string()
}

/// The typed scene for `date` (`YYYY-MM-DD`) as JSON.
#[wasm_bindgen]
pub fn render_scene_json(date: &str, colored: bool) -> Result<String, JsError> {
    Ok(scene_json(date, colored)?)
}
