use chrono::{TimeZone, Utc};
use yeardots_gateway::{
    CACHE_CONTROL, FixedClock, Gateway, GatewayError, PNG_DISPOSITION, RenderRequest,
};
use yeardots_protocol::{SceneCommand, SceneDocument};

fn clock() -> FixedClock {
    match Utc.with_ymd_and_hms(2025, 7, 2, 12, 0, 0) {
        chrono::LocalResult::Single(dt) => FixedClock(dt),
        _ => panic!("invalid fixture instant"),
    }
}

fn handle(query: &str) -> yeardots_gateway::Rendered {
    match Gateway::default().handle(&RenderRequest::from_query(query), &clock()) {
        Ok(rendered) => rendered,
        Err(e) => panic!("{query}: {e}"),
    }
}

#[test]
fn svg_response() {
    let rendered = handle("date=2025-07-02&format=svg&style=colored");
    assert_eq!(rendered.content_type, "image/svg+xml");
    assert_eq!(rendered.cache_control, CACHE_CONTROL);
    assert_eq!(rendered.content_disposition, None);

    let svg = String::from_utf8_lossy(&rendered.body);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">50%</text>"));
    assert_eq!(svg.matches("<circle").count(), 365);
}

#[test]
fn json_response_is_the_scene() {
    let rendered = handle("format=json");
    assert_eq!(rendered.content_type, "application/json");

    let doc: SceneDocument = match serde_json::from_slice(&rendered.body) {
        Ok(doc) => doc,
        Err(e) => panic!("scene json: {e}"),
    };
    assert_eq!((doc.width, doc.height), (1179.0, 2556.0));
    // The fixed clock says Jul 2, 2025 (day 183).
    let filled = doc
        .circles()
        .filter(|c| matches!(c, SceneCommand::DrawCircle { fill: Some(_), .. }))
        .count();
    assert_eq!(filled, 182);
}

#[test]
fn png_response() {
    let rendered = handle("date=2024-12-31");
    assert_eq!(rendered.content_type, "image/png");
    assert_eq!(rendered.content_disposition, Some(PNG_DISPOSITION));

    let image = match image::load_from_memory_with_format(&rendered.body, image::ImageFormat::Png)
    {
        Ok(image) => image.to_rgba8(),
        Err(e) => panic!("png decode: {e}"),
    };
    assert_eq!(image.dimensions(), (1179, 2556));
    assert_eq!(image.get_pixel(0, 0).0, [0x1c, 0x1d, 0x17, 0xff]);
}

#[test]
fn rasterizer_fonts_load_once_across_requests() {
    let gateway = Gateway::default();
    assert!(!gateway.rasterizer().is_initialized());

    let svg = RenderRequest::from_query("format=svg");
    assert!(gateway.handle(&svg, &clock()).is_ok());
    assert!(!gateway.rasterizer().is_initialized());

    let png = RenderRequest::from_query("format=png");
    assert!(gateway.handle(&png, &clock()).is_ok());
    assert!(gateway.rasterizer().is_initialized());
}

#[test]
fn error_type_is_displayable() {
    let err = GatewayError::Pixmap {
        width: 0,
        height: 10,
    };
    assert_eq!(err.to_string(), "cannot allocate a 0x10 pixmap");
}
