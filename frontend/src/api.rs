use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::client::{
    decode_as, encode_text_request, route, Endpoint, IMAGE_ENDPOINT, TEXT_ENDPOINT, VIDEO_ENDPOINT,
};
use shared::file_kind::is_pdf;
use shared::{
    ApiConfig, DetectionError, DetectionResult, FileKind, ImageDetectionResult,
    TextDetectionResult, VideoDetectionResult,
};
use wasm_bindgen::JsValue;
use web_sys::FormData;

pub async fn detect_text(
    config: &ApiConfig,
    text: &str,
) -> Result<TextDetectionResult, DetectionError> {
    let (ok, body) = send_text(config, text).await?;
    decode_as(&TEXT_ENDPOINT, ok, &body)
}

pub async fn detect_image(
    config: &ApiConfig,
    file: &GlooFile,
) -> Result<ImageDetectionResult, DetectionError> {
    let (ok, body) = upload(config, &IMAGE_ENDPOINT, file).await?;
    decode_as(&IMAGE_ENDPOINT, ok, &body)
}

pub async fn detect_video(
    config: &ApiConfig,
    file: &GlooFile,
) -> Result<VideoDetectionResult, DetectionError> {
    let (ok, body) = upload(config, &VIDEO_ENDPOINT, file).await?;
    decode_as(&VIDEO_ENDPOINT, ok, &body)
}

/// Reads a text document in the browser. PDFs are refused before any read happens.
pub async fn extract_text_from_file(file: &GlooFile) -> Result<String, DetectionError> {
    if is_pdf(&file.raw_mime_type(), &file.name()) {
        return Err(DetectionError::PdfNotSupported);
    }

    gloo_file::futures::read_as_text(file).await.map_err(|err| {
        log::warn!("Reading {} failed: {}", file.name(), err);
        DetectionError::FileRead
    })
}

/// Classifies the file and sends it to the matching endpoint. Text documents are
/// read in the browser first; images and videos are uploaded as they are.
pub async fn analyze(config: &ApiConfig, file: &GlooFile) -> Result<DetectionResult, DetectionError> {
    let name = file.name();
    let endpoint = route(&name)?;
    log::info!("Analyzing {} as {}", name, endpoint.kind);

    match endpoint.kind {
        FileKind::Text => {
            let text = extract_text_from_file(file).await?;
            detect_text(config, &text).await.map(DetectionResult::Text)
        }
        FileKind::Image => detect_image(config, file).await.map(DetectionResult::Image),
        FileKind::Video => detect_video(config, file).await.map(DetectionResult::Video),
        FileKind::Unknown => Err(DetectionError::UnsupportedFile(name)),
    }
}

async fn send_text(config: &ApiConfig, text: &str) -> Result<(bool, String), DetectionError> {
    let request = Request::post(&config.url_for(&TEXT_ENDPOINT))
        .header("Content-Type", "application/json")
        .body(encode_text_request(text)?)
        .map_err(|err| DetectionError::Request(err.to_string()))?;

    exchange(request).await
}

async fn upload(
    config: &ApiConfig,
    endpoint: &Endpoint,
    file: &GlooFile,
) -> Result<(bool, String), DetectionError> {
    let field = endpoint
        .multipart_field()
        .ok_or_else(|| DetectionError::Request(format!("{} takes no upload", endpoint.path)))?;

    let raw_file: &web_sys::File = file.as_ref();
    let form_data = FormData::new().map_err(js_request_error)?;
    form_data
        .append_with_blob(field, raw_file)
        .map_err(js_request_error)?;

    let request = Request::post(&config.url_for(endpoint))
        .body(form_data)
        .map_err(|err| DetectionError::Request(err.to_string()))?;

    exchange(request).await
}

// One round trip: the status flag and the body as text.
async fn exchange(request: Request) -> Result<(bool, String), DetectionError> {
    let response = request.send().await.map_err(|err| {
        error!(format!("Fetch error: {:?}", err));
        DetectionError::Network(err.to_string())
    })?;

    let ok = response.ok();
    if !ok {
        log::warn!("{} answered with status {}", response.url(), response.status());
    }

    let body = response
        .text()
        .await
        .map_err(|err| DetectionError::Network(err.to_string()))?;
    Ok((ok, body))
}

fn js_request_error(err: JsValue) -> DetectionError {
    DetectionError::Request(format!("{:?}", err))
}
