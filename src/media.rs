//! Camera access and frame capture through the browser media APIs.

use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::error::{js_message, AppError, AppResult};

pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;
pub const CAPTURE_FILE_NAME: &str = "captured_image.jpg";
const CAPTURE_MIME: &str = "image/jpeg";

fn camera_error(value: impl Into<JsValue>) -> AppError {
    AppError::Camera(js_message(&value.into()))
}

/// Asks for a video stream and plays it in `video`.
pub async fn start_camera(video: &HtmlVideoElement) -> AppResult<MediaStream> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no window".into()))?;
    let devices = window.navigator().media_devices().map_err(camera_error)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let pending = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(camera_error)?;
    let stream: MediaStream = JsFuture::from(pending)
        .await
        .map_err(camera_error)?
        .dyn_into()
        .map_err(camera_error)?;

    video.set_src_object(Some(&stream));
    let playing = video.play().map_err(camera_error)?;
    JsFuture::from(playing).await.map_err(camera_error)?;
    log::info!("camera stream started");
    Ok(stream)
}

pub fn stop_camera(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    log::debug!("camera stream stopped");
}

/// Draws the current video frame onto `canvas` and encodes it as JPEG.
pub async fn capture_frame(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> AppResult<Blob> {
    canvas.set_width(CAPTURE_WIDTH);
    canvas.set_height(CAPTURE_HEIGHT);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(camera_error)?
        .ok_or_else(|| AppError::Camera("canvas has no 2d context".into()))?
        .dyn_into()
        .map_err(camera_error)?;
    context
        .draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            f64::from(CAPTURE_WIDTH),
            f64::from(CAPTURE_HEIGHT),
        )
        .map_err(camera_error)?;

    let encoded = Promise::new(&mut |resolve: Function, reject: Function| {
        let on_blob = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(err) = canvas.to_blob_with_type(on_blob.unchecked_ref(), CAPTURE_MIME) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let blob = JsFuture::from(encoded).await.map_err(camera_error)?;
    if blob.is_null() {
        return Err(AppError::Camera("the frame could not be encoded".into()));
    }
    blob.dyn_into::<Blob>().map_err(camera_error)
}
