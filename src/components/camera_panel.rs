use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, HtmlCanvasElement, HtmlVideoElement, MediaStream};
use yew::prelude::*;

use super::icons::icon_camera;
use crate::media::{capture_frame, start_camera, stop_camera, CAPTURE_HEIGHT, CAPTURE_WIDTH};

#[derive(Properties, PartialEq)]
pub struct CameraPanelProps {
    pub uploading: bool,
    pub on_capture: Callback<Blob>,
    pub on_error: Callback<String>,
}

/// Live camera preview. The stream starts on mount and is stopped when the
/// panel goes away.
#[function_component(CameraPanel)]
pub fn camera_panel(props: &CameraPanelProps) -> Html {
    let video_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let stream = use_mut_ref(|| None::<MediaStream>);
    let ready = use_state(|| false);

    {
        let video_ref = video_ref.clone();
        let stream = stream.clone();
        let ready = ready.clone();
        let on_error = props.on_error.clone();
        use_effect_with_deps(
            move |_| {
                let unmounted = Rc::new(Cell::new(false));
                {
                    let unmounted = unmounted.clone();
                    let stream = stream.clone();
                    spawn_local(async move {
                        let video = match video_ref.cast::<HtmlVideoElement>() {
                            Some(video) => video,
                            None => return,
                        };
                        match start_camera(&video).await {
                            Ok(started) if unmounted.get() => stop_camera(&started),
                            Ok(started) => {
                                *stream.borrow_mut() = Some(started);
                                ready.set(true);
                            }
                            Err(err) => {
                                log::error!("{}", err);
                                if !unmounted.get() {
                                    on_error.emit(err.to_string());
                                }
                            }
                        }
                    });
                }
                move || {
                    unmounted.set(true);
                    if let Some(active) = stream.borrow_mut().take() {
                        stop_camera(&active);
                    }
                }
            },
            (),
        );
    }

    let on_capture = {
        let video_ref = video_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let on_capture = props.on_capture.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |_| {
            let video = video_ref.cast::<HtmlVideoElement>();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            if let (Some(video), Some(canvas)) = (video, canvas) {
                let on_capture = on_capture.clone();
                let on_error = on_error.clone();
                spawn_local(async move {
                    match capture_frame(&video, &canvas).await {
                        Ok(blob) => on_capture.emit(blob),
                        Err(err) => {
                            log::error!("{}", err);
                            on_error.emit(err.to_string());
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50 space-y-4">
            <video ref={video_ref} class="w-full rounded-[10px] bg-black" />
            <canvas ref={canvas_ref} class="hidden" width={CAPTURE_WIDTH.to_string()} height={CAPTURE_HEIGHT.to_string()} />
            <button type="button" onclick={on_capture} disabled={!*ready || props.uploading}
                class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[11px] font-bold flex items-center justify-center gap-2">
                { if props.uploading { "Submitting..." } else { "Capture and Submit Picture" } }
                { icon_camera() }
            </button>
        </div>
    }
}
