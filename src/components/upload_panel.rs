use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::icons::icon_upload;

#[derive(Properties, PartialEq)]
pub struct UploadPanelProps {
    pub file_name: Option<String>,
    pub uploading: bool,
    pub on_file: Callback<Option<File>>,
    pub on_submit: Callback<()>,
}

#[function_component(UploadPanel)]
pub fn upload_panel(props: &UploadPanelProps) -> Html {
    let input_ref = use_node_ref();

    let on_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            on_file.emit(file);
        })
    };

    let on_browse = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50 space-y-4">
            <label class="text-[12px] font-bold text-muted-foreground">{"Choose an image of your expense"}</label>
            <input ref={input_ref} type="file" accept="image/*" class="hidden" onchange={on_change} />
            <button type="button" onclick={on_browse}
                class="w-full flex items-center justify-between bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[13px] text-[#173E63]">
                <span>{ props.file_name.clone().unwrap_or_else(|| "Browse...".to_string()) }</span>
                { icon_upload() }
            </button>
            <button type="button" onclick={on_submit} disabled={props.uploading}
                class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[11px] font-bold flex items-center justify-center gap-2">
                { if props.uploading { "Submitting..." } else { "Submit Picture" } }
                { icon_upload() }
            </button>
        </div>
    }
}
