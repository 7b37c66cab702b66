use yew::prelude::*;

use super::icons::{icon_camera, icon_image, icon_plus, icon_wallet};
use crate::state::AddOption;

#[derive(Properties, PartialEq)]
pub struct AddOptionsProps {
    pub selected: Option<AddOption>,
    pub on_select: Callback<AddOption>,
}

#[function_component(AddOptions)]
pub fn add_options(props: &AddOptionsProps) -> Html {
    html! {
        <div class="flex flex-wrap justify-between gap-3">
            { for AddOption::ALL.iter().map(|option| {
                let option = *option;
                let on_select = props.on_select.clone();
                let class_name = if props.selected == Some(option) || option == AddOption::Manual {
                    "flex items-center gap-2 bg-[#173E63] text-white px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all"
                } else {
                    "flex items-center gap-2 bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all"
                };
                let icon = match option {
                    AddOption::Wallet => icon_wallet(),
                    AddOption::Camera => icon_camera(),
                    AddOption::Picture => icon_image(),
                    AddOption::Manual => icon_plus(),
                };
                html! {
                    <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(option))}>
                        { option.label() }
                        { icon }
                    </button>
                }
            }) }
        </div>
    }
}
