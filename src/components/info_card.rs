use yew::prelude::*;

use super::icons::{icon_credit_card, icon_target, icon_wallet};
use crate::format::format_currency;

#[derive(Clone, Copy, PartialEq)]
pub enum CardIcon {
    CreditCard,
    Wallet,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    pub title: &'static str,
    pub amount: f64,
    pub icon: CardIcon,
    pub currency: String,
}

#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ format_currency(props.amount, &props.currency) }</h3>
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        CardIcon::CreditCard => icon_credit_card(),
                        CardIcon::Wallet => icon_wallet(),
                        CardIcon::Target => icon_target(),
                    }
                }
            </div>
        </div>
    }
}
