use shared::api::{LockStatus, PrizeInfo};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LockSwitchProps {
    pub status: LockStatus,
    pub prizes: Vec<PrizeInfo>,
    pub busy: bool,
    pub on_lock: Callback<String>,
    pub on_unlock: Callback<()>,
}

/// Arms a prize for the next spin, or disarms the current lock.
#[function_component(LockSwitch)]
pub fn lock_switch(props: &LockSwitchProps) -> Html {
    let selected = use_state(String::new);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_toggle = {
        let selected = selected.clone();
        let is_locked = props.status.is_locked;
        let on_lock = props.on_lock.clone();
        let on_unlock = props.on_unlock.clone();
        Callback::from(move |_: MouseEvent| {
            if is_locked {
                on_unlock.emit(());
            } else if !selected.is_empty() {
                on_lock.emit((*selected).clone());
            }
        })
    };

    let locked_name = props.status.locked_prize_id.as_ref().map(|id| {
        props
            .prizes
            .iter()
            .find(|prize| &prize.id == id)
            .map(|prize| prize.name.clone())
            .unwrap_or_else(|| id.clone())
    });

    let (track, knob) = if props.status.is_locked {
        ("bg-orange-500", "translate-x-8")
    } else {
        ("bg-gray-300 dark:bg-gray-600", "translate-x-1")
    };
    let can_toggle = !props.busy && (props.status.is_locked || !selected.is_empty());

    html! {
        <div class={styles::CARD}>
            <h3 class={styles::CARD_TITLE}>{"🔒 Next Spin Lock"}</h3>

            <select
                class={styles::SELECT}
                onchange={on_select}
                disabled={props.status.is_locked || props.busy}
            >
                <option value="" selected={selected.is_empty()}>{"Select a prize"}</option>
                { for props.prizes.iter().map(|prize| html! {
                    <option value={prize.id.clone()} selected={*selected == prize.id}>
                        {format!("{} ({})", prize.name, prize.id)}
                    </option>
                }) }
            </select>

            <div class="mt-4 flex items-center justify-between">
                <span class={styles::TEXT_SMALL}>
                    {match &locked_name {
                        Some(name) => format!("Locked: {}", name),
                        None => "No prize locked".to_string(),
                    }}
                </span>
                <button
                    onclick={on_toggle}
                    disabled={!can_toggle}
                    class={classes!("relative", "inline-flex", "h-8", "w-16", "items-center", "rounded-full", "transition-colors", "duration-300", "disabled:opacity-50", track)}
                    aria-label="Toggle prize lock"
                >
                    <span class={classes!("inline-block", "h-6", "w-6", "transform", "rounded-full", "bg-white", "shadow", "transition-transform", "duration-300", knob)} />
                </button>
            </div>
        </div>
    }
}
