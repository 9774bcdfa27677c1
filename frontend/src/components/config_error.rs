use shared::constants::WHEEL_CONFIG_ERROR;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub detail: String,
}

/// Shown in place of the wheel when the segment table is invalid.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class={styles::ALERT_ERROR} role="alert">
            <p class="font-bold mb-1">{WHEEL_CONFIG_ERROR}</p>
            <p class="text-xs opacity-75">{props.detail.clone()}</p>
        </div>
    }
}
