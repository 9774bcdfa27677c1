use shared::prizes::prize_style;
use shared::spin_sequencer::SpinOutcome;
use yew::prelude::*;

use crate::styles;

const CLAIM_MESSAGE: &str = "Please screenshot this screen and show it to our staff";

/// Whether the prize is something to claim, and what the player should do.
fn prize_reveal(prize_id: &str) -> (bool, Option<&'static str>) {
    match prize_id {
        "MK_DUCK" | "STARBUCKS" | "DISCOUNT_10" | "DISCOUNT_05" => (true, Some(CLAIM_MESSAGE)),
        "GIVE_IG" => (false, Some("Please tell our staff your Instagram account")),
        _ => (false, None),
    }
}

#[derive(Properties, PartialEq)]
pub struct PrizeModalProps {
    pub outcome: Option<SpinOutcome>,
    pub on_close: Callback<()>,
}

#[function_component(PrizeModal)]
pub fn prize_modal(props: &PrizeModalProps) -> Html {
    let Some(outcome) = &props.outcome else {
        return html! {};
    };

    let style = prize_style(&outcome.prize_id);
    let (is_win, message) = prize_reveal(&outcome.prize_id);

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = on_backdrop.clone();
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={on_backdrop}>
            <div class={classes!(styles::CARD_WARM, "mx-4", "overflow-hidden")} onclick={stop}>
                <div class={classes!("text-8xl", "mb-4", is_win.then_some("animate-bounce"))}>
                    {style.emoji}
                </div>

                if is_win {
                    <h2 class="text-2xl font-bold mb-2 text-orange-500">{"🎊 Congratulations! 🎊"}</h2>
                    <p class="text-xl text-gray-800 dark:text-gray-200 mb-4">
                        {format!("You won {}", outcome.display_name)}
                    </p>
                } else {
                    <h2 class="text-2xl font-bold mb-4 text-gray-800 dark:text-gray-200">
                        {outcome.display_name.clone()}
                    </h2>
                }

                if let Some(message) = message {
                    <p class="text-sm text-gray-600 dark:text-gray-300 mb-6 bg-amber-50 dark:bg-gray-700 p-3 rounded-lg">
                        {format!("📸 {}", message)}
                    </p>
                }

                <button onclick={on_button} class={classes!(styles::BUTTON_PRIMARY, "px-8", "py-3", "text-lg")}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::prizes::NOTHING_PRIZE_ID;

    #[test]
    fn test_prize_reveal() {
        assert_eq!(prize_reveal("STARBUCKS"), (true, Some(CLAIM_MESSAGE)));
        assert!(!prize_reveal("GIVE_IG").0);
        assert_eq!(prize_reveal(NOTHING_PRIZE_ID), (false, None));
        assert_eq!(prize_reveal("MYSTERY"), (false, None));
    }
}
