use std::rc::Rc;

use shared::constants::{INSTAGRAM_ID_REQUIRED_ERROR, INVALID_INSTAGRAM_ID_ERROR};
use shared::prizes::default_wheel_layout;
use shared::shared_wheel_game::SPIN_DURATION_MS;
use shared::spin_sequencer::{Phase, SpinAttempt, SpinSequencer, SpinSession};
use shared::validation::validate_instagram_id;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{user_message, GlooSettleTimer, HttpResultFetcher, WheelSequencer};
use crate::components::{ConfigError, PrizeModal, SpinButton, WheelCanvas};
use crate::hooks::use_spin_animation;
use crate::styles;

#[function_component(PublicGame)]
pub fn public_game() -> Html {
    let instagram_id = use_state(String::new);
    let input_error = use_state(|| None::<&'static str>);
    let spin_error = use_state(|| None::<String>);
    let session = use_state(SpinSession::new);

    // One sequencer per page; the observer mirrors its session into component state
    let wheel = {
        let session = session.clone();
        use_memo((), move |_| {
            default_wheel_layout().map(|layout| {
                let shared_layout = Rc::new(layout.clone());
                let sequencer: Rc<WheelSequencer> = Rc::new(
                    SpinSequencer::new(layout, HttpResultFetcher, GlooSettleTimer)
                        .with_observer(move |snapshot| session.set(snapshot.clone())),
                );
                (shared_layout, sequencer)
            })
        })
    };

    let rotation = use_spin_animation(session.current_rotation(), session.target_rotation(), SPIN_DURATION_MS);
    let is_spinning = matches!(session.phase(), Phase::Requesting | Phase::Animating);

    let start_spin = {
        let wheel = wheel.clone();
        let instagram_id = instagram_id.clone();
        let input_error = input_error.clone();
        let spin_error = spin_error.clone();

        Callback::from(move |_: ()| {
            let Ok((_, sequencer)) = &*wheel else {
                return;
            };

            match validate_instagram_id(&instagram_id) {
                Err(e) => {
                    input_error.set(Some(if e.code == "instagram_id_required" {
                        INSTAGRAM_ID_REQUIRED_ERROR
                    } else {
                        INVALID_INSTAGRAM_ID_ERROR
                    }));
                }
                Ok(id) => {
                    input_error.set(None);
                    spin_error.set(None);

                    let sequencer = sequencer.clone();
                    let spin_error = spin_error.clone();
                    spawn_local(async move {
                        if let SpinAttempt::Failed(e) = sequencer.spin(&id).await {
                            spin_error.set(Some(user_message(&e)));
                        }
                    });
                }
            }
        })
    };

    let on_input = {
        let instagram_id = instagram_id.clone();
        let input_error = input_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            instagram_id.set(input.value());
            input_error.set(None);
        })
    };

    let on_keydown = {
        let start_spin = start_spin.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                start_spin.emit(());
            }
        })
    };

    let on_close = {
        let wheel = wheel.clone();
        let instagram_id = instagram_id.clone();
        Callback::from(move |_: ()| {
            if let Ok((_, sequencer)) = &*wheel {
                if sequencer.dismiss() {
                    instagram_id.set(String::new());
                }
            }
        })
    };

    let content = match &*wheel {
        Err(e) => html! { <ConfigError detail={e.to_string()} /> },
        Ok((layout, _)) => html! {
            <>
                <div class="relative mx-auto mb-8 flex justify-center items-center">
                    <div class="w-full max-w-[450px] mx-auto">
                        <WheelCanvas layout={layout.clone()} rotation={rotation} is_spinning={is_spinning} />
                    </div>
                </div>

                if !is_spinning && session.pending_outcome().is_none() && session.current_rotation() != 0.0 {
                    <p class={classes!(styles::TEXT_SMALL, "-mt-4", "mb-6")}>
                        {format!("Last stop: {}", layout.segment_at_rotation(session.current_rotation()).label)}
                    </p>
                }

                <div class="mb-6">
                    <label class={styles::TEXT_LABEL} for="instagram-id">{"📱 Instagram Account"}</label>
                    <input
                        id="instagram-id"
                        type="text"
                        placeholder="yourname"
                        autocomplete="off"
                        value={(*instagram_id).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        disabled={is_spinning}
                        class={if input_error.is_some() { styles::INPUT_ERROR } else { styles::INPUT }}
                    />
                    if let Some(message) = *input_error {
                        <p class={classes!(styles::TEXT_ERROR, "mt-2")}>{message}</p>
                    }
                </div>

                <div class="flex justify-center">
                    <SpinButton
                        is_spinning={is_spinning}
                        disabled={instagram_id.trim().is_empty()}
                        onclick={start_spin.reform(|_: MouseEvent| ())}
                    />
                </div>

                if let Some(message) = &*spin_error {
                    <div class={classes!(styles::ALERT_ERROR, "mt-6")} role="alert">{message.clone()}</div>
                }

                <p class={classes!(styles::TEXT_SMALL, "mt-6")}>{"Spin to win a special prize! 🎉"}</p>
            </>
        },
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::CARD_WARM}>
                <div class="mb-8">
                    <h1 class="text-5xl md:text-6xl font-bold text-amber-900 dark:text-amber-200 mb-2">
                        {"🥟 Lucky Draw 🥟"}
                    </h1>
                </div>
                {content}
            </div>

            <PrizeModal outcome={session.revealed_outcome().cloned()} on_close={on_close} />
        </div>
    }
}
