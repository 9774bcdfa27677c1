use std::future::Future;

use gloo_timers::callback::Interval;
use shared::spin_sequencer::FetchError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Polled<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Loads `fetch` immediately and then every `period_ms`. Changing
/// `refresh_key` forces an immediate reload.
#[hook]
pub fn use_polling<T, F, Fut>(period_ms: u32, refresh_key: u32, fetch: F) -> Polled<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let data = use_state(|| None::<T>);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let error = error.clone();

        use_effect_with(refresh_key, move |_| {
            let load = move || {
                let data = data.clone();
                let error = error.clone();
                let request = fetch();
                spawn_local(async move {
                    match request.await {
                        Ok(value) => {
                            data.set(Some(value));
                            error.set(None);
                        }
                        Err(e) => {
                            log::warn!("Polling request failed: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            };

            load();
            let interval = Interval::new(period_ms, load);

            move || drop(interval)
        });
    }

    Polled {
        data: (*data).clone(),
        error: (*error).clone(),
    }
}
