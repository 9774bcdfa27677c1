use futures::future::LocalBoxFuture;
use futures::FutureExt;
use shared::api::{AdminStatus, StockStatus};
use shared::constants::{ADMIN_LOG_FETCH_LIMIT, ADMIN_LOGS_POLL_MS, ADMIN_STATUS_POLL_MS};
use shared::prizes::UNLIMITED_STOCK;
use shared::spin_sequencer::FetchError;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::api;
use crate::components::{LoadingSpinner, LockSwitch, LogTable};
use crate::config::default_admin_secret;
use crate::hooks::use_polling;
use crate::styles;

const PRIZES_POLL_MS: u32 = 60_000;

type AdminAction = LocalBoxFuture<'static, Result<String, FetchError>>;

fn stock_label(stock: &StockStatus) -> String {
    if stock.stock == i64::from(UNLIMITED_STOCK) {
        "∞".to_string()
    } else {
        format!("{} / {}", stock.stock.max(0), stock.max)
    }
}

fn stock_percent(stock: &StockStatus) -> f64 {
    if stock.max <= 0 || stock.stock < 0 {
        return 100.0;
    }
    (stock.stock as f64 / stock.max as f64 * 100.0).clamp(0.0, 100.0)
}

fn admin_message(error: &FetchError) -> String {
    match error {
        FetchError::Status { message: Some(message), .. } => message.clone(),
        other => other.to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct StockListProps {
    stocks: Vec<StockStatus>,
}

#[function_component(StockList)]
fn stock_list(props: &StockListProps) -> Html {
    html! {
        <ul class="space-y-3">
            { for props.stocks.iter().map(|stock| html! {
                <li key={stock.prize_id.clone()}>
                    <div class="flex justify-between text-sm mb-1">
                        <span class="font-medium text-gray-800 dark:text-gray-200">{stock.name.clone()}</span>
                        <span class={if stock.stock == 0 { styles::TEXT_ERROR } else { styles::TEXT_SMALL }}>
                            {stock_label(stock)}
                        </span>
                    </div>
                    <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                        <div
                            class="bg-gradient-to-r from-orange-400 to-amber-500 h-2 rounded-full transition-all duration-500"
                            style={format!("width: {}%", stock_percent(stock))}
                        />
                    </div>
                </li>
            }) }
        </ul>
    }
}

#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let secret = use_state(default_admin_secret);
    let busy = use_state(|| false);
    let notice = use_state(|| None::<Result<String, String>>);
    let refresh_counter = use_mut_ref(|| 0u32);
    let refresh_key = use_state(|| 0u32);

    let status = use_polling(ADMIN_STATUS_POLL_MS, *refresh_key, api::fetch_status);
    let logs = use_polling(ADMIN_LOGS_POLL_MS, *refresh_key, || api::fetch_logs(ADMIN_LOG_FETCH_LIMIT));
    let stats = use_polling(ADMIN_LOGS_POLL_MS, *refresh_key, api::fetch_stats);
    let prizes = use_polling(PRIZES_POLL_MS, 0, api::fetch_prizes);

    // Runs one admin request, reports its outcome and reloads everything
    let run_action = {
        let busy = busy.clone();
        let notice = notice.clone();
        let refresh_key = refresh_key.clone();
        Callback::from(move |action: AdminAction| {
            let busy = busy.clone();
            let notice = notice.clone();
            let refresh_key = refresh_key.clone();
            let refresh_counter = refresh_counter.clone();

            busy.set(true);
            spawn_local(async move {
                match action.await {
                    Ok(message) => notice.set(Some(Ok(message))),
                    Err(e) => {
                        log::warn!("Admin action failed: {}", e);
                        notice.set(Some(Err(admin_message(&e))));
                    }
                }
                busy.set(false);

                let next = {
                    let mut counter = refresh_counter.borrow_mut();
                    *counter += 1;
                    *counter
                };
                refresh_key.set(next);
            });
        })
    };

    let on_lock = {
        let secret = secret.clone();
        let run_action = run_action.clone();
        Callback::from(move |prize_id: String| {
            let secret = (*secret).clone();
            run_action.emit(async move { api::lock_prize(&prize_id, &secret).await }.boxed_local());
        })
    };

    let on_unlock = {
        let secret = secret.clone();
        let run_action = run_action.clone();
        Callback::from(move |_: ()| {
            let secret = (*secret).clone();
            run_action.emit(async move { api::unlock_prize(&secret).await }.boxed_local());
        })
    };

    let on_reset = {
        let secret = secret.clone();
        let run_action = run_action.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .and_then(|window| window.confirm_with_message("Reset every stock and clear the lock?").ok())
                .unwrap_or(false);
            if confirmed {
                let secret = (*secret).clone();
                run_action.emit(async move { api::reset_stocks(&secret).await }.boxed_local());
            }
        })
    };

    let on_secret = {
        let secret = secret.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            secret.set(input.value());
        })
    };

    let admin_status: AdminStatus = status.data.clone().unwrap_or_default();
    let connection_error = status.error.clone().or_else(|| logs.error.clone());

    html! {
        <div class={styles::CONTAINER_LG}>
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-6">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{"🎛️ Lucky Draw Control"}</h1>
                <div class="w-full sm:w-64">
                    <input
                        type="password"
                        placeholder="Admin secret"
                        value={(*secret).clone()}
                        oninput={on_secret}
                        class={styles::SELECT}
                    />
                </div>
            </div>

            if let Some(error) = &connection_error {
                <div class={classes!(styles::ALERT_ERROR, "mb-4")}>{format!("Cannot reach the server: {}", error)}</div>
            }

            if let Some(result) = &*notice {
                <div class={classes!(
                    if result.is_ok() { styles::ALERT_SUCCESS } else { styles::ALERT_ERROR },
                    "mb-4"
                )}>
                    {match result {
                        Ok(message) => message.clone(),
                        Err(message) => message.clone(),
                    }}
                </div>
            }

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-6">
                <LockSwitch
                    status={admin_status.lock.clone()}
                    prizes={prizes.data.clone().unwrap_or_default()}
                    busy={*busy}
                    on_lock={on_lock}
                    on_unlock={on_unlock}
                />

                <div class={styles::CARD}>
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{"📦 Stock"}</h3>
                        <button onclick={on_reset} disabled={*busy} class={styles::BUTTON_DANGER}>{"Reset"}</button>
                    </div>
                    if status.data.is_none() && status.error.is_none() {
                        <LoadingSpinner />
                    } else {
                        <StockList stocks={admin_status.stocks.clone()} />
                    }
                </div>

                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"📊 Stats"}</h3>
                    if let Some(stats) = &stats.data {
                        <p class="text-4xl font-bold text-orange-500 mb-4">{stats.total_spins}</p>
                        <ul class="space-y-1">
                            { for stats.by_prize.iter().map(|(prize_id, count)| html! {
                                <li class="flex justify-between text-sm text-gray-700 dark:text-gray-300">
                                    <span>{prize_id.clone()}</span>
                                    <span class="font-medium">{*count}</span>
                                </li>
                            }) }
                        </ul>
                    } else {
                        <LoadingSpinner />
                    }
                </div>
            </div>

            <div class={styles::CARD}>
                <h3 class={styles::CARD_TITLE}>{format!("🧾 Last {} spins", ADMIN_LOG_FETCH_LIMIT)}</h3>
                if let Some(entries) = &logs.data {
                    <LogTable logs={entries.clone()} />
                } else {
                    <LoadingSpinner />
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(stock: i64, max: i64) -> StockStatus {
        StockStatus {
            prize_id: "MK_DUCK".to_string(),
            name: "MK Duck Card".to_string(),
            stock,
            max,
        }
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(&stock(3, 5)), "3 / 5");
        assert_eq!(stock_label(&stock(-1, 5)), "∞");
        assert_eq!(stock_label(&stock(0, 1)), "0 / 1");
    }

    #[test]
    fn test_stock_percent() {
        assert_eq!(stock_percent(&stock(5, 5)), 100.0);
        assert_eq!(stock_percent(&stock(0, 5)), 0.0);
        assert_eq!(stock_percent(&stock(-1, 5)), 100.0);
    }

    #[test]
    fn test_admin_message_prefers_server_text() {
        let unauthorized = FetchError::Status {
            code: 401,
            message: Some("Invalid admin secret".to_string()),
        };
        assert_eq!(admin_message(&unauthorized), "Invalid admin secret");
        assert_eq!(admin_message(&FetchError::Status { code: 500, message: None }), "Server error 500");
    }
}
