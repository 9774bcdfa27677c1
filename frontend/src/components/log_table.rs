use shared::api::SpinLog;
use shared::prizes::prize_style;
use yew::prelude::*;

use crate::styles;

/// `2026-01-30 14:05:09.123+07` becomes `2026-01-30 14:05:09`.
pub fn format_timestamp(timestamp: &str) -> String {
    timestamp.get(..19).unwrap_or(timestamp).replace('T', " ")
}

#[derive(Properties, PartialEq)]
pub struct LogTableProps {
    pub logs: Vec<SpinLog>,
}

#[function_component(LogTable)]
pub fn log_table(props: &LogTableProps) -> Html {
    if props.logs.is_empty() {
        return html! {
            <p class={classes!(styles::TEXT_SMALL, "text-center", "py-6")}>{"No spins yet"}</p>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead>
                    <tr>
                        <th class={styles::TABLE_HEAD}>{"Time"}</th>
                        <th class={styles::TABLE_HEAD}>{"Instagram"}</th>
                        <th class={styles::TABLE_HEAD}>{"Prize"}</th>
                        <th class={styles::TABLE_HEAD}>{"Locked"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100 dark:divide-gray-700">
                    { for props.logs.iter().map(|log| html! {
                        <tr key={log.id}>
                            <td class={styles::TABLE_CELL}>{format_timestamp(&log.timestamp)}</td>
                            <td class={styles::TABLE_CELL}>{format!("@{}", log.instagram_id)}</td>
                            <td class={styles::TABLE_CELL}>
                                {format!("{} {}", prize_style(&log.prize_won).emoji, log.prize_name)}
                            </td>
                            <td class={styles::TABLE_CELL}>{if log.was_locked { "🔒" } else { "" }}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2026-01-30 14:05:09.123456+07"), "2026-01-30 14:05:09");
        assert_eq!(format_timestamp("2026-01-30T14:05:09Z"), "2026-01-30 14:05:09");
        assert_eq!(format_timestamp("short"), "short");
    }
}
