use shared::api::SpinLog;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Row shape of `spin_logs` as read back for the admin console.
#[derive(Debug, sqlx::FromRow)]
pub struct SpinLogRow {
    pub id: i64,
    pub instagram_id: String,
    pub prize_won: String,
    pub prize_name: String,
    pub was_locked: bool,
    pub created_at: OffsetDateTime,
}

impl From<SpinLogRow> for SpinLog {
    fn from(row: SpinLogRow) -> Self {
        Self {
            id: row.id,
            instagram_id: row.instagram_id,
            prize_won: row.prize_won,
            prize_name: row.prize_name,
            was_locked: row.was_locked,
            timestamp: format_timestamp(row.created_at),
        }
    }
}

/// RFC 3339, the format the admin console reads back.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| at.to_string())
}

#[derive(Debug, Clone)]
pub struct NewSpinLog {
    pub instagram_id: String,
    pub prize_won: String,
    pub prize_name: String,
    pub was_locked: bool,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_log_timestamp_is_rfc3339() {
        let row = SpinLogRow {
            id: 7,
            instagram_id: "lucky.one".to_string(),
            prize_won: "GIVE_IG".to_string(),
            prize_name: "Give IG".to_string(),
            was_locked: false,
            created_at: datetime!(2026-01-30 14:05:09.123 UTC),
        };

        let log = SpinLog::from(row);
        assert_eq!(log.timestamp, "2026-01-30T14:05:09.123Z");
        assert_eq!(log.prize_won, "GIVE_IG");
    }

    #[test]
    fn test_offset_is_kept() {
        assert_eq!(
            format_timestamp(datetime!(2026-01-30 21:05:09 +07:00)),
            "2026-01-30T21:05:09+07:00"
        );
    }
}
