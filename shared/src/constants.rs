pub const SPIN_ENDPOINT: &str = "/api/spin";
pub const ADMIN_LOCK_ENDPOINT: &str = "/api/admin/lock";
pub const ADMIN_UNLOCK_ENDPOINT: &str = "/api/admin/unlock";
pub const ADMIN_RESET_ENDPOINT: &str = "/api/admin/reset";
pub const ADMIN_LOGS_ENDPOINT: &str = "/api/admin/logs";
pub const ADMIN_STATUS_ENDPOINT: &str = "/api/admin/status";
pub const ADMIN_STATS_ENDPOINT: &str = "/api/admin/stats";
pub const ADMIN_PRIZES_ENDPOINT: &str = "/api/admin/prizes";

pub const INVALID_BODY_ERROR: &str = "Invalid request body";
pub const INSTAGRAM_ID_REQUIRED_ERROR: &str = "Instagram ID is required";
pub const INVALID_INSTAGRAM_ID_ERROR: &str = "Please enter a valid Instagram account";
pub const INVALID_SECRET_ERROR: &str = "Invalid admin secret";
pub const PRIZE_ID_REQUIRED_ERROR: &str = "Prize ID is required";
pub const INVALID_PRIZE_ID_ERROR: &str = "Invalid prize ID";
pub const SPIN_FAILED_ERROR: &str = "Something went wrong. Please try again.";
pub const WHEEL_CONFIG_ERROR: &str = "The prize wheel is misconfigured. Please contact the staff.";

pub const DEFAULT_LOG_LIMIT: i64 = 50;
pub const MAX_LOG_LIMIT: i64 = 100;

pub const ADMIN_LOG_FETCH_LIMIT: i64 = 30;
pub const ADMIN_STATUS_POLL_MS: u32 = 3000;
pub const ADMIN_LOGS_POLL_MS: u32 = 5000;
