pub mod config_error;
pub mod loading_spinner;
pub mod lock_switch;
pub mod log_table;
pub mod prize_modal;
pub mod spin_button;
pub mod wheel_canvas;

pub use config_error::ConfigError;
pub use loading_spinner::LoadingSpinner;
pub use lock_switch::LockSwitch;
pub use log_table::LogTable;
pub use prize_modal::PrizeModal;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
