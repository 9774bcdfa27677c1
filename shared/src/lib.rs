pub mod api;
pub mod constants;
pub mod prizes;
pub mod shared_wheel_game;
pub mod spin_sequencer;
pub mod validation;
