pub mod admin_panel;
pub mod public_game;
