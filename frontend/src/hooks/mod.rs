pub mod use_polling;
pub mod use_spin_animation;

pub use use_polling::*;
pub use use_spin_animation::*;
