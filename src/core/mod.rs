pub mod embed;
pub mod menu;
pub mod scroll;
pub mod spy;

pub use embed::autostart_update;
pub use menu::{closes_on_key, MenuState};
pub use scroll::*;
pub use spy::{current_section, link_is_active};
