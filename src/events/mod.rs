pub mod pointer;
pub mod scroll;
pub mod slider;

pub use pointer::{wire_cursor, wire_magnetic, wire_program_rows, wire_tilt};
pub use scroll::{highlight_active_link, wire_hero_parallax, wire_mobile_menu, wire_nav_scroll};
pub use slider::wire_before_after;
