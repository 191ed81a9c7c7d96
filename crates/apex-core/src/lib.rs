pub mod animation;
pub mod constants;
pub mod countdown;
pub mod cursor;
pub mod lightbox;
pub mod nav;
pub mod pointer;
pub mod pricing;
pub mod reveal;
pub mod slider;
pub mod style;
pub mod submit;
pub mod validate;

pub use animation::*;
pub use constants::*;
pub use countdown::*;
pub use cursor::*;
pub use lightbox::*;
pub use nav::*;
pub use pointer::*;
pub use pricing::*;
pub use reveal::*;
pub use slider::*;
pub use style::*;
pub use submit::*;
pub use validate::*;
