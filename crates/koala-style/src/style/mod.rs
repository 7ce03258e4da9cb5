//! Value-level helpers: the property table, lengths, colors and default
//! display values.

pub mod color;
pub mod display;
pub mod length;
pub mod properties;

pub use color::to_rgb;
pub use display::{becomes_block_when_detached, default_display, default_local_styles};
pub use length::{LengthValue, pixel_string, pixel_value};
pub use properties::{PROPERTIES, PropertyInfo, PropertyKind, is_inherited};
