//! Map drawables for gmplot.
//!
//! Every drawable serializes itself into a Google Maps JavaScript snippet
//! through a [`ScriptWriter`]:
//!
//! - [`Text`]: a bold text label pinned to a coordinate with an invisible icon
//! - [`format_lat_lng`]: `google.maps.LatLng` construction with fixed precision
//! - [`MarkerIcons`]: marker images embedded as base64 data URIs
//!
//! # Example
//!
//! ```
//! use gmplot_drawables::{Drawable, MarkerIcons, ScriptWriter, Text, DEFAULT_ICON_DIR};
//!
//! let icons = MarkerIcons::new(DEFAULT_ICON_DIR);
//! let text = Text::new(&icons, 37.7749, -122.4194, "San Francisco", 4)
//!     .unwrap()
//!     .with_color("#FF0000");
//!
//! let mut writer = ScriptWriter::new();
//! text.write(&mut writer);
//! let script = writer.into_string();
//!
//! assert!(script.contains(r#"text: "San Francisco","#));
//! assert!(script.contains("new google.maps.LatLng(37.7749, -122.4194)"));
//! ```

mod icon;
mod lat_lng;
mod text;
mod writer;

pub use icon::{DEFAULT_ICON_DIR, IconError, MarkerIcons, embeddable_image};
pub use lat_lng::{LatLng, format_lat_lng};
pub use text::Text;
pub use writer::{Drawable, INDENT, ScriptWriter};
