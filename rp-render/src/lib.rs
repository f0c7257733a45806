//! Rendering of road points into map markers and display strings.
//!
//! One renderer covers every map variant: colors and marker geometry come
//! from a [`Palette`], user-facing text from a [`Locale`]'s [`LabelSet`].

pub mod locale;
pub mod marker;
pub mod palette;

pub use locale::{LabelSet, Locale};
pub use marker::{Capability, DisplayZone, Marker, Popup, RepairControl, Renderer, StatsFields};
pub use palette::Palette;
