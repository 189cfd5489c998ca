//! Value records that make up an asset manifest.

mod kind;
mod manifest;
mod sheet;
mod standalone;
mod surface;

pub use kind::AssetKind;
pub use manifest::Manifest;
pub use sheet::{Dimensions, FrameRect, SpritesheetEntry};
pub use standalone::ImageEntry;
pub use surface::{theme_for, SurfaceEntry, FALLBACK_THEME, SURFACE_PREFIX, SURFACE_THEMES};
