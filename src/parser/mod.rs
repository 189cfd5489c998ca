//! Parsers for sprite sheet descriptor files.

mod descriptor;

pub use descriptor::{parse_coordinate, parse_descriptor, Descriptor, FRAME_TAG, IMAGE_PATH_ATTR};
