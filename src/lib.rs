mod builder;
mod container;
pub mod debug;
mod dimension;
mod error;
mod source;
mod variant;

pub use self::builder::{build_icon, create_icon, IconBuilder, IconJob};
pub use self::builder::{DEFAULT_OUTPUT, DEFAULT_SOURCE};
pub use self::container::{read_icon, read_icon_sizes};
pub use self::dimension::{Dimension, DEFAULT_TARGETS, MAX_EDGE};
pub use self::error::{IconError, Result};
