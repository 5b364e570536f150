use std::fmt;

use crate::error::{IconError, Result};

/// Largest edge an icon directory entry can declare.
pub const MAX_EDGE: u32 = 256;

/// Resolutions written when the caller does not pick their own.
pub const DEFAULT_TARGETS: [Dimension; 4] = [
    Dimension::square(16),
    Dimension::square(32),
    Dimension::square(48),
    Dimension::square(256),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    fn fits_container(&self) -> bool {
        (1..=MAX_EDGE).contains(&self.width) && (1..=MAX_EDGE).contains(&self.height)
    }
}

impl From<(u32, u32)> for Dimension {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rejects lists the container cannot hold: empty, or any edge outside `1..=256`.
pub fn validate(targets: &[Dimension]) -> Result<()> {
    if targets.is_empty() {
        return Err(IconError::invalid_dimensions("no target dimensions given"));
    }
    if let Some(bad) = targets.iter().find(|d| !d.fits_container()) {
        return Err(IconError::invalid_dimensions(format!(
            "{bad} is outside 1x1..{MAX_EDGE}x{MAX_EDGE}"
        )));
    }
    Ok(())
}
