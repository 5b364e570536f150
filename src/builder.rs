use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::container;
use crate::dimension::{self, Dimension, DEFAULT_TARGETS};
use crate::error::{IconError, Result};
use crate::source::SourceImage;
use crate::variant;

pub const DEFAULT_SOURCE: &str = "resources/image/app.png";
pub const DEFAULT_OUTPUT: &str = "resources/icons/app.ico";

pub struct IconBuilder {
    source: PathBuf,
    output: PathBuf,
    targets: Vec<Dimension>,
}

impl Default for IconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IconBuilder {
    pub fn new() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            targets: DEFAULT_TARGETS.to_vec(),
        }
    }

    pub fn with_source(mut self, p: impl Into<PathBuf>) -> Self {
        self.source = p.into();
        self
    }

    pub fn with_output(mut self, p: impl Into<PathBuf>) -> Self {
        self.output = p.into();
        self
    }

    pub fn with_target_dimensions<I, D>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<IconJob> {
        dimension::validate(&self.targets)?;
        Ok(IconJob {
            source: self.source,
            output: self.output,
            targets: self.targets,
        })
    }
}

/// A validated conversion of one source image into one icon file.
pub struct IconJob {
    source: PathBuf,
    output: PathBuf,
    targets: Vec<Dimension>,
}

impl IconJob {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn targets(&self) -> &[Dimension] {
        &self.targets
    }

    /// Runs the conversion and returns the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        self.ensure_output_dir()?;

        let source = SourceImage::open(&self.source)?;
        debug!("resizing {} to {:?}", source.dimension(), self.targets);

        let variants = variant::resize_all(&source, &self.targets);
        drop(source);

        let icon_dir = container::encode(variants)?;
        container::write_atomic(&icon_dir, &self.output)?;

        info!(
            "wrote {} with {} entries",
            self.output.display(),
            self.targets.len()
        );
        Ok(self.output.clone())
    }

    fn ensure_output_dir(&self) -> Result<()> {
        match self.output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                debug!("ensure_output_dir {}", dir.display());
                fs::create_dir_all(dir).map_err(|e| IconError::output_unwritable(dir, e))
            }
            _ => Ok(()),
        }
    }
}

/// Converts `source` into a multi-resolution icon at `output`, one entry per target.
pub fn build_icon<D: Into<Dimension>>(
    source: impl AsRef<Path>,
    output: impl AsRef<Path>,
    targets: impl IntoIterator<Item = D>,
) -> Result<PathBuf> {
    IconBuilder::new()
        .with_source(source.as_ref())
        .with_output(output.as_ref())
        .with_target_dimensions(targets)
        .build()?
        .run()
}

/// Builds the default icon and reports the outcome on a single line.
pub fn create_icon() -> bool {
    report(IconBuilder::new().build().and_then(|job| job.run()))
}

fn report(outcome: Result<PathBuf>) -> bool {
    match outcome {
        Ok(path) => {
            println!("Icon successfully created at: {}", path.display());
            true
        }
        Err(e) => {
            println!("Error creating icon: {e}");
            false
        }
    }
}
