//! YAML declaration of snap points.
//!
//! ```yaml
//! version: 1
//! viewport: 400.0
//! scroll:
//!   - kind: irregular
//!     value: 100.0
//!     alignment: center
//!     applicable_range: 20
//!   - kind: repeated
//!     offset: 0
//!     interval: 50
//!     start: 0
//!     end: 1000
//! zoom:
//!   - kind: irregular
//!     value: 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::collection::SnapPointCollection;
use crate::error::{Error, Result};
use crate::snap_point::{
    Dimension, RepeatedScrollSnapPoint, RepeatedZoomSnapPoint, ScrollSnapPoint, SnapPoint,
    ZoomSnapPoint,
};

/// A declared scroll snap point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollSnapPointConfig {
    /// Single point.
    Irregular {
        /// Position.
        value: f64,
        /// Viewport alignment.
        #[serde(default)]
        alignment: Alignment,
        /// Attraction radius. Omitted means mandatory.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        applicable_range: Option<f64>,
    },
    /// Arithmetic sequence.
    Repeated {
        /// Position of one point of the sequence.
        offset: f64,
        /// Distance between points.
        interval: f64,
        /// Lower bound.
        start: f64,
        /// Upper bound.
        end: f64,
        /// Viewport alignment.
        #[serde(default)]
        alignment: Alignment,
        /// Attraction radius. Omitted means mandatory.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        applicable_range: Option<f64>,
    },
}

impl ScrollSnapPointConfig {
    /// Validate into a snap point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for invalid parameters.
    pub fn to_snap_point(&self) -> Result<SnapPoint> {
        Ok(match *self {
            Self::Irregular { value, alignment, applicable_range: None } => {
                ScrollSnapPoint::new(value, alignment)?.into()
            }
            Self::Irregular { value, alignment, applicable_range: Some(range) } => {
                ScrollSnapPoint::with_applicable_range(value, range, alignment)?.into()
            }
            Self::Repeated { offset, interval, start, end, alignment, applicable_range: None } => {
                RepeatedScrollSnapPoint::new(offset, interval, start, end, alignment)?.into()
            }
            Self::Repeated {
                offset,
                interval,
                start,
                end,
                alignment,
                applicable_range: Some(range),
            } => RepeatedScrollSnapPoint::with_applicable_range(
                offset, interval, start, end, range, alignment,
            )?
            .into(),
        })
    }
}

/// A declared zoom snap point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZoomSnapPointConfig {
    /// Single zoom factor.
    Irregular {
        /// Zoom factor.
        value: f64,
        /// Attraction radius. Omitted means mandatory.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        applicable_range: Option<f64>,
    },
    /// Arithmetic sequence of zoom factors.
    Repeated {
        /// Factor of one point of the sequence.
        offset: f64,
        /// Distance between points.
        interval: f64,
        /// Lower bound.
        start: f64,
        /// Upper bound.
        end: f64,
        /// Attraction radius. Omitted means mandatory.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        applicable_range: Option<f64>,
    },
}

impl ZoomSnapPointConfig {
    /// Validate into a snap point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for invalid parameters.
    pub fn to_snap_point(&self) -> Result<SnapPoint> {
        Ok(match *self {
            Self::Irregular { value, applicable_range: None } => ZoomSnapPoint::new(value)?.into(),
            Self::Irregular { value, applicable_range: Some(range) } => {
                ZoomSnapPoint::with_applicable_range(value, range)?.into()
            }
            Self::Repeated { offset, interval, start, end, applicable_range: None } => {
                RepeatedZoomSnapPoint::new(offset, interval, start, end)?.into()
            }
            Self::Repeated { offset, interval, start, end, applicable_range: Some(range) } => {
                RepeatedZoomSnapPoint::with_applicable_range(offset, interval, start, end, range)?
                    .into()
            }
        })
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Viewport size applied to the scroll collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<f64>,

    /// Scroll snap points.
    #[serde(default)]
    pub scroll: Vec<ScrollSnapPointConfig>,

    /// Zoom snap points.
    #[serde(default)]
    pub zoom: Vec<ZoomSnapPointConfig>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self { version: default_version(), viewport: None, scroll: Vec::new(), zoom: Vec::new() }
    }
}

impl Config {
    /// Creates a new configuration with no snap points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| Error::ConfigParse { line: 0, message: e.to_string() })
    }

    /// Build the resolved scroll collection, with the viewport applied.
    ///
    /// # Errors
    ///
    /// Returns the first invalid declaration or rejected insertion.
    pub fn scroll_collection(&self) -> Result<SnapPointCollection> {
        let mut collection = SnapPointCollection::new(Dimension::Scroll);
        if let Some(viewport) = self.viewport {
            collection.update_viewport(viewport)?;
        }
        for declaration in &self.scroll {
            collection.insert(declaration.to_snap_point()?)?;
        }
        Ok(collection)
    }

    /// Build the resolved zoom collection.
    ///
    /// # Errors
    ///
    /// Returns the first invalid declaration or rejected insertion.
    pub fn zoom_collection(&self) -> Result<SnapPointCollection> {
        let mut collection = SnapPointCollection::new(Dimension::Zoom);
        for declaration in &self.zoom {
            collection.insert(declaration.to_snap_point()?)?;
        }
        Ok(collection)
    }

    /// Build the collection of `dimension`.
    ///
    /// # Errors
    ///
    /// See [`Config::scroll_collection`].
    pub fn collection(&self, dimension: Dimension) -> Result<SnapPointCollection> {
        match dimension {
            Dimension::Scroll => self.scroll_collection(),
            Dimension::Zoom => self.zoom_collection(),
        }
    }
}
