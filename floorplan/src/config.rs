// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use std::fmt;

use floorplan_view2d::ZoomLimits;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Default multiplicative zoom step per wheel event.
pub const DEFAULT_ZOOM_STEP: f64 = 1.02;

/// What closing the details overlay does to the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseBehavior {
    /// Only the overlay closes; the apartment stays selected and highlighted.
    #[default]
    KeepSelection,
    /// Closing the overlay also clears the selection.
    ClearSelection,
}

/// Whether panning is constrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanBounds {
    /// The scene may be dragged arbitrarily far away.
    #[default]
    Unbounded,
    /// Some part of the scene bounds always stays inside the view.
    KeepSceneVisible,
}

/// Size of the stage in screen units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Default for ViewSize {
    fn default() -> Self {
        floorplan_scene::reference::VIEW_SIZE.into()
    }
}

impl From<Size> for ViewSize {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl From<ViewSize> for Size {
    fn from(size: ViewSize) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Inclusive zoom range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    /// Smallest scale.
    pub min: f64,
    /// Largest scale.
    pub max: f64,
}

impl ZoomRange {
    /// Viewport limits for this range, or `None` if a bound is non-finite or
    /// not positive.
    #[must_use]
    pub fn limits(self) -> Option<ZoomLimits> {
        ZoomLimits::new(self.min, self.max)
    }
}

/// Tunables of the viewport controller.
///
/// Every field has a default, so `{}` is a valid JSON configuration and
/// yields the reference behavior: a 1.02 zoom step, a 1000×600 stage, no
/// zoom limits, no pan clamping, and a selection that survives closing the
/// overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Multiplicative zoom factor per wheel event.
    pub zoom_step: f64,
    /// Stage size.
    pub view_size: ViewSize,
    /// Optional zoom range.
    pub zoom_limits: Option<ZoomRange>,
    /// Pan clamping.
    pub pan_bounds: PanBounds,
    /// Effect of closing the overlay on the selection.
    pub close_behavior: CloseBehavior,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            view_size: ViewSize::default(),
            zoom_limits: None,
            pan_bounds: PanBounds::default(),
            close_behavior: CloseBehavior::default(),
        }
    }
}

impl ControllerConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }
        let ViewSize { width, height } = self.view_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::ViewSize { width, height });
        }
        if let Some(range) = self.zoom_limits {
            if range.limits().is_none() {
                return Err(ConfigError::ZoomLimits {
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

/// Error returned for an unusable controller configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// The zoom step must be finite and greater than one.
    ZoomStep(f64),
    /// The view size must be finite and positive.
    ViewSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// Zoom limits must be finite and positive.
    ZoomLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed controller configuration: {err}"),
            Self::ZoomStep(step) => write!(f, "zoom step {step} must be finite and > 1"),
            Self::ViewSize { width, height } => {
                write!(f, "view size {width}x{height} must be finite and positive")
            }
            Self::ZoomLimits { min, max } => {
                write!(f, "zoom limits {min}..{max} must be finite and positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
