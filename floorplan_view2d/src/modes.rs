// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for panning relative to optional world bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the view may move/zoom freely.
    ///
    /// This is the default so that a freshly created viewport behaves like
    /// a plain draggable, scalable stage.
    #[default]
    None,
    /// Clamp so that the view never moves completely outside the world bounds.
    ///
    /// When world bounds are present, this mode keeps at least some portion of
    /// them visible if possible.
    KeepSomeVisible,
}

/// Direction of a single discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Multiply the current scale by the step factor.
    In,
    /// Divide the current scale by the step factor.
    Out,
}

impl ZoomDirection {
    /// Derives the zoom direction from a vertical wheel delta.
    ///
    /// A positive delta (wheel rolled towards the user) zooms out; zero and
    /// negative deltas zoom in.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::Out } else { Self::In }
    }

    /// Applies one step of `factor` to `zoom` in this direction.
    #[must_use]
    pub fn apply(self, zoom: f64, factor: f64) -> f64 {
        match self {
            Self::In => zoom * factor,
            Self::Out => zoom / factor,
        }
    }
}

/// Inclusive range of allowed zoom factors.
///
/// Both bounds are finite and positive, and `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates a range from two bounds given in either order.
    ///
    /// Returns `None` if either bound is non-finite or not positive.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(a) && usable(b)) {
            return None;
        }
        Some(Self {
            min: a.min(b),
            max: a.max(b),
        })
    }

    /// Smallest allowed zoom factor.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Largest allowed zoom factor.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into this range.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::{ZoomDirection, ZoomLimits};

    #[test]
    fn wheel_delta_sign_picks_direction() {
        assert_eq!(ZoomDirection::from_wheel_delta(100.0), ZoomDirection::Out);
        assert_eq!(ZoomDirection::from_wheel_delta(-100.0), ZoomDirection::In);
        assert_eq!(ZoomDirection::from_wheel_delta(0.0), ZoomDirection::In);
    }

    #[test]
    fn out_divides_instead_of_multiplying_by_inverse() {
        assert_eq!(ZoomDirection::Out.apply(1.0, 1.02), 1.0 / 1.02);
        assert_eq!(ZoomDirection::In.apply(2.0, 1.02), 2.0 * 1.02);
    }

    #[test]
    fn limits_are_normalized() {
        let limits = ZoomLimits::new(4.0, 0.25).unwrap();
        assert_eq!(limits.min(), 0.25);
        assert_eq!(limits.max(), 4.0);
        assert_eq!(limits.clamp(10.0), 4.0);
        assert_eq!(limits.clamp(0.1), 0.25);
    }

    #[test]
    fn unusable_limits_are_rejected() {
        assert_eq!(ZoomLimits::new(f64::NAN, 2.0), None);
        assert_eq!(ZoomLimits::new(0.5, f64::INFINITY), None);
        assert_eq!(ZoomLimits::new(0.0, 2.0), None);
        assert_eq!(ZoomLimits::new(-1.0, 2.0), None);
    }
}
