use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::error::Result;
use crate::tank::Tank;

/// A tank with an elliptical cross-section of `width` by `height`, extruded over `length`.
///
/// Horizontal and vertical oval tanks share the same formulas.
#[derive(Debug, Clone, PartialEq)]
pub struct OvalTank {
  width: Length,
  length: Length,
  height: Length,
}

impl OvalTank {
  pub fn new(width: Length, length: Length, height: Length) -> Self {
    Self { width, length, height }
  }

  pub fn width(&self) -> Length {
    self.width
  }

  pub fn length(&self) -> Length {
    self.length
  }

  fn prism(&self) -> f64 {
    self.width.as_centimeters() * self.length.as_centimeters() * self.height.as_centimeters() / 4.0
  }
}

impl Tank for OvalTank {
  fn height(&self) -> Length {
    self.height
  }

  fn volume(&self) -> Volume {
    Volume::from_cubic_centimeters(PI * self.prism())
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    let height = self.height.as_centimeters();

    if height == 0.0 {
      return Ok(Volume::from_cubic_centimeters(0.0))
    }

    let ratio = fluid_height.as_centimeters() / height;
    let x = (1.0 - 2.0 * ratio).clamp(-1.0, 1.0);
    let root = (4.0 * ratio - 4.0 * ratio.powi(2)).max(0.0).sqrt();

    Ok(Volume::from_cubic_centimeters(self.prism() * (x.acos() - x * root)))
  }
}
