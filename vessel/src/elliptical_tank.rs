use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::cylinder_tank::segment_area;
use crate::error::Result;
use crate::tank::Tank;

/// Head depth relative to the diameter for ASME 2:1 elliptical heads.
const HEAD_RATIO: f64 = 0.5;

/// A horizontal cylinder of `length` closed by two 2:1 elliptical heads.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalEllipticalTank {
  radius: Length,
  length: Length,
}

impl HorizontalEllipticalTank {
  pub fn new(diameter: Length, length: Length) -> Self {
    Self { radius: diameter / 2.0, length }
  }

  pub fn radius(&self) -> Length {
    self.radius
  }

  pub fn length(&self) -> Length {
    self.length
  }

  fn volume_at(&self, fluid_height: f64) -> Volume {
    let r = self.radius.as_centimeters();
    let diameter = 2.0 * r;

    let head = if diameter > 0.0 {
      let ratio = fluid_height / diameter;
      diameter.powi(3) * HEAD_RATIO * PI / 12.0 * (3.0 * ratio.powi(2) - 2.0 * ratio.powi(3))
    } else {
      0.0
    };

    Volume::from_cubic_centimeters(2.0 * head + segment_area(r, fluid_height) * self.length.as_centimeters())
  }
}

impl Tank for HorizontalEllipticalTank {
  fn height(&self) -> Length {
    self.radius * 2.0
  }

  fn volume(&self) -> Volume {
    self.volume_at(2.0 * self.radius.as_centimeters())
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    Ok(self.volume_at(fluid_height.as_centimeters()))
  }
}
