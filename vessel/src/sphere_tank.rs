use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::error::Result;
use crate::tank::Tank;

/// Volume of the cap of a sphere with radius `r` cut off at height `h`, in cubic centimeters.
pub(crate) fn spherical_cap(r: f64, h: f64) -> f64 {
  PI * h.powi(2) / 3.0 * (3.0 * r - h)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SphereTank {
  radius: Length,
}

impl SphereTank {
  pub fn new(diameter: Length) -> Self {
    Self { radius: diameter / 2.0 }
  }

  pub fn radius(&self) -> Length {
    self.radius
  }
}

impl Tank for SphereTank {
  fn height(&self) -> Length {
    self.radius * 2.0
  }

  fn volume(&self) -> Volume {
    Volume::from_cubic_centimeters(4.0 / 3.0 * PI * self.radius.as_centimeters().powi(3))
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    let r = self.radius.as_centimeters();
    Ok(Volume::from_cubic_centimeters(spherical_cap(r, fluid_height.as_centimeters())))
  }
}
