use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::error::Result;
use crate::tank::Tank;

/// Area of the circular segment of radius `r` filled up to `h`, all in centimeters.
pub(crate) fn segment_area(r: f64, h: f64) -> f64 {
  if r <= 0.0 {
    return 0.0
  }

  let angle = 2.0 * ((r - h) / r).clamp(-1.0, 1.0).acos();
  0.5 * r.powi(2) * (angle - angle.sin())
}

/// A cylinder lying on its side.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalCylinderTank {
  radius: Length,
  length: Length,
}

impl HorizontalCylinderTank {
  pub fn new(diameter: Length, length: Length) -> Self {
    Self { radius: diameter / 2.0, length }
  }

  pub fn radius(&self) -> Length {
    self.radius
  }

  pub fn length(&self) -> Length {
    self.length
  }
}

impl Tank for HorizontalCylinderTank {
  fn height(&self) -> Length {
    self.radius * 2.0
  }

  fn volume(&self) -> Volume {
    let r = self.radius.as_centimeters();
    Volume::from_cubic_centimeters(PI * r.powi(2) * self.length.as_centimeters())
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    let area = segment_area(self.radius.as_centimeters(), fluid_height.as_centimeters());
    Ok(Volume::from_cubic_centimeters(area * self.length.as_centimeters()))
  }
}

/// An upright cylinder with a flat bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalCylinderTank {
  radius: Length,
  height: Length,
}

impl VerticalCylinderTank {
  pub fn new(diameter: Length, height: Length) -> Self {
    Self { radius: diameter / 2.0, height }
  }

  pub(crate) fn from_radius(radius: Length, height: Length) -> Self {
    Self { radius, height }
  }

  pub fn radius(&self) -> Length {
    self.radius
  }

  pub(crate) fn volume_at(&self, fluid_height: Length) -> Volume {
    let r = self.radius.as_centimeters();
    Volume::from_cubic_centimeters(PI * r.powi(2) * fluid_height.as_centimeters())
  }
}

impl Tank for VerticalCylinderTank {
  fn height(&self) -> Length {
    self.height
  }

  fn volume(&self) -> Volume {
    self.volume_at(self.height)
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    Ok(self.volume_at(fluid_height))
  }
}
