use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::cylinder_tank::segment_area;
use crate::error::Result;
use crate::sphere_tank::spherical_cap;
use crate::tank::Tank;

fn capsule_volume(radius: Length, length: Length) -> Volume {
  let r = radius.as_centimeters();
  Volume::from_cubic_centimeters(PI * r.powi(2) * (4.0 / 3.0 * r + length.as_centimeters()))
}

/// A horizontal cylinder of `length` closed by two hemispherical ends.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalCapsuleTank {
  radius: Length,
  length: Length,
}

impl HorizontalCapsuleTank {
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

impl Tank for HorizontalCapsuleTank {
  fn height(&self) -> Length {
    self.radius * 2.0
  }

  fn volume(&self) -> Volume {
    capsule_volume(self.radius, self.length)
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    let r = self.radius.as_centimeters();
    let h = fluid_height.as_centimeters();

    // Both hemispherical ends together form one spherical cap.
    Ok(Volume::from_cubic_centimeters(segment_area(r, h) * self.length.as_centimeters() + spherical_cap(r, h)))
  }
}

/// An upright cylinder of `length` closed by two hemispherical ends.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalCapsuleTank {
  radius: Length,
  length: Length,
}

impl VerticalCapsuleTank {
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

impl Tank for VerticalCapsuleTank {
  fn height(&self) -> Length {
    self.length + self.radius * 2.0
  }

  fn volume(&self) -> Volume {
    capsule_volume(self.radius, self.length)
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    let r = self.radius.as_centimeters();
    let l = self.length.as_centimeters();
    let h = fluid_height.as_centimeters();

    let hemisphere = 2.0 / 3.0 * PI * r.powi(3);

    let volume = if h < r {
      spherical_cap(r, h)
    } else if h < r + l {
      hemisphere + PI * r.powi(2) * (h - r)
    } else {
      // Slice of the upper hemisphere between its equator and the surface.
      let z = h - r - l;
      hemisphere + PI * r.powi(2) * l + PI / 12.0 * (3.0 * (2.0 * r).powi(2) * z - 4.0 * z.powi(3))
    };

    Ok(Volume::from_cubic_centimeters(volume))
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  fn cm(value: f64) -> Length {
    Length::from_centimeters(value)
  }

  #[test]
  fn horizontal() {
    let tank = HorizontalCapsuleTank::new(cm(20.0), cm(100.0));
    let total = PI * 100.0 * (40.0 / 3.0 + 100.0);

    assert_relative_eq!(tank.volume().as_cubic_centimeters(), total, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(cm(10.0)).unwrap().as_cubic_centimeters(), total / 2.0, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(cm(20.0)).unwrap().as_cubic_centimeters(), total, max_relative = 1e-9);
  }

  #[test]
  fn vertical() {
    let tank = VerticalCapsuleTank::new(cm(20.0), cm(100.0));
    let hemisphere = 2.0 / 3.0 * PI * 1000.0;

    assert_relative_eq!(tank.height().as_centimeters(), 120.0, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(cm(10.0)).unwrap().as_cubic_centimeters(), hemisphere, max_relative = 1e-9);
    assert_relative_eq!(
      tank.filled_volume(cm(60.0)).unwrap().as_cubic_centimeters(),
      hemisphere + PI * 100.0 * 50.0,
      max_relative = 1e-9,
    );
    assert_relative_eq!(
      tank.filled_volume(cm(120.0)).unwrap().as_cubic_centimeters(),
      tank.volume().as_cubic_centimeters(),
      max_relative = 1e-9,
    );
  }
}
