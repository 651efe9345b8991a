use std::f64::consts::PI;

use measurements::{Length, Volume};

use crate::cylinder_tank::VerticalCylinderTank;
use crate::error::{Error, Result};
use crate::tank::Tank;

/// A truncated cone standing on its `bottom` face.
///
/// The radius grows (or shrinks) linearly from `radius_bottom` at the base to `radius_top` at `height`,
/// i.e. along the similar triangles spanned by the apex of the full cone.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
  height: Length,
  radius_top: Length,
  radius_bottom: Length,
}

impl Frustum {
  pub fn new(height: Length, diameter_top: Length, diameter_bottom: Length) -> Result<Self> {
    Self::from_radii(height, diameter_top / 2.0, diameter_bottom / 2.0)
  }

  pub(crate) fn from_radii(height: Length, radius_top: Length, radius_bottom: Length) -> Result<Self> {
    if radius_top == radius_bottom {
      return Err(Error::DegenerateFrustum)
    }

    Ok(Self { height, radius_top, radius_bottom })
  }

  pub fn radius_top(&self) -> Length {
    self.radius_top
  }

  pub fn radius_bottom(&self) -> Length {
    self.radius_bottom
  }

  fn radius_at(&self, fluid_height: f64) -> f64 {
    let height = self.height.as_centimeters();
    let rb = self.radius_bottom.as_centimeters();

    if height == 0.0 {
      return rb
    }

    rb + (self.radius_top.as_centimeters() - rb) * fluid_height / height
  }

  fn volume_at(&self, fluid_height: f64) -> Volume {
    let rb = self.radius_bottom.as_centimeters();
    let r = self.radius_at(fluid_height);

    // The liquid is itself a frustum, from the bottom face up to the surface.
    Volume::from_cubic_centimeters(PI / 3.0 * fluid_height * (r.powi(2) + r * rb + rb.powi(2)))
  }
}

impl Tank for Frustum {
  fn height(&self) -> Length {
    self.height
  }

  fn volume(&self) -> Volume {
    self.volume_at(self.height.as_centimeters())
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    Ok(self.volume_at(fluid_height.as_centimeters()))
  }
}

/// A cylinder of radius `radius_bottom` with a cone on top narrowing to `radius_top`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeTopTank {
  cylinder: VerticalCylinderTank,
  cone: Frustum,
}

impl ConeTopTank {
  pub fn new(cone_height: Length, cylinder_height: Length, diameter_top: Length, diameter_bottom: Length) -> Result<Self> {
    let radius_bottom = diameter_bottom / 2.0;

    Ok(Self {
      cylinder: VerticalCylinderTank::from_radius(radius_bottom, cylinder_height),
      cone: Frustum::from_radii(cone_height, diameter_top / 2.0, radius_bottom)?,
    })
  }

  pub fn cylinder(&self) -> &VerticalCylinderTank {
    &self.cylinder
  }

  pub fn cone(&self) -> &Frustum {
    &self.cone
  }
}

impl Tank for ConeTopTank {
  fn height(&self) -> Length {
    self.cylinder.height() + self.cone.height()
  }

  fn volume(&self) -> Volume {
    self.cylinder.volume() + self.cone.volume()
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    if fluid_height <= self.cylinder.height() {
      return self.cylinder.filled_volume(fluid_height)
    }

    Ok(self.cylinder.volume() + self.cone.filled_volume(fluid_height - self.cylinder.height())?)
  }
}

/// A cone widening from `radius_bottom` to `radius_top`, with a cylinder of radius `radius_top` on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeBottomTank {
  cone: Frustum,
  cylinder: VerticalCylinderTank,
}

impl ConeBottomTank {
  pub fn new(cone_height: Length, cylinder_height: Length, diameter_top: Length, diameter_bottom: Length) -> Result<Self> {
    let radius_top = diameter_top / 2.0;

    Ok(Self {
      cone: Frustum::from_radii(cone_height, radius_top, diameter_bottom / 2.0)?,
      cylinder: VerticalCylinderTank::from_radius(radius_top, cylinder_height),
    })
  }

  pub fn cone(&self) -> &Frustum {
    &self.cone
  }

  pub fn cylinder(&self) -> &VerticalCylinderTank {
    &self.cylinder
  }
}

impl Tank for ConeBottomTank {
  fn height(&self) -> Length {
    self.cone.height() + self.cylinder.height()
  }

  fn volume(&self) -> Volume {
    self.cone.volume() + self.cylinder.volume()
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    if fluid_height <= self.cone.height() {
      return self.cone.filled_volume(fluid_height)
    }

    Ok(self.cone.volume() + self.cylinder.filled_volume(fluid_height - self.cone.height())?)
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
  fn degenerate_frustum() {
    assert_eq!(Frustum::new(cm(10.0), cm(20.0), cm(20.0)), Err(Error::DegenerateFrustum));
    assert_eq!(ConeTopTank::new(cm(10.0), cm(50.0), cm(20.0), cm(20.0)).unwrap_err(), Error::DegenerateFrustum);
  }

  #[test]
  fn frustum() {
    let frustum = Frustum::new(cm(30.0), cm(20.0), cm(10.0)).unwrap();
    let expected = PI / 3.0 * 30.0 * (100.0 + 50.0 + 25.0);
    assert_relative_eq!(frustum.volume().as_cubic_centimeters(), expected, max_relative = 1e-9);

    assert_relative_eq!(frustum.filled_volume(cm(0.0)).unwrap().as_cubic_centimeters(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(frustum.filled_volume(cm(30.0)).unwrap().as_cubic_centimeters(), expected, max_relative = 1e-9);
  }

  #[test]
  fn pointed_cone() {
    // Apex at the bottom.
    let cone = Frustum::new(cm(30.0), cm(20.0), cm(0.0)).unwrap();
    let half = cone.filled_volume(cm(15.0)).unwrap().as_cubic_centimeters();
    assert_relative_eq!(half, PI / 3.0 * 15.0 * 25.0, max_relative = 1e-9);
  }

  #[test]
  fn cone_top() {
    let tank = ConeTopTank::new(cm(20.0), cm(100.0), cm(10.0), cm(40.0)).unwrap();
    let cylinder = PI * 400.0 * 100.0;
    let cone = PI / 3.0 * 20.0 * (25.0 + 100.0 + 400.0);

    assert_relative_eq!(tank.height().as_centimeters(), 120.0, max_relative = 1e-9);
    assert_relative_eq!(tank.volume().as_cubic_centimeters(), cylinder + cone, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(cm(50.0)).unwrap().as_cubic_centimeters(), cylinder / 2.0, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(cm(120.0)).unwrap().as_cubic_centimeters(), cylinder + cone, max_relative = 1e-9);
  }

  #[test]
  fn cone_bottom() {
    let tank = ConeBottomTank::new(cm(30.0), cm(100.0), cm(60.0), cm(10.0)).unwrap();
    let cone = PI / 3.0 * 30.0 * (900.0 + 150.0 + 25.0);
    let cylinder = PI * 900.0 * 100.0;

    assert_relative_eq!(tank.volume().as_cubic_centimeters(), cone + cylinder, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(cm(30.0)).unwrap().as_cubic_centimeters(), cone, max_relative = 1e-9);
    assert_relative_eq!(
      tank.filled_volume(cm(80.0)).unwrap().as_cubic_centimeters(),
      cone + PI * 900.0 * 50.0,
      max_relative = 1e-9,
    );
  }
}
