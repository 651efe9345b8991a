use measurements::{Length, Volume};

use crate::error::Result;
use crate::level::Level;
use crate::limits::Limits;
use crate::tank::Tank;

/// The part of a tank between its bottom and top limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsableVolume {
  pub(crate) total: Volume,
  pub(crate) filled: Level,
  pub(crate) empty: Level,
}

impl UsableVolume {
  fn compute<T: Tank + ?Sized>(tank: &T, filled: Volume, limits: &Limits) -> Result<Self> {
    let (minimum, maximum) = limits.volumes(tank)?;
    let total = maximum - minimum;

    let usable_filled = (filled.as_cubic_centimeters().min(maximum.as_cubic_centimeters()) - minimum.as_cubic_centimeters())
      .clamp(0.0, total.as_cubic_centimeters().max(0.0));

    let filled = Level::of(Volume::from_cubic_centimeters(usable_filled), total)?;

    Ok(Self { total, filled, empty: filled.remainder(total) })
  }

  pub fn total(&self) -> Volume {
    self.total
  }

  pub fn filled(&self) -> Level {
    self.filled
  }

  pub fn empty(&self) -> Level {
    self.empty
  }
}

/// Volumes and percentages of a tank filled up to some height, in canonical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeResult {
  pub(crate) total: Volume,
  pub(crate) filled: Level,
  pub(crate) empty: Level,
  pub(crate) usable: Option<UsableVolume>,
}

impl VolumeResult {
  pub fn compute<T: Tank + ?Sized>(tank: &T, fluid_height: Length, limits: Option<&Limits>) -> Result<Self> {
    let total = tank.volume();
    let filled = tank.level(fluid_height)?;

    let usable = limits.map(|limits| UsableVolume::compute(tank, filled.volume(), limits)).transpose()?;

    Ok(Self { total, filled, empty: filled.remainder(total), usable })
  }

  pub fn total(&self) -> Volume {
    self.total
  }

  pub fn filled(&self) -> Level {
    self.filled
  }

  pub fn empty(&self) -> Level {
    self.empty
  }

  pub fn usable(&self) -> Option<&UsableVolume> {
    self.usable.as_ref()
  }
}

#[cfg(test)]
mod tests {
  use std::f64::consts::PI;

  use approx::assert_relative_eq;

  use super::*;
  use crate::cylinder_tank::VerticalCylinderTank;
  use crate::error::Error;

  fn cm(value: f64) -> Length {
    Length::from_centimeters(value)
  }

  #[test]
  fn without_limits() {
    let tank = VerticalCylinderTank::new(cm(10.0), cm(20.0));
    let result = VolumeResult::compute(&tank, cm(5.0), None).unwrap();

    assert_relative_eq!(result.total().as_cubic_centimeters(), 500.0 * PI, max_relative = 1e-9);
    assert_relative_eq!(result.filled().volume().as_cubic_centimeters(), 125.0 * PI, max_relative = 1e-9);
    assert_relative_eq!(result.empty().volume().as_cubic_centimeters(), 375.0 * PI, max_relative = 1e-9);
    assert_relative_eq!(result.filled().percentage(), 25.0, max_relative = 1e-9);
    assert_relative_eq!(result.empty().percentage(), 75.0, max_relative = 1e-9);
    assert!(result.usable().is_none());
  }

  #[test]
  fn with_limits() {
    let tank = VerticalCylinderTank::new(cm(10.0), cm(100.0));
    let limits = Limits::new(cm(10.0), cm(10.0));

    let result = VolumeResult::compute(&tank, cm(50.0), Some(&limits)).unwrap();
    let usable = result.usable().unwrap();

    assert_relative_eq!(usable.total().as_cubic_centimeters(), 2000.0 * PI, max_relative = 1e-9);
    assert_relative_eq!(usable.filled().volume().as_cubic_centimeters(), 1000.0 * PI, max_relative = 1e-9);
    assert_relative_eq!(usable.empty().volume().as_cubic_centimeters(), 1000.0 * PI, max_relative = 1e-9);
    assert_relative_eq!(usable.filled().percentage(), 50.0, max_relative = 1e-9);
  }

  #[test]
  fn usable_volume_is_clamped() {
    let tank = VerticalCylinderTank::new(cm(10.0), cm(100.0));
    let limits = Limits::new(cm(10.0), cm(10.0));

    let below = VolumeResult::compute(&tank, cm(5.0), Some(&limits)).unwrap();
    assert_eq!(below.usable().unwrap().filled().volume().as_cubic_centimeters(), 0.0);
    assert_eq!(below.usable().unwrap().filled().percentage(), 0.0);

    let above = VolumeResult::compute(&tank, cm(95.0), Some(&limits)).unwrap();
    assert_relative_eq!(above.usable().unwrap().filled().percentage(), 100.0, max_relative = 1e-9);
    assert_relative_eq!(above.usable().unwrap().empty().volume().as_cubic_centimeters(), 0.0, epsilon = 1e-6);
  }

  #[test]
  fn empty_tank() {
    let tank = VerticalCylinderTank::new(cm(10.0), cm(0.0));
    assert_eq!(VolumeResult::compute(&tank, cm(0.0), None), Err(Error::DivisionByZeroVolume));
  }
}
