use measurements::Volume;

use crate::error::{Error, Result};

/// A volume together with the share, in percent, it takes of some capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
  pub(crate) volume: Volume,
  pub(crate) percentage: f64,
}

impl Level {
  pub(crate) fn of(volume: Volume, capacity: Volume) -> Result<Self> {
    if capacity.as_cubic_centimeters() == 0.0 {
      return Err(Error::DivisionByZeroVolume)
    }

    Ok(Self { volume, percentage: 100.0 * (volume / capacity) })
  }

  /// The complement of `self` within `capacity`.
  pub(crate) fn remainder(&self, capacity: Volume) -> Self {
    Self { volume: capacity - self.volume, percentage: 100.0 - self.percentage }
  }

  pub fn volume(&self) -> Volume {
    self.volume
  }

  pub fn percentage(&self) -> f64 {
    self.percentage
  }
}

impl From<Level> for f64 {
  fn from(level: Level) -> Self {
    level.percentage
  }
}

impl From<Level> for Volume {
  fn from(level: Level) -> Self {
    level.volume
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn percentage() {
    let level = Level::of(Volume::from_liters(1.5), Volume::from_liters(6.0)).unwrap();
    assert_relative_eq!(level.percentage(), 25.0, max_relative = 1e-12);

    let rest = level.remainder(Volume::from_liters(6.0));
    assert_relative_eq!(rest.volume().as_liters(), 4.5, max_relative = 1e-12);
    assert_relative_eq!(f64::from(rest), 75.0, max_relative = 1e-12);
  }

  #[test]
  fn zero_capacity() {
    assert_eq!(Level::of(Volume::from_liters(0.0), Volume::from_liters(0.0)), Err(Error::DivisionByZeroVolume));
  }
}
