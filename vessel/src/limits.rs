use measurements::{Length, Volume};

use crate::error::{Result, Warning};
use crate::tank::Tank;

/// Dead zones at the bottom and the top of a tank.
///
/// The `bottom` limit is measured upwards from the lowest point of the tank,
/// the `top` limit downwards from its highest point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
  bottom: Length,
  top: Length,
}

impl Limits {
  pub fn new(bottom: Length, top: Length) -> Self {
    Self { bottom, top }
  }

  pub fn bottom(&self) -> Length {
    self.bottom
  }

  pub fn top(&self) -> Length {
    self.top
  }

  /// Checks that the limits leave a usable band within `tank_height`.
  pub fn check(&self, tank_height: Length) -> Option<Warning> {
    let tank = tank_height.as_centimeters();
    let bottom = self.bottom.as_centimeters();
    let top = self.top.as_centimeters();

    if bottom < 0.0 {
      return Some(Warning::NegativeLimit { side: "bottom", limit: bottom })
    }

    if top < 0.0 {
      return Some(Warning::NegativeLimit { side: "top", limit: top })
    }

    if bottom > tank {
      return Some(Warning::BottomLimitExceedsTank { limit: bottom, tank })
    }

    if top > tank {
      return Some(Warning::TopLimitExceedsTank { limit: top, tank })
    }

    if bottom + top >= tank {
      return Some(Warning::LimitsOverlap { bottom, top, tank })
    }

    None
  }

  /// The volumes held at the bottom and at the top limit.
  pub fn volumes<T: Tank + ?Sized>(&self, tank: &T) -> Result<(Volume, Volume)> {
    let minimum = if self.bottom.as_centimeters() == 0.0 {
      Volume::from_cubic_centimeters(0.0)
    } else {
      tank.filled_volume(self.bottom)?
    };

    let maximum = if self.top.as_centimeters() == 0.0 {
      tank.volume()
    } else {
      tank.filled_volume(tank.height() - self.top)?
    };

    Ok((minimum, maximum))
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;
  use crate::cylinder_tank::VerticalCylinderTank;

  fn cm(value: f64) -> Length {
    Length::from_centimeters(value)
  }

  #[test]
  fn check() {
    assert_eq!(Limits::new(cm(10.0), cm(10.0)).check(cm(100.0)), None);
    assert!(matches!(Limits::new(cm(110.0), cm(0.0)).check(cm(100.0)), Some(Warning::BottomLimitExceedsTank { .. })));
    assert!(matches!(Limits::new(cm(0.0), cm(110.0)).check(cm(100.0)), Some(Warning::TopLimitExceedsTank { .. })));
    assert!(matches!(Limits::new(cm(50.0), cm(50.0)).check(cm(100.0)), Some(Warning::LimitsOverlap { .. })));
    assert_eq!(
      Limits::new(cm(-20.0), cm(0.0)).check(cm(100.0)),
      Some(Warning::NegativeLimit { side: "bottom", limit: -20.0 }),
    );
    assert_eq!(
      Limits::new(cm(10.0), cm(-5.0)).check(cm(100.0)),
      Some(Warning::NegativeLimit { side: "top", limit: -5.0 }),
    );
  }

  #[test]
  fn volumes() {
    let tank = VerticalCylinderTank::new(cm(10.0), cm(100.0));

    let (minimum, maximum) = Limits::new(cm(10.0), cm(10.0)).volumes(&tank).unwrap();
    assert_relative_eq!(minimum.as_cubic_centimeters(), 250.0 * std::f64::consts::PI, max_relative = 1e-9);
    assert_relative_eq!(maximum.as_cubic_centimeters(), 2250.0 * std::f64::consts::PI, max_relative = 1e-9);

    let (minimum, maximum) = Limits::new(cm(0.0), cm(0.0)).volumes(&tank).unwrap();
    assert_eq!(minimum.as_cubic_centimeters(), 0.0);
    assert_eq!(maximum, tank.volume());
  }
}
