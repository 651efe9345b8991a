//! Length and volume units used by level instrumentation.
//!
//! Every conversion goes through the `measurements` quantities, so lengths
//! are canonically compared in centimeters and volumes in cubic centimeters.

use std::fmt;
use std::str::FromStr;

use measurements::{Length, Volume};
use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum LengthUnit {
  Millimeter,
  #[default]
  Centimeter,
  Meter,
  Kilometer,
  Inch,
  Foot,
  Yard,
}

impl LengthUnit {
  pub const ALL: [LengthUnit; 7] = [
    LengthUnit::Millimeter,
    LengthUnit::Centimeter,
    LengthUnit::Meter,
    LengthUnit::Kilometer,
    LengthUnit::Inch,
    LengthUnit::Foot,
    LengthUnit::Yard,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      LengthUnit::Millimeter => "mm",
      LengthUnit::Centimeter => "cm",
      LengthUnit::Meter => "m",
      LengthUnit::Kilometer => "km",
      LengthUnit::Inch => "in",
      LengthUnit::Foot => "ft",
      LengthUnit::Yard => "yd",
    }
  }

  /// Interprets `value` as a length expressed in this unit.
  pub fn length(self, value: f64) -> Length {
    match self {
      LengthUnit::Millimeter => Length::from_millimeters(value),
      LengthUnit::Centimeter => Length::from_centimeters(value),
      LengthUnit::Meter => Length::from_meters(value),
      LengthUnit::Kilometer => Length::from_kilometers(value),
      LengthUnit::Inch => Length::from_inches(value),
      LengthUnit::Foot => Length::from_feet(value),
      LengthUnit::Yard => Length::from_yards(value),
    }
  }

  /// Expresses `length` in this unit.
  pub fn value(self, length: Length) -> f64 {
    match self {
      LengthUnit::Millimeter => length.as_millimeters(),
      LengthUnit::Centimeter => length.as_centimeters(),
      LengthUnit::Meter => length.as_meters(),
      LengthUnit::Kilometer => length.as_kilometers(),
      LengthUnit::Inch => length.as_inches(),
      LengthUnit::Foot => length.as_feet(),
      LengthUnit::Yard => length.as_yards(),
    }
  }

  pub fn to_centimeters(self, value: f64) -> f64 {
    if self == LengthUnit::Centimeter {
      return value
    }

    self.length(value).as_centimeters()
  }

  pub fn from_centimeters(self, centimeters: f64) -> f64 {
    if self == LengthUnit::Centimeter {
      return centimeters
    }

    self.value(Length::from_centimeters(centimeters))
  }
}

impl FromStr for LengthUnit {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    LengthUnit::ALL.iter()
      .copied()
      .find(|unit| unit.as_str() == s)
      .ok_or_else(|| Error::UnknownUnit(s.to_owned()))
  }
}

impl TryFrom<String> for LengthUnit {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl fmt::Display for LengthUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum VolumeUnit {
  CubicMillimeter,
  #[default]
  CubicCentimeter,
  Milliliter,
  Liter,
  Kiloliter,
  CubicMeter,
  CubicInch,
  CubicFoot,
  CubicYard,
  Gallon,
}

impl VolumeUnit {
  pub const ALL: [VolumeUnit; 10] = [
    VolumeUnit::CubicMillimeter,
    VolumeUnit::CubicCentimeter,
    VolumeUnit::Milliliter,
    VolumeUnit::Liter,
    VolumeUnit::Kiloliter,
    VolumeUnit::CubicMeter,
    VolumeUnit::CubicInch,
    VolumeUnit::CubicFoot,
    VolumeUnit::CubicYard,
    VolumeUnit::Gallon,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      VolumeUnit::CubicMillimeter => "mm3",
      VolumeUnit::CubicCentimeter => "cm3",
      VolumeUnit::Milliliter => "ml",
      VolumeUnit::Liter => "l",
      VolumeUnit::Kiloliter => "kl",
      VolumeUnit::CubicMeter => "m3",
      VolumeUnit::CubicInch => "in3",
      VolumeUnit::CubicFoot => "ft3",
      VolumeUnit::CubicYard => "yd3",
      VolumeUnit::Gallon => "gal",
    }
  }

  /// Interprets `value` as a volume expressed in this unit.
  pub fn volume(self, value: f64) -> Volume {
    match self {
      VolumeUnit::CubicMillimeter => Volume::from_cubic_centimeters(value / 1000.0),
      VolumeUnit::CubicCentimeter => Volume::from_cubic_centimeters(value),
      VolumeUnit::Milliliter => Volume::from_milliliters(value),
      VolumeUnit::Liter => Volume::from_liters(value),
      VolumeUnit::Kiloliter => Volume::from_liters(value * 1000.0),
      VolumeUnit::CubicMeter => Volume::from_cubic_meters(value),
      VolumeUnit::CubicInch => Volume::from_cubic_inches(value),
      VolumeUnit::CubicFoot => Volume::from_cubic_feet(value),
      VolumeUnit::CubicYard => Volume::from_cubic_yards(value),
      VolumeUnit::Gallon => Volume::from_gallons(value),
    }
  }

  /// Expresses `volume` in this unit.
  pub fn value(self, volume: Volume) -> f64 {
    match self {
      VolumeUnit::CubicMillimeter => volume.as_cubic_centimeters() * 1000.0,
      VolumeUnit::CubicCentimeter => volume.as_cubic_centimeters(),
      VolumeUnit::Milliliter => volume.as_milliliters(),
      VolumeUnit::Liter => volume.as_liters(),
      VolumeUnit::Kiloliter => volume.as_liters() / 1000.0,
      VolumeUnit::CubicMeter => volume.as_cubic_meters(),
      VolumeUnit::CubicInch => volume.as_cubic_inches(),
      VolumeUnit::CubicFoot => volume.as_cubic_feet(),
      VolumeUnit::CubicYard => volume.as_cubic_yards(),
      VolumeUnit::Gallon => volume.as_gallons(),
    }
  }

  pub fn to_cubic_centimeters(self, value: f64) -> f64 {
    if self == VolumeUnit::CubicCentimeter {
      return value
    }

    self.volume(value).as_cubic_centimeters()
  }

  pub fn from_cubic_centimeters(self, cubic_centimeters: f64) -> f64 {
    if self == VolumeUnit::CubicCentimeter {
      return cubic_centimeters
    }

    self.value(Volume::from_cubic_centimeters(cubic_centimeters))
  }
}

impl FromStr for VolumeUnit {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    VolumeUnit::ALL.iter()
      .copied()
      .find(|unit| unit.as_str() == s)
      .ok_or_else(|| Error::UnknownUnit(s.to_owned()))
  }
}

impl TryFrom<String> for VolumeUnit {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl fmt::Display for VolumeUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn parse() {
    assert_eq!("mm".parse::<LengthUnit>(), Ok(LengthUnit::Millimeter));
    assert_eq!("gal".parse::<VolumeUnit>(), Ok(VolumeUnit::Gallon));
    assert_eq!("furlong".parse::<LengthUnit>(), Err(Error::UnknownUnit("furlong".into())));
    assert_eq!("cm".parse::<VolumeUnit>(), Err(Error::UnknownUnit("cm".into())));
  }

  #[test]
  fn lengths() {
    assert_relative_eq!(LengthUnit::Millimeter.to_centimeters(25.0), 2.5, max_relative = 1e-12);
    assert_relative_eq!(LengthUnit::Meter.to_centimeters(1.5), 150.0, max_relative = 1e-12);
    assert_relative_eq!(LengthUnit::Inch.to_centimeters(1.0), 2.54, max_relative = 1e-12);
    assert_relative_eq!(LengthUnit::Foot.from_centimeters(30.48), 1.0, max_relative = 1e-12);
  }

  #[test]
  fn volumes() {
    assert_relative_eq!(VolumeUnit::Liter.from_cubic_centimeters(6000.0), 6.0, max_relative = 1e-12);
    assert_relative_eq!(VolumeUnit::CubicMillimeter.to_cubic_centimeters(2500.0), 2.5, max_relative = 1e-12);
    assert_relative_eq!(VolumeUnit::CubicMillimeter.from_cubic_centimeters(1.0), 1000.0, max_relative = 1e-12);
    assert_relative_eq!(VolumeUnit::CubicMeter.to_cubic_centimeters(1.0), 1_000_000.0, max_relative = 1e-12);
    assert_relative_eq!(VolumeUnit::Kiloliter.from_cubic_centimeters(2_000_000.0), 2.0, max_relative = 1e-12);
    assert_relative_eq!(VolumeUnit::Gallon.to_cubic_centimeters(1.0), 3785.411784, max_relative = 1e-6);
  }

  #[test]
  fn defaults() {
    assert_eq!(LengthUnit::default(), LengthUnit::Centimeter);
    assert_eq!(VolumeUnit::default(), VolumeUnit::CubicCentimeter);
  }

  #[test]
  fn identity() {
    for unit in LengthUnit::ALL {
      assert_relative_eq!(unit.from_centimeters(unit.to_centimeters(42.0)), 42.0, max_relative = 1e-9);
    }

    for unit in VolumeUnit::ALL {
      assert_relative_eq!(unit.from_cubic_centimeters(unit.to_cubic_centimeters(42.0)), 42.0, max_relative = 1e-9);
    }
  }
}
