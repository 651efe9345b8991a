use measurements::{Length, Volume};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::tank::Tank;
use crate::unit::{LengthUnit, VolumeUnit};

/// A raw strapping table row as configured, in the configured input units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TableRow {
  pub height: f64,
  pub volume: f64,
}

impl TableRow {
  pub fn new(height: f64, volume: f64) -> Self {
    Self { height, volume }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
  height: f64,
  volume: f64,
}

/// A tank described by measured `(height, volume)` samples, interpolated linearly.
///
/// Samples are held in centimeters and cubic centimeters, sorted by height and
/// always starting at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTank {
  samples: Vec<Sample>,
}

impl CustomTank {
  pub fn new(rows: &[TableRow], length_unit: LengthUnit, volume_unit: VolumeUnit) -> Result<Self> {
    if rows.is_empty() {
      return Err(Error::TableEmpty)
    }

    let mut samples = rows.iter()
      .map(|row| {
        let valid = |v: f64| v.is_finite() && v >= 0.0;

        if !valid(row.height) || !valid(row.volume) {
          return Err(Error::InvalidTableRow { height: row.height, volume: row.volume })
        }

        Ok(Sample {
          height: length_unit.to_centimeters(row.height),
          volume: volume_unit.to_cubic_centimeters(row.volume),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    if let Some(zero) = samples.iter().find(|s| s.height == 0.0 && s.volume != 0.0) {
      return Err(Error::InvalidZeroRow { volume: zero.volume })
    }

    samples.sort_by(|a, b| a.height.total_cmp(&b.height));

    if samples.first().map_or(true, |first| first.height != 0.0) {
      samples.insert(0, Sample { height: 0.0, volume: 0.0 });
    }

    if samples.len() < 2 {
      return Err(Error::TableEmpty)
    }

    Ok(Self { samples })
  }

  pub fn samples(&self) -> impl Iterator<Item = (Length, Volume)> + '_ {
    self.samples.iter().map(|s| (Length::from_centimeters(s.height), Volume::from_cubic_centimeters(s.volume)))
  }

  fn last(&self) -> Sample {
    self.samples[self.samples.len() - 1]
  }
}

impl Tank for CustomTank {
  fn height(&self) -> Length {
    Length::from_centimeters(self.last().height)
  }

  fn volume(&self) -> Volume {
    Volume::from_cubic_centimeters(self.last().volume)
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    let max_height = self.last().height;
    let mut h = fluid_height.as_centimeters();

    // Absorb the rounding of the centimeter round trip through `Length`.
    if h > max_height && h - max_height <= max_height * 1e-12 {
      h = max_height;
    }

    let (prev, cur) = self.samples.windows(2)
      .map(|pair| (pair[0], pair[1]))
      .find(|(prev, cur)| prev.height <= h && h <= cur.height)
      .ok_or(Error::NoBracketingInterval { height: h, max_height })?;

    let span = cur.height - prev.height;

    let volume = if span == 0.0 {
      cur.volume
    } else {
      prev.volume + (h - prev.height) * (cur.volume - prev.volume) / span
    };

    Ok(Volume::from_cubic_centimeters(volume))
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  fn table(rows: &[(f64, f64)]) -> Result<CustomTank> {
    let rows = rows.iter().map(|&(h, v)| TableRow::new(h, v)).collect::<Vec<_>>();
    CustomTank::new(&rows, LengthUnit::Centimeter, VolumeUnit::CubicCentimeter)
  }

  fn cm3(tank: &CustomTank, height: f64) -> f64 {
    tank.filled_volume(Length::from_centimeters(height)).unwrap().as_cubic_centimeters()
  }

  #[test]
  fn interpolation() {
    let tank = table(&[(0.0, 0.0), (50.0, 500.0), (100.0, 1200.0)]).unwrap();

    assert_relative_eq!(tank.height().as_centimeters(), 100.0, max_relative = 1e-9);
    assert_relative_eq!(tank.volume().as_cubic_centimeters(), 1200.0, max_relative = 1e-9);
    assert_relative_eq!(cm3(&tank, 75.0), 850.0, max_relative = 1e-9);
    assert_relative_eq!(cm3(&tank, 50.0), 500.0, max_relative = 1e-9);
    assert_relative_eq!(cm3(&tank, 25.0), 250.0, max_relative = 1e-9);
    assert_relative_eq!(cm3(&tank, 100.0), 1200.0, max_relative = 1e-9);
    assert_relative_eq!(tank.filled_volume(tank.height()).unwrap().as_cubic_centimeters(), 1200.0, max_relative = 1e-9);
  }

  #[test]
  fn unsorted_without_origin() {
    let tank = table(&[(100.0, 1200.0), (50.0, 500.0)]).unwrap();
    assert_eq!(tank.samples().count(), 3);
    assert_relative_eq!(cm3(&tank, 0.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(cm3(&tank, 75.0), 850.0, max_relative = 1e-9);
  }

  #[test]
  fn repeated_origin() {
    let tank = table(&[(0.0, 0.0), (0.0, 0.0), (10.0, 100.0)]).unwrap();
    assert_eq!(cm3(&tank, 0.0), 0.0);
    assert_relative_eq!(cm3(&tank, 5.0), 50.0, max_relative = 1e-9);
  }

  #[test]
  fn units() {
    let rows = [TableRow::new(1.0, 1.0)];
    let tank = CustomTank::new(&rows, LengthUnit::Meter, VolumeUnit::Liter).unwrap();

    assert_relative_eq!(tank.height().as_centimeters(), 100.0, max_relative = 1e-9);
    assert_relative_eq!(cm3(&tank, 50.0), 500.0, max_relative = 1e-9);
  }

  #[test]
  fn invalid_tables() {
    assert_eq!(table(&[]), Err(Error::TableEmpty));
    assert_eq!(table(&[(0.0, 0.0)]), Err(Error::TableEmpty));
    assert_eq!(table(&[(0.0, 10.0), (50.0, 500.0)]), Err(Error::InvalidZeroRow { volume: 10.0 }));
    assert_eq!(table(&[(0.0, 0.0), (0.0, 5.0), (10.0, 100.0)]), Err(Error::InvalidZeroRow { volume: 5.0 }));
    assert_eq!(table(&[(10.0, 100.0), (0.0, 5.0), (0.0, 0.0)]), Err(Error::InvalidZeroRow { volume: 5.0 }));
    assert_eq!(table(&[(-1.0, 10.0)]), Err(Error::InvalidTableRow { height: -1.0, volume: 10.0 }));
  }

  #[test]
  fn above_table() {
    let tank = table(&[(50.0, 500.0)]).unwrap();
    assert_eq!(
      tank.filled_volume(Length::from_centimeters(60.0)),
      Err(Error::NoBracketingInterval { height: Length::from_centimeters(60.0).as_centimeters(), max_height: 50.0 }),
    );
  }
}
