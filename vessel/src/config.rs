use serde::{Deserialize, Deserializer};

use crate::custom_tank::TableRow;
use crate::shape::{ShapeParameters, ShapeType};
use crate::unit::{LengthUnit, VolumeUnit};

/// Raw tank dimensions in the configured input unit.
///
/// Used both for the static configuration and for per-message overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TankDimensions {
  pub diameter: Option<f64>,
  pub length: Option<f64>,
  pub width: Option<f64>,
  pub height: Option<f64>,
  pub length2: Option<f64>,
  pub width2: Option<f64>,
  pub height2: Option<f64>,
  pub cone_height: Option<f64>,
  pub cylinder_height: Option<f64>,
  pub diameter_top: Option<f64>,
  pub diameter_bottom: Option<f64>,
}

/// A configured dimension of `0` counts as not configured, so `fallback` is used instead.
fn configured(value: Option<f64>, fallback: Option<f64>) -> Option<f64> {
  value.filter(|v| *v != 0.0 && !v.is_nan()).or(fallback)
}

impl TankDimensions {
  /// Fills every dimension missing (or zero) in `self` from `overrides`.
  ///
  /// Dimensions configured with a non-zero value always win.
  pub fn or(&self, overrides: &TankDimensions) -> TankDimensions {
    TankDimensions {
      diameter: configured(self.diameter, overrides.diameter),
      length: configured(self.length, overrides.length),
      width: configured(self.width, overrides.width),
      height: configured(self.height, overrides.height),
      length2: configured(self.length2, overrides.length2),
      width2: configured(self.width2, overrides.width2),
      height2: configured(self.height2, overrides.height2),
      cone_height: configured(self.cone_height, overrides.cone_height),
      cylinder_height: configured(self.cylinder_height, overrides.cylinder_height),
      diameter_top: configured(self.diameter_top, overrides.diameter_top),
      diameter_bottom: configured(self.diameter_bottom, overrides.diameter_bottom),
    }
  }

  pub fn to_parameters(&self, unit: LengthUnit) -> ShapeParameters {
    let length = |value: Option<f64>| value.map(|v| unit.length(v));

    ShapeParameters {
      diameter: length(self.diameter),
      length: length(self.length),
      width: length(self.width),
      height: length(self.height),
      length2: length(self.length2),
      width2: length(self.width2),
      height2: length(self.height2),
      cone_height: length(self.cone_height),
      cylinder_height: length(self.cylinder_height),
      diameter_top: length(self.diameter_top),
      diameter_bottom: length(self.diameter_bottom),
    }
  }
}

/// What the level sensor reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
  /// The height of the air gap above the liquid.
  Above,
  /// The depth of the liquid itself.
  #[default]
  Fluid,
}

/// Reads a tank type token, where `none` means it has to be supplied per message.
pub(crate) fn deserialize_tank_type<'de, D>(deserializer: D) -> Result<Option<ShapeType>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<String>::deserialize(deserializer)? {
    None => Ok(None),
    Some(token) if token.is_empty() || token == "none" => Ok(None),
    Some(token) => token.parse().map(Some).map_err(serde::de::Error::custom),
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TankConfig {
  /// Unit of all dimensions, limits, measured heights and table heights.
  pub input_unit: LengthUnit,
  /// Unit of the custom table volumes.
  pub input_volume_unit: VolumeUnit,
  pub output_unit: VolumeUnit,
  #[serde(deserialize_with = "deserialize_tank_type")]
  pub tank_type: Option<ShapeType>,
  pub measurement: Measurement,
  #[serde(flatten)]
  pub dimensions: TankDimensions,
  pub bottom_limit: Option<f64>,
  pub top_limit: Option<f64>,
  pub custom_table: Vec<TableRow>,
}

impl Default for TankConfig {
  fn default() -> Self {
    Self {
      input_unit: LengthUnit::Centimeter,
      input_volume_unit: VolumeUnit::CubicCentimeter,
      output_unit: VolumeUnit::Liter,
      tank_type: None,
      measurement: Measurement::default(),
      dimensions: TankDimensions::default(),
      bottom_limit: None,
      top_limit: None,
      custom_table: Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn deserialize() {
    let config: TankConfig = serde_json::from_value(json!({
      "input_unit": "mm",
      "output_unit": "gal",
      "tank_type": "vert_cylin",
      "measurement": "above",
      "diameter": 500,
      "height": 0,
      "bottom_limit": 10,
      "custom_table": [{ "height": 10, "volume": 2 }],
    })).unwrap();

    assert_eq!(config.input_unit, LengthUnit::Millimeter);
    assert_eq!(config.input_volume_unit, VolumeUnit::CubicCentimeter);
    assert_eq!(config.output_unit, VolumeUnit::Gallon);
    assert_eq!(config.tank_type, Some(ShapeType::VerticalCylinder));
    assert_eq!(config.measurement, Measurement::Above);
    assert_eq!(config.dimensions.diameter, Some(500.0));
    assert_eq!(config.dimensions.height, Some(0.0));
    assert_eq!(config.bottom_limit, Some(10.0));
    assert_eq!(config.top_limit, None);
    assert_eq!(config.custom_table, vec![TableRow::new(10.0, 2.0)]);
  }

  #[test]
  fn no_tank_type() {
    let config: TankConfig = serde_json::from_value(json!({ "tank_type": "none" })).unwrap();
    assert_eq!(config.tank_type, None);
    assert_eq!(config, TankConfig::default());

    assert!(serde_json::from_value::<TankConfig>(json!({ "tank_type": "pyramid" })).is_err());
    assert!(serde_json::from_value::<TankConfig>(json!({ "output_unit": "barrel" })).is_err());
  }

  #[test]
  fn zero_means_absent() {
    let configured = TankDimensions { diameter: Some(0.0), height: Some(100.0), ..Default::default() };
    let overrides = TankDimensions { diameter: Some(20.0), height: Some(50.0), width: Some(0.0), ..Default::default() };

    let merged = configured.or(&overrides);
    assert_eq!(merged.diameter, Some(20.0));
    assert_eq!(merged.height, Some(100.0));
    assert_eq!(merged.width, Some(0.0));
    assert_eq!(merged.length, None);
  }
}
