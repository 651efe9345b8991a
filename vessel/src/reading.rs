use serde::Deserialize;
use serde_json::Value;

use crate::config::{deserialize_tank_type, TankDimensions};
use crate::custom_tank::TableRow;
use crate::error::{Error, Result};
use crate::shape::ShapeType;

/// A single level reading, as received in an input message.
///
/// Either a bare number (the measured height) or an object which may also
/// carry tank dimensions, the tank type and a custom table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reading {
  #[serde(rename = "measuredHeight")]
  pub measured_height: Option<f64>,
  #[serde(rename = "tankType", deserialize_with = "deserialize_tank_type")]
  pub tank_type: Option<ShapeType>,
  #[serde(rename = "customTable")]
  pub custom_table: Option<Vec<TableRow>>,
  #[serde(flatten)]
  pub dimensions: TankDimensions,
}

impl Reading {
  pub fn new(measured_height: f64) -> Self {
    Self { measured_height: Some(measured_height), ..Default::default() }
  }
}

impl TryFrom<&Value> for Reading {
  type Error = Error;

  fn try_from(value: &Value) -> Result<Self> {
    match value {
      Value::Number(number) => {
        number.as_f64()
          .map(Reading::new)
          .ok_or_else(|| Error::InvalidInput(format!("{} is not a valid height", number)))
      },
      Value::String(s) => {
        s.trim().parse::<f64>()
          .ok()
          .filter(|height| height.is_finite())
          .map(Reading::new)
          .ok_or_else(|| Error::InvalidInput(format!("'{}' is not a valid height", s)))
      },
      Value::Object(_) => Reading::deserialize(value).map_err(|err| Error::InvalidInput(err.to_string())),
      _ => Err(Error::InvalidInput("the input can only be a number or an object".into())),
    }
  }
}
