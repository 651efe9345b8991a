use log::{debug, warn};
use measurements::Length;

use crate::config::{Measurement, TankConfig};
use crate::custom_tank::CustomTank;
use crate::error::{Error, Result, Warning};
use crate::limits::Limits;
use crate::reading::Reading;
use crate::report::VolumeReport;
use crate::result::VolumeResult;
use crate::shape::{Shape, ShapeType};
use crate::tank::Tank;

/// Outcome of evaluating a single reading.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<T = VolumeReport> {
  Computed(T),
  /// The reading does not fit the tank, nothing is reported for it.
  Skipped(Warning),
}

impl<T> Evaluation<T> {
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Evaluation<U> {
    match self {
      Evaluation::Computed(value) => Evaluation::Computed(f(value)),
      Evaluation::Skipped(warning) => Evaluation::Skipped(warning),
    }
  }

  pub fn computed(self) -> Option<T> {
    match self {
      Evaluation::Computed(value) => Some(value),
      Evaluation::Skipped(_) => None,
    }
  }
}

/// Turns level readings into volumes for a statically configured tank.
///
/// The engine holds no state besides its configuration, so it can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct VolumeEngine {
  config: TankConfig,
  table: Option<CustomTank>,
}

impl VolumeEngine {
  pub fn new(config: TankConfig) -> Result<Self> {
    let table = if config.custom_table.is_empty() {
      None
    } else {
      Some(CustomTank::new(&config.custom_table, config.input_unit, config.input_volume_unit)?)
    };

    Ok(Self { config, table })
  }

  pub fn config(&self) -> &TankConfig {
    &self.config
  }

  /// Builds the tank described by the configuration, completed by `reading`.
  pub fn shape(&self, reading: &Reading) -> Result<Shape> {
    let shape_type = self.config.tank_type
      .or(reading.tank_type)
      .ok_or(Error::UnresolvedShapeType)?;

    let params = self.config.dimensions.or(&reading.dimensions).to_parameters(self.config.input_unit);

    let table = match (shape_type, &self.table, &reading.custom_table) {
      (ShapeType::CustomTable, Some(table), _) => Some(table.clone()),
      (ShapeType::CustomTable, None, Some(rows)) => {
        Some(CustomTank::new(rows, self.config.input_unit, self.config.input_volume_unit)?)
      },
      _ => None,
    };

    Shape::new(shape_type, &params, table)
  }

  fn limits(&self) -> Option<Limits> {
    if self.config.bottom_limit.is_none() && self.config.top_limit.is_none() {
      return None
    }

    let length = |limit: Option<f64>| self.config.input_unit.length(limit.unwrap_or_default());
    Some(Limits::new(length(self.config.bottom_limit), length(self.config.top_limit)))
  }

  /// Computes the volumes for `reading`, in canonical units.
  pub fn volumes(&self, reading: &Reading) -> Result<Evaluation<VolumeResult>> {
    let shape = self.shape(reading)?;
    let tank_height = shape.height();

    debug!("{} tank with a height of {} cm", shape.shape_type().name(), tank_height.as_centimeters());

    let measured = reading.measured_height
      .ok_or_else(|| Error::InvalidInput("no measured height in the input".into()))?;

    if !measured.is_finite() {
      return Err(Error::InvalidInput(format!("{} is not a valid height", measured)))
    }

    let measured = self.config.input_unit.length(measured);

    if measured.as_centimeters() < 0.0 {
      return Ok(Evaluation::Skipped(Warning::NegativeMeasuredHeight { measured: measured.as_centimeters() }))
    }

    if measured > tank_height {
      return Ok(Evaluation::Skipped(Warning::MeasuredHeightExceedsTank {
        measured: measured.as_centimeters(),
        tank: tank_height.as_centimeters(),
      }))
    }

    let limits = self.limits();

    if let Some(warning) = limits.as_ref().and_then(|limits| limits.check(tank_height)) {
      return Ok(Evaluation::Skipped(warning))
    }

    let fluid_height = self.fluid_height(tank_height, measured);
    debug!("fluid height is {} cm", fluid_height.as_centimeters());

    VolumeResult::compute(&shape, fluid_height, limits.as_ref()).map(Evaluation::Computed)
  }

  /// Evaluates a reading and projects the result onto the configured output unit.
  pub fn evaluate(&self, reading: &Reading) -> Result<Evaluation> {
    let evaluation = self.volumes(reading)?;

    if let Evaluation::Skipped(warning) = &evaluation {
      warn!("{}", warning);
    }

    Ok(evaluation.map(|result| result.report(self.config.output_unit)))
  }

  /// The fluid height that corresponds to `measured`, for the configured kind of sensor.
  fn fluid_height(&self, tank_height: Length, measured: Length) -> Length {
    match self.config.measurement {
      Measurement::Above => tank_height - measured,
      Measurement::Fluid => measured,
    }
  }
}
