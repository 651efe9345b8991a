use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("the {dimension} of the {shape} is undefined")]
  MissingDimension { shape: &'static str, dimension: &'static str },
  #[error("the {dimension} must be a finite, non-negative number, got {value}")]
  InvalidDimension { dimension: &'static str, value: f64 },
  #[error("no tank type specified in the configuration or the input")]
  UnresolvedShapeType,
  #[error("the top diameter must differ from the bottom diameter of a frustum")]
  DegenerateFrustum,
  #[error("invalid input: {0}")]
  InvalidInput(String),
  #[error("unknown unit '{0}'")]
  UnknownUnit(String),
  #[error("the custom table contains no rows")]
  TableEmpty,
  #[error("the custom table row at height 0 must have volume 0, got {volume}")]
  InvalidZeroRow { volume: f64 },
  #[error("invalid custom table row (height {height}, volume {volume})")]
  InvalidTableRow { height: f64, volume: f64 },
  #[error("height {height} lies outside the custom table (maximum height {max_height})")]
  NoBracketingInterval { height: f64, max_height: f64 },
  #[error("cannot compute a percentage of a zero volume")]
  DivisionByZeroVolume,
}

/// A reading that does not fit the tank; the evaluation is skipped rather than failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Warning {
  #[error("the measured height ({measured} cm) is negative")]
  NegativeMeasuredHeight { measured: f64 },
  #[error("the measured height ({measured} cm) is larger than the tank height ({tank} cm)")]
  MeasuredHeightExceedsTank { measured: f64, tank: f64 },
  #[error("the {side} limit ({limit} cm) is negative")]
  NegativeLimit { side: &'static str, limit: f64 },
  #[error("the bottom limit ({limit} cm) is larger than the tank height ({tank} cm)")]
  BottomLimitExceedsTank { limit: f64, tank: f64 },
  #[error("the top limit ({limit} cm) is larger than the tank height ({tank} cm)")]
  TopLimitExceedsTank { limit: f64, tank: f64 },
  #[error("the bottom limit ({bottom} cm) and top limit ({top} cm) leave no usable part of the tank height ({tank} cm)")]
  LimitsOverlap { bottom: f64, top: f64, tank: f64 },
}
