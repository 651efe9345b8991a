use log::error;
use serde::Deserialize;
use serde_json::Value;
use vessel::{Evaluation, Reading, TankConfig, VolumeEngine};

use crate::message::{property, set_property};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
  pub input_field: String,
  pub output_field: String,
  #[serde(flatten)]
  pub tank: TankConfig,
}

impl Default for NodeConfig {
  fn default() -> Self {
    Self { input_field: "payload".into(), output_field: "payload".into(), tank: TankConfig::default() }
  }
}

/// Reads a level from every message and replaces it with the tank volumes.
#[derive(Debug)]
pub struct Node {
  input_field: String,
  output_field: String,
  engine: VolumeEngine,
}

impl Node {
  pub fn new(config: NodeConfig) -> vessel::Result<Self> {
    Ok(Self { input_field: config.input_field, output_field: config.output_field, engine: VolumeEngine::new(config.tank)? })
  }

  /// Handles a single message, returning the message to send on, if any.
  pub fn handle(&self, mut message: Value) -> Option<Value> {
    let input = match property(&message, &self.input_field) {
      Some(input) => input,
      None => {
        error!("The input cannot be read from msg.{}", self.input_field);
        return None
      },
    };

    let report = match Reading::try_from(input).and_then(|reading| self.engine.evaluate(&reading)) {
      Ok(Evaluation::Computed(report)) => report,
      Ok(Evaluation::Skipped(_)) => return None,
      Err(err) => {
        error!("Cannot calculate volume: {}", err);
        return None
      },
    };

    let report = match serde_json::to_value(report) {
      Ok(report) => report,
      Err(err) => {
        error!("Cannot serialize volume report: {}", err);
        return None
      },
    };

    if let Err(err) = set_property(&mut message, &self.output_field, report) {
      error!("The output msg.{} field can not be set: {}", self.output_field, err);
      return None
    }

    Some(message)
  }
}
