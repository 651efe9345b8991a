use measurements::Volume;
use serde::Serialize;

use crate::result::VolumeResult;
use crate::unit::VolumeUnit;

/// The outbound record: every volume in the output unit, everything rounded to whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReport {
  pub total_volume: i64,
  pub filled_volume: i64,
  pub empty_volume: i64,
  pub fill_percentage: i64,
  pub empty_percentage: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub usable_volume: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub usable_filled_volume: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub usable_empty_volume: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub usable_fill_percentage: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub usable_empty_percentage: Option<i64>,
}

fn round(value: f64) -> i64 {
  value.round() as i64
}

impl VolumeResult {
  pub fn report(&self, unit: VolumeUnit) -> VolumeReport {
    let volume = |volume: Volume| round(unit.value(volume));
    let usable = self.usable();

    VolumeReport {
      total_volume: volume(self.total),
      filled_volume: volume(self.filled.volume()),
      empty_volume: volume(self.empty.volume()),
      fill_percentage: round(self.filled.percentage()),
      empty_percentage: round(self.empty.percentage()),
      usable_volume: usable.map(|u| volume(u.total())),
      usable_filled_volume: usable.map(|u| volume(u.filled().volume())),
      usable_empty_volume: usable.map(|u| volume(u.empty().volume())),
      usable_fill_percentage: usable.map(|u| round(u.filled().percentage())),
      usable_empty_percentage: usable.map(|u| round(u.empty().percentage())),
    }
  }
}
