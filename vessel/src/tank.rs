use measurements::{Length, Volume};

use crate::error::Result;
use crate::level::Level;

pub trait Tank {
  /// Vertical extent of the tank interior.
  fn height(&self) -> Length;

  fn volume(&self) -> Volume;

  /// Volume of liquid standing `fluid_height` above the lowest point of the tank.
  fn filled_volume(&self, fluid_height: Length) -> Result<Volume>;

  fn level(&self, fluid_height: Length) -> Result<Level> {
    Level::of(self.filled_volume(fluid_height)?, self.volume())
  }
}
