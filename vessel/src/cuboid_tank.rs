use measurements::Length;
use measurements::Volume;

use crate::error::Result;
use crate::tank::Tank;

#[derive(Debug, Clone, PartialEq)]
pub struct CuboidTank {
  length: Length,
  width: Length,
  height: Length,
}

impl CuboidTank {
  pub fn new(length: Length, width: Length, height: Length) -> Self {
    Self { length, width, height }
  }

  pub fn length(&self) -> Length {
    self.length
  }

  pub fn width(&self) -> Length {
    self.width
  }

  fn volume_at(&self, fluid_height: Length) -> Volume {
    Volume::from_cubic_centimeters(
      self.length.as_centimeters() * self.width.as_centimeters() * fluid_height.as_centimeters(),
    )
  }
}

impl Tank for CuboidTank {
  fn height(&self) -> Length {
    self.height
  }

  fn volume(&self) -> Volume {
    self.volume_at(self.height)
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    Ok(self.volume_at(fluid_height))
  }
}

/// Two cuboids stacked on top of each other, the `lower` one usually the narrower.
#[derive(Debug, Clone, PartialEq)]
pub struct InvertedPyramidTank {
  upper: CuboidTank,
  lower: CuboidTank,
}

impl InvertedPyramidTank {
  pub fn new(upper: CuboidTank, lower: CuboidTank) -> Self {
    Self { upper, lower }
  }

  pub fn upper(&self) -> &CuboidTank {
    &self.upper
  }

  pub fn lower(&self) -> &CuboidTank {
    &self.lower
  }
}

impl Tank for InvertedPyramidTank {
  fn height(&self) -> Length {
    self.upper.height() + self.lower.height()
  }

  fn volume(&self) -> Volume {
    self.lower.volume() + self.upper.volume()
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    if fluid_height <= self.lower.height() {
      return self.lower.filled_volume(fluid_height)
    }

    Ok(self.lower.volume() + self.upper.filled_volume(fluid_height - self.lower.height())?)
  }
}
