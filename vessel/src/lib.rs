//! Volume and fill level of liquid tanks from a level sensor reading.
//!
//! A [`VolumeEngine`] is configured once with the tank geometry and units and
//! then turns every [`Reading`] into a [`VolumeReport`].

mod capsule_tank;
mod cone_tank;
mod config;
mod cuboid_tank;
mod custom_tank;
mod cylinder_tank;
mod elliptical_tank;
mod engine;
mod error;
mod level;
mod limits;
mod oval_tank;
mod reading;
mod report;
mod result;
mod shape;
mod sphere_tank;
mod tank;
mod unit;

pub use capsule_tank::{HorizontalCapsuleTank, VerticalCapsuleTank};
pub use cone_tank::{ConeBottomTank, ConeTopTank, Frustum};
pub use config::{Measurement, TankConfig, TankDimensions};
pub use cuboid_tank::{CuboidTank, InvertedPyramidTank};
pub use custom_tank::{CustomTank, TableRow};
pub use cylinder_tank::{HorizontalCylinderTank, VerticalCylinderTank};
pub use elliptical_tank::HorizontalEllipticalTank;
pub use engine::{Evaluation, VolumeEngine};
pub use error::{Error, Result, Warning};
pub use level::Level;
pub use limits::Limits;
pub use oval_tank::OvalTank;
pub use reading::Reading;
pub use report::VolumeReport;
pub use result::{UsableVolume, VolumeResult};
pub use shape::{Shape, ShapeParameters, ShapeType};
pub use sphere_tank::SphereTank;
pub use tank::Tank;
pub use unit::{LengthUnit, VolumeUnit};

pub use measurements::{Length, Volume};
