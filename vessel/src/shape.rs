use std::fmt;
use std::str::FromStr;

use measurements::{Length, Volume};
use serde::Deserialize;

use crate::capsule_tank::{HorizontalCapsuleTank, VerticalCapsuleTank};
use crate::cone_tank::{ConeBottomTank, ConeTopTank, Frustum};
use crate::cuboid_tank::{CuboidTank, InvertedPyramidTank};
use crate::custom_tank::CustomTank;
use crate::cylinder_tank::{HorizontalCylinderTank, VerticalCylinderTank};
use crate::elliptical_tank::HorizontalEllipticalTank;
use crate::error::{Error, Result};
use crate::oval_tank::OvalTank;
use crate::sphere_tank::SphereTank;
use crate::tank::Tank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ShapeType {
  HorizontalCylinder,
  VerticalCylinder,
  RectangularPrism,
  ConeTop,
  ConeBottom,
  InvertedPyramid,
  HorizontalCapsule,
  VerticalCapsule,
  HorizontalOval,
  VerticalOval,
  Frustum,
  Sphere,
  HorizontalElliptical,
  CustomTable,
}

impl ShapeType {
  pub const ALL: [ShapeType; 14] = [
    ShapeType::HorizontalCylinder,
    ShapeType::VerticalCylinder,
    ShapeType::RectangularPrism,
    ShapeType::ConeTop,
    ShapeType::ConeBottom,
    ShapeType::InvertedPyramid,
    ShapeType::HorizontalCapsule,
    ShapeType::VerticalCapsule,
    ShapeType::HorizontalOval,
    ShapeType::VerticalOval,
    ShapeType::Frustum,
    ShapeType::Sphere,
    ShapeType::HorizontalElliptical,
    ShapeType::CustomTable,
  ];

  /// The token used in configuration and input messages.
  pub fn as_str(self) -> &'static str {
    match self {
      ShapeType::HorizontalCylinder => "horiz_cylin",
      ShapeType::VerticalCylinder => "vert_cylin",
      ShapeType::RectangularPrism => "rect_prism",
      ShapeType::ConeTop => "cone_top",
      ShapeType::ConeBottom => "cone_bottom",
      ShapeType::InvertedPyramid => "inv_piram",
      ShapeType::HorizontalCapsule => "horiz_caps",
      ShapeType::VerticalCapsule => "vert_caps",
      ShapeType::HorizontalOval => "horiz_oval",
      ShapeType::VerticalOval => "vert_oval",
      ShapeType::Frustum => "frustrum",
      ShapeType::Sphere => "sphere",
      ShapeType::HorizontalElliptical => "horiz_ellip",
      ShapeType::CustomTable => "custom_table",
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      ShapeType::HorizontalCylinder => "horizontal cylinder",
      ShapeType::VerticalCylinder => "vertical cylinder",
      ShapeType::RectangularPrism => "rectangular prism",
      ShapeType::ConeTop => "cone top",
      ShapeType::ConeBottom => "cone bottom",
      ShapeType::InvertedPyramid => "inverted pyramid",
      ShapeType::HorizontalCapsule => "horizontal capsule",
      ShapeType::VerticalCapsule => "vertical capsule",
      ShapeType::HorizontalOval => "horizontal oval",
      ShapeType::VerticalOval => "vertical oval",
      ShapeType::Frustum => "frustum",
      ShapeType::Sphere => "sphere",
      ShapeType::HorizontalElliptical => "horizontal elliptical",
      ShapeType::CustomTable => "custom table",
    }
  }
}

impl FromStr for ShapeType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s == "frustum" {
      return Ok(ShapeType::Frustum)
    }

    ShapeType::ALL.iter()
      .copied()
      .find(|shape_type| shape_type.as_str() == s)
      .ok_or_else(|| Error::InvalidInput(format!("unsupported tank type '{}'", s)))
  }
}

impl TryFrom<String> for ShapeType {
  type Error = Error;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl fmt::Display for ShapeType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Tank dimensions, already converted to `Length`.
///
/// Only the dimensions a shape needs have to be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeParameters {
  pub diameter: Option<Length>,
  pub length: Option<Length>,
  pub width: Option<Length>,
  pub height: Option<Length>,
  pub length2: Option<Length>,
  pub width2: Option<Length>,
  pub height2: Option<Length>,
  pub cone_height: Option<Length>,
  pub cylinder_height: Option<Length>,
  pub diameter_top: Option<Length>,
  pub diameter_bottom: Option<Length>,
}

struct Dimensions<'p> {
  params: &'p ShapeParameters,
  shape: &'static str,
}

impl Dimensions<'_> {
  fn require(&self, dimension: &'static str, value: fn(&ShapeParameters) -> Option<Length>) -> Result<Length> {
    let length = value(self.params).ok_or(Error::MissingDimension { shape: self.shape, dimension })?;

    let centimeters = length.as_centimeters();
    if !centimeters.is_finite() || centimeters < 0.0 {
      return Err(Error::InvalidDimension { dimension, value: centimeters })
    }

    Ok(length)
  }

  fn diameter(&self) -> Result<Length> {
    self.require("diameter", |p| p.diameter)
  }

  fn length(&self) -> Result<Length> {
    self.require("length", |p| p.length)
  }

  fn width(&self) -> Result<Length> {
    self.require("width", |p| p.width)
  }

  fn height(&self) -> Result<Length> {
    self.require("height", |p| p.height)
  }

  fn cone(&self) -> Result<(Length, Length, Length, Length)> {
    Ok((
      self.require("cone height", |p| p.cone_height)?,
      self.require("cylinder height", |p| p.cylinder_height)?,
      self.require("diameter top", |p| p.diameter_top)?,
      self.require("diameter bottom", |p| p.diameter_bottom)?,
    ))
  }
}

/// Every supported tank geometry, dispatched through [`Tank`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
  HorizontalCylinder(HorizontalCylinderTank),
  VerticalCylinder(VerticalCylinderTank),
  RectangularPrism(CuboidTank),
  ConeTop(ConeTopTank),
  ConeBottom(ConeBottomTank),
  InvertedPyramid(InvertedPyramidTank),
  HorizontalCapsule(HorizontalCapsuleTank),
  VerticalCapsule(VerticalCapsuleTank),
  HorizontalOval(OvalTank),
  VerticalOval(OvalTank),
  Frustum(Frustum),
  Sphere(SphereTank),
  HorizontalElliptical(HorizontalEllipticalTank),
  CustomTable(CustomTank),
}

impl Shape {
  /// Builds the tank of the given type, checking that every dimension it needs is present.
  ///
  /// `table` is only consulted for [`ShapeType::CustomTable`].
  pub fn new(shape_type: ShapeType, params: &ShapeParameters, table: Option<CustomTank>) -> Result<Self> {
    let dims = Dimensions { params, shape: shape_type.name() };

    Ok(match shape_type {
      ShapeType::HorizontalCylinder => Shape::HorizontalCylinder(HorizontalCylinderTank::new(dims.diameter()?, dims.length()?)),
      ShapeType::VerticalCylinder => Shape::VerticalCylinder(VerticalCylinderTank::new(dims.diameter()?, dims.height()?)),
      ShapeType::RectangularPrism => Shape::RectangularPrism(CuboidTank::new(dims.length()?, dims.width()?, dims.height()?)),
      ShapeType::ConeTop => {
        let (cone_height, cylinder_height, diameter_top, diameter_bottom) = dims.cone()?;
        Shape::ConeTop(ConeTopTank::new(cone_height, cylinder_height, diameter_top, diameter_bottom)?)
      },
      ShapeType::ConeBottom => {
        let (cone_height, cylinder_height, diameter_top, diameter_bottom) = dims.cone()?;
        Shape::ConeBottom(ConeBottomTank::new(cone_height, cylinder_height, diameter_top, diameter_bottom)?)
      },
      ShapeType::InvertedPyramid => {
        let upper = CuboidTank::new(dims.length()?, dims.width()?, dims.height()?);
        let lower = CuboidTank::new(
          dims.require("length 2", |p| p.length2)?,
          dims.require("width 2", |p| p.width2)?,
          dims.require("height 2", |p| p.height2)?,
        );
        Shape::InvertedPyramid(InvertedPyramidTank::new(upper, lower))
      },
      ShapeType::HorizontalCapsule => Shape::HorizontalCapsule(HorizontalCapsuleTank::new(dims.diameter()?, dims.length()?)),
      ShapeType::VerticalCapsule => Shape::VerticalCapsule(VerticalCapsuleTank::new(dims.diameter()?, dims.length()?)),
      ShapeType::HorizontalOval => Shape::HorizontalOval(OvalTank::new(dims.width()?, dims.length()?, dims.height()?)),
      ShapeType::VerticalOval => Shape::VerticalOval(OvalTank::new(dims.width()?, dims.length()?, dims.height()?)),
      ShapeType::Frustum => Shape::Frustum(Frustum::new(
        dims.height()?,
        dims.require("diameter top", |p| p.diameter_top)?,
        dims.require("diameter bottom", |p| p.diameter_bottom)?,
      )?),
      ShapeType::Sphere => Shape::Sphere(SphereTank::new(dims.diameter()?)),
      ShapeType::HorizontalElliptical => Shape::HorizontalElliptical(HorizontalEllipticalTank::new(dims.diameter()?, dims.length()?)),
      ShapeType::CustomTable => Shape::CustomTable(table.ok_or(Error::TableEmpty)?),
    })
  }

  pub fn shape_type(&self) -> ShapeType {
    match self {
      Shape::HorizontalCylinder(_) => ShapeType::HorizontalCylinder,
      Shape::VerticalCylinder(_) => ShapeType::VerticalCylinder,
      Shape::RectangularPrism(_) => ShapeType::RectangularPrism,
      Shape::ConeTop(_) => ShapeType::ConeTop,
      Shape::ConeBottom(_) => ShapeType::ConeBottom,
      Shape::InvertedPyramid(_) => ShapeType::InvertedPyramid,
      Shape::HorizontalCapsule(_) => ShapeType::HorizontalCapsule,
      Shape::VerticalCapsule(_) => ShapeType::VerticalCapsule,
      Shape::HorizontalOval(_) => ShapeType::HorizontalOval,
      Shape::VerticalOval(_) => ShapeType::VerticalOval,
      Shape::Frustum(_) => ShapeType::Frustum,
      Shape::Sphere(_) => ShapeType::Sphere,
      Shape::HorizontalElliptical(_) => ShapeType::HorizontalElliptical,
      Shape::CustomTable(_) => ShapeType::CustomTable,
    }
  }

  fn tank(&self) -> &dyn Tank {
    match self {
      Shape::HorizontalCylinder(tank) => tank,
      Shape::VerticalCylinder(tank) => tank,
      Shape::RectangularPrism(tank) => tank,
      Shape::ConeTop(tank) => tank,
      Shape::ConeBottom(tank) => tank,
      Shape::InvertedPyramid(tank) => tank,
      Shape::HorizontalCapsule(tank) => tank,
      Shape::VerticalCapsule(tank) => tank,
      Shape::HorizontalOval(tank) | Shape::VerticalOval(tank) => tank,
      Shape::Frustum(tank) => tank,
      Shape::Sphere(tank) => tank,
      Shape::HorizontalElliptical(tank) => tank,
      Shape::CustomTable(tank) => tank,
    }
  }
}

impl Tank for Shape {
  fn height(&self) -> Length {
    self.tank().height()
  }

  fn volume(&self) -> Volume {
    self.tank().volume()
  }

  fn filled_volume(&self, fluid_height: Length) -> Result<Volume> {
    self.tank().filled_volume(fluid_height)
  }
}
