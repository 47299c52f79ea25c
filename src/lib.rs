pub mod color;
pub mod generate;
pub mod sink;
pub mod state;

use crate::color::Rgb;

/// Raised when a parameter falls outside its documented range. Generation
/// never clamps; the caller corrects and retries.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("parameter `{field}` = {value} is outside {min}..={max}")]
pub struct InvalidParameter {
  pub field: &'static str,
  pub value: f64,
  pub min: f64,
  pub max: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalaxyParameters {
  pub count: u32,
  pub size: f32,
  pub radius: f32,
  pub branches: u32,
  pub spin: f32,
  pub randomness: f32,
  pub randomness_power: f32,
  pub inside_color: Rgb,
  pub outside_color: Rgb,
}

impl Default for GalaxyParameters {
  fn default() -> Self {
    Self {
      count: 100_000,
      size: 0.01,
      radius: 5.0,
      branches: 3,
      spin: 1.0,
      randomness: 0.2,
      randomness_power: 3.0,
      inside_color: Rgb::from_u8(0xff, 0x60, 0x30),
      outside_color: Rgb::from_u8(0x1b, 0x39, 0x84),
    }
  }
}

impl GalaxyParameters {
  pub fn validate(&self) -> Result<(), InvalidParameter> {
    int_range("count", self.count, 1, 1_000_000)?;
    float_range("size", self.size, 0.001, 0.1)?;
    // radius has an exclusive lower bound: a zero-extent galaxy would
    // divide by zero in the color ramp
    if !(self.radius > 0.0 && self.radius <= 20.0) {
      return Err(InvalidParameter {
        field: "radius",
        value: f64::from(self.radius),
        min: 0.0,
        max: 20.0,
      });
    }
    int_range("branches", self.branches, 2, 20)?;
    float_range("spin", self.spin, -5.0, 5.0)?;
    float_range("randomness", self.randomness, 0.0, 2.0)?;
    float_range("randomness_power", self.randomness_power, 1.0, 10.0)?;
    self.inside_color.validate("inside_color")?;
    self.outside_color.validate("outside_color")?;
    Ok(())
  }
}

fn int_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), InvalidParameter> {
  if !(min..=max).contains(&value) {
    return Err(InvalidParameter {
      field,
      value: f64::from(value),
      min: f64::from(min),
      max: f64::from(max),
    });
  }
  Ok(())
}

fn float_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), InvalidParameter> {
  // NaN compares false on both sides and is rejected with the rest
  if !(min..=max).contains(&value) {
    return Err(InvalidParameter {
      field,
      value: f64::from(value),
      min: f64::from(min),
      max: f64::from(max),
    });
  }
  Ok(())
}
