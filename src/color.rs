use crate::InvalidParameter;
use cgmath::{Vector3, VectorSpace};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid color `{0}`, expected `#rrggbb`")]
pub struct ParseColorError(String);

/// Normalized RGB triple, each channel in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
  pub r: f32,
  pub g: f32,
  pub b: f32,
}

impl Rgb {
  pub fn new(r: f32, g: f32, b: f32) -> Self {
    Self { r, g, b }
  }

  pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
    Self::new(
      f32::from(r) / 255.0,
      f32::from(g) / 255.0,
      f32::from(b) / 255.0,
    )
  }

  /// Component-wise blend: `t = 0` yields `self`, `t = 1` yields `other`.
  #[must_use]
  pub fn lerp(self, other: Self, t: f32) -> Self {
    Vector3::from(self).lerp(Vector3::from(other), t).into()
  }

  pub(crate) fn validate(&self, field: &'static str) -> Result<(), InvalidParameter> {
    for channel in [self.r, self.g, self.b] {
      if !(0.0..=1.0).contains(&channel) {
        return Err(InvalidParameter {
          field,
          value: f64::from(channel),
          min: 0.0,
          max: 1.0,
        });
      }
    }
    Ok(())
  }
}

impl From<Rgb> for Vector3<f32> {
  fn from(c: Rgb) -> Self {
    Vector3::new(c.r, c.g, c.b)
  }
}

impl From<Vector3<f32>> for Rgb {
  fn from(v: Vector3<f32>) -> Self {
    Rgb::new(v.x, v.y, v.z)
  }
}

impl FromStr for Rgb {
  type Err = ParseColorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
      return Err(ParseColorError(s.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
      hex
        .get(range)
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .ok_or_else(|| ParseColorError(s.to_owned()))
    };
    Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_reference_colors() {
    let inside: Rgb = "#ff6030".parse().unwrap();
    assert_eq!(inside, Rgb::from_u8(0xff, 0x60, 0x30));
    assert!((inside.r - 1.0).abs() < 1e-6);

    let outside: Rgb = "1b3984".parse().unwrap();
    assert_eq!(outside, Rgb::from_u8(0x1b, 0x39, 0x84));
  }

  #[test]
  fn rejects_malformed_hex() {
    assert!("#ff603".parse::<Rgb>().is_err());
    assert!("#ff60301".parse::<Rgb>().is_err());
    assert!("#gg6030".parse::<Rgb>().is_err());
    assert!("".parse::<Rgb>().is_err());
  }

  #[test]
  fn lerp_hits_both_endpoints() {
    let a = Rgb::new(1.0, 0.0, 0.0);
    let b = Rgb::new(0.0, 0.0, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgb::new(0.5, 0.0, 0.5));
  }

  #[test]
  fn out_of_range_channel_fails_validation() {
    assert!(Rgb::new(0.0, 0.0, 1.0).validate("c").is_ok());
    assert!(Rgb::new(-0.1, 0.0, 1.0).validate("c").is_err());
    assert!(Rgb::new(0.0, 1.1, 1.0).validate("c").is_err());
  }
}
