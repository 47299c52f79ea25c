use crate::{GalaxyParameters, InvalidParameter};
use cgmath::{Vector3, VectorSpace};
use std::f32::consts::PI;

/// Uniform draw in [0, 1). All randomness used by generation comes in
/// through this seam; any `rand::Rng` qualifies via the blanket impl,
/// tests script the sequence instead.
pub trait RandomSource {
  fn uniform01(&mut self) -> f32;
}

impl<R: rand::Rng> RandomSource for R {
  fn uniform01(&mut self) -> f32 {
    self.gen::<f32>()
  }
}

/// Interleaved form of one point, for sinks binding a single vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
  pub position: [f32; 3],
  pub color: [f32; 3],
}

/// One generated point cloud: two flat buffers of length `count * 3`
/// (row stride 3) plus the pass-through point size. Never mutated after
/// creation; regeneration always builds a fresh dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyDataset {
  pub positions: Vec<f32>,
  pub colors: Vec<f32>,
  pub point_size: f32,
}

impl GalaxyDataset {
  #[must_use]
  pub fn point_count(&self) -> usize {
    self.positions.len() / 3
  }

  pub fn position_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.positions)
  }

  pub fn color_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.colors)
  }

  pub fn interleaved(&self) -> Vec<PointVertex> {
    self
      .positions
      .chunks_exact(3)
      .zip(self.colors.chunks_exact(3))
      .map(|(p, c)| PointVertex {
        position: [p[0], p[1], p[2]],
        color: [c[0], c[1], c[2]],
      })
      .collect()
  }
}

/// Computes a spiral-galaxy point cloud from validated parameters.
///
/// Radius draws are uniform over [0, radius), not over disk area, so
/// density rises toward the core; arm membership is `i % branches`.
/// Both are deliberate visual properties, not sampling artifacts.
pub fn generate<R: RandomSource>(
  params: &GalaxyParameters,
  rng: &mut R,
) -> Result<GalaxyDataset, InvalidParameter> {
  params.validate()?;

  let count = params.count as usize;
  let branches = params.branches as usize;
  let branch_count = params.branches as f32;
  let inside = Vector3::from(params.inside_color);
  let outside = Vector3::from(params.outside_color);

  let mut positions = Vec::with_capacity(count * 3);
  let mut colors = Vec::with_capacity(count * 3);

  for i in 0..count {
    let r = rng.uniform01() * params.radius;
    let spin_angle = r * params.spin;
    let branch_angle = (i % branches) as f32 / branch_count * (2.0 * PI);

    // jitter scales with radius, keeping the core tighter than the rim;
    // the power draw concentrates offsets near the arm centerline
    let (jx, jy, jz) = if params.randomness > 0.0 {
      let mut offset = || {
        let magnitude = rng.uniform01().powf(params.randomness_power);
        let sign = if rng.uniform01() < 0.5 { -1.0 } else { 1.0 };
        sign * magnitude * params.randomness * r
      };
      (offset(), offset(), offset())
    } else {
      (0.0, 0.0, 0.0)
    };

    let angle = branch_angle + spin_angle;
    let pos = Vector3::new(angle.sin() * r + jx, jy, angle.cos() * r + jz);
    positions.extend_from_slice(&[pos.x, pos.y, pos.z]);

    let color = inside.lerp(outside, r / params.radius);
    colors.extend_from_slice(&[color.x, color.y, color.z]);
  }

  log::debug!(
    "generated {count} points across {branches} branches (radius {})",
    params.radius
  );

  Ok(GalaxyDataset {
    positions,
    colors,
    point_size: params.size,
  })
}
