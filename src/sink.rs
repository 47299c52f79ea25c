use crate::generate::GalaxyDataset;

/// Presentation seam between generation and whatever draws the points.
/// The state machine in `state` moves handles between these two calls;
/// everything else about rendering lives behind the implementor.
pub trait RenderSink {
  type Handle;

  /// Builds a drawable point cloud from the dataset's buffers and point
  /// size, returning the handle used to dispose it later.
  fn present(&mut self, dataset: &GalaxyDataset) -> Self::Handle;

  /// Releases the resources behind a previously presented dataset.
  fn dispose(&mut self, handle: Self::Handle);
}

/// Sink for headless runs: counts live datasets and logs traffic
/// instead of touching a GPU.
#[derive(Debug, Default)]
pub struct HeadlessSink {
  next_handle: u64,
  live: usize,
  presented_points: u64,
}

impl HeadlessSink {
  #[must_use]
  pub fn live_datasets(&self) -> usize {
    self.live
  }

  #[must_use]
  pub fn presented_points(&self) -> u64 {
    self.presented_points
  }
}

impl RenderSink for HeadlessSink {
  type Handle = u64;

  fn present(&mut self, dataset: &GalaxyDataset) -> u64 {
    let handle = self.next_handle;
    self.next_handle += 1;
    self.live += 1;
    self.presented_points += dataset.point_count() as u64;
    log::info!(
      "presented dataset {handle}: {} points, point size {}",
      dataset.point_count(),
      dataset.point_size
    );
    handle
  }

  fn dispose(&mut self, handle: u64) {
    self.live = self.live.saturating_sub(1);
    log::debug!("disposed dataset {handle}");
  }
}
