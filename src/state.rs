use crate::generate::{generate, GalaxyDataset, RandomSource};
use crate::sink::{HeadlessSink, RenderSink};
use crate::{GalaxyParameters, InvalidParameter};
use rand::{rngs::SmallRng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Owns the render sink and the single currently presented dataset.
/// `commit` is the whole regeneration protocol: generate, dispose the
/// superseded handle, present the replacement.
pub struct GalaxyState<S: RenderSink> {
  sink: S,
  params: GalaxyParameters,
  current: Option<S::Handle>,
}

impl<S: RenderSink> GalaxyState<S> {
  pub fn new(sink: S) -> Self {
    Self {
      sink,
      params: GalaxyParameters::default(),
      current: None,
    }
  }

  pub fn params(&self) -> &GalaxyParameters {
    &self.params
  }

  pub fn sink(&self) -> &S {
    &self.sink
  }

  pub fn is_presented(&self) -> bool {
    self.current.is_some()
  }

  /// Applies a committed parameter set. A failed commit leaves the
  /// presented dataset and the stored parameters untouched.
  pub fn commit<R: RandomSource>(
    &mut self,
    params: GalaxyParameters,
    rng: &mut R,
  ) -> Result<GalaxyDataset, InvalidParameter> {
    let dataset = generate(&params, rng)?;
    if let Some(previous) = self.current.take() {
      self.sink.dispose(previous);
    }
    self.current = Some(self.sink.present(&dataset));
    self.params = params;
    Ok(dataset)
  }

  /// Tears down the presented dataset, if any.
  pub fn clear(&mut self) {
    if let Some(previous) = self.current.take() {
      self.sink.dispose(previous);
    }
  }
}

/// Headless driver: regenerates the galaxy once per cycle with a
/// per-cycle seed. `cycles == 0` keeps going until Ctrl-C.
pub fn run(params: &GalaxyParameters, seed: u64, cycles: u32) -> Result<(), InvalidParameter> {
  env_logger::init();

  let running = Arc::new(AtomicBool::new(true));
  {
    let running = running.clone();
    if let Err(err) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
      log::warn!("interrupt handler unavailable: {err}");
    }
  }

  let mut state = GalaxyState::new(HeadlessSink::default());
  let mut cycle: u32 = 0;
  while running.load(Ordering::SeqCst) && (cycles == 0 || cycle < cycles) {
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(u64::from(cycle)));
    let dataset = state.commit(*params, &mut rng)?;
    log::info!(
      "cycle {cycle}: committed {} points, {} dataset live",
      dataset.point_count(),
      state.sink().live_datasets()
    );
    cycle += 1;
    if cycles == 0 {
      std::thread::sleep(Duration::from_millis(500));
    }
  }
  state.clear();
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, PartialEq)]
  enum Event {
    Present(u64),
    Dispose(u64),
  }

  #[derive(Default)]
  struct RecordSink {
    next_handle: u64,
    events: Vec<Event>,
  }

  impl RenderSink for RecordSink {
    type Handle = u64;

    fn present(&mut self, _dataset: &GalaxyDataset) -> u64 {
      let handle = self.next_handle;
      self.next_handle += 1;
      self.events.push(Event::Present(handle));
      handle
    }

    fn dispose(&mut self, handle: u64) {
      self.events.push(Event::Dispose(handle));
    }
  }

  fn small_params() -> GalaxyParameters {
    GalaxyParameters {
      count: 64,
      ..GalaxyParameters::default()
    }
  }

  #[test]
  fn superseding_commit_disposes_old_before_presenting_new() {
    let mut state = GalaxyState::new(RecordSink::default());
    let params = small_params();

    state
      .commit(params, &mut SmallRng::seed_from_u64(1))
      .unwrap();
    state
      .commit(params, &mut SmallRng::seed_from_u64(2))
      .unwrap();

    assert_eq!(
      state.sink().events,
      [Event::Present(0), Event::Dispose(0), Event::Present(1)]
    );
    assert!(state.is_presented());
  }

  #[test]
  fn failed_commit_leaves_presented_dataset_untouched() {
    let mut state = GalaxyState::new(RecordSink::default());
    let params = small_params();
    state
      .commit(params, &mut SmallRng::seed_from_u64(1))
      .unwrap();

    let mut bad = params;
    bad.radius = -1.0;
    let err = state
      .commit(bad, &mut SmallRng::seed_from_u64(2))
      .unwrap_err();

    assert_eq!(err.field, "radius");
    assert_eq!(state.sink().events, [Event::Present(0)]);
    assert_eq!(state.params(), &params);
    assert!(state.is_presented());
  }

  #[test]
  fn clear_disposes_exactly_once() {
    let mut state = GalaxyState::new(RecordSink::default());
    state
      .commit(small_params(), &mut SmallRng::seed_from_u64(1))
      .unwrap();

    state.clear();
    state.clear();

    assert_eq!(
      state.sink().events,
      [Event::Present(0), Event::Dispose(0)]
    );
    assert!(!state.is_presented());
  }

  #[test]
  fn commit_returns_the_generated_dataset() {
    let mut state = GalaxyState::new(RecordSink::default());
    let dataset = state
      .commit(small_params(), &mut SmallRng::seed_from_u64(1))
      .unwrap();
    assert_eq!(dataset.point_count(), 64);
  }
}
