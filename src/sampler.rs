//! Constrained rejection sampling of outline control points.

use {
  crate::{
    error::{Error, Result},
    geometry::{ccw_sort, Point}
  },
  itertools::Itertools,
  rand::Rng,
};

/// Draws `n` points in the unit square, redrawing while consecutive
/// (counter-clockwise sorted) points are closer than `min_distance`,
/// then scales the accepted layout by `scale`.
#[derive(Debug, Copy, Clone)]
pub struct PointSampler {
  /// Number of points. Minimum 3.
  pub n: usize,
  /// Side of the square the accepted points are scaled into.
  pub scale: f32,
  /// Minimum separation of consecutive sorted points, in unit-square
  /// units. `None` defaults to `0.7 / n`.
  pub min_distance: Option<f32>,
  /// Redraw budget. Once exhausted, the last draw is accepted as-is.
  pub max_retries: usize,
}

impl Default for PointSampler {
  fn default() -> Self {
    Self {
      n: 5,
      scale: 0.8,
      min_distance: None,
      max_retries: 200,
    }}}

impl PointSampler {
  /// Sample exactly `n` points in `[0, scale]²` from `rng`.
  ///
  /// The same seed always reproduces the same layout; the generator is
  /// the only state involved.
  pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point>> {
    if self.n < 3 {
      return Err(Error::InvalidParameter { reason: "n must be at least 3" });
    }
    if !(self.scale > 0.0) {
      return Err(Error::InvalidParameter { reason: "scale must be positive" });
    }
    let min_distance = self.min_distance.unwrap_or(0.7 / self.n as f32);

    let mut points = self.draw(rng);
    for _ in 0..self.max_retries {
      if Self::separated(&points, min_distance) { break; }
      points = self.draw(rng);
    }
    // soft non-convergence: the final draw passes unchecked
    Ok(points.into_iter()
      .map(|p| p * self.scale)
      .collect())
  }

  fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
    (0..self.n)
      .map(|_| Point::new(rng.gen(), rng.gen()))
      .collect()
  }

  /// Separation of a consecutive pair is `|Δx + Δy|`, not the Euclidean
  /// distance, and the wrap pair from the last point back to the first is
  /// never checked. Both are inherited from the original generator and
  /// kept for compatibility.
  fn separated(points: &[Point], min_distance: f32) -> bool {
    ccw_sort(points).iter()
      .tuple_windows()
      .all(|(a, b)| ((b.x - a.x) + (b.y - a.y)).abs() >= min_distance)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::error::Error,
    anyhow::Result,
    rand::SeedableRng,
    rand_pcg::Pcg64
  };

  #[test] fn count_and_bounds() -> Result<()> {
    let mut rng = Pcg64::seed_from_u64(0);
    for n in [3, 5, 8, 64] {
      let sampler = PointSampler { n, scale: 2.5, ..Default::default() };
      let points = sampler.sample(&mut rng)?;
      assert_eq!(points.len(), n);
      assert!(points.iter().all(|p|
        (0.0..=2.5).contains(&p.x) && (0.0..=2.5).contains(&p.y)));
    }
    Ok(())
  }

  #[test] fn deterministic_under_fixed_seed() -> Result<()> {
    let sampler = PointSampler::default();
    let a = sampler.sample(&mut Pcg64::seed_from_u64(42))?;
    let b = sampler.sample(&mut Pcg64::seed_from_u64(42))?;
    assert_eq!(a, b);
    Ok(())
  }

  #[test] fn rejects_bad_parameters() {
    let mut rng = Pcg64::seed_from_u64(0);
    assert!(matches!(
      PointSampler { n: 2, ..Default::default() }.sample(&mut rng),
      Err(Error::InvalidParameter { .. })));
    assert!(matches!(
      PointSampler { scale: 0.0, ..Default::default() }.sample(&mut rng),
      Err(Error::InvalidParameter { .. })));
    assert!(matches!(
      PointSampler { scale: -1.0, ..Default::default() }.sample(&mut rng),
      Err(Error::InvalidParameter { .. })));
  }

  #[test] fn soft_nonconvergence() -> Result<()> {
    // no layout can satisfy this separation; the sampler must still
    // terminate and return a full point set
    let sampler = PointSampler {
      n: 8,
      min_distance: Some(f32::MAX),
      max_retries: 16,
      ..Default::default()
    };
    let points = sampler.sample(&mut Pcg64::seed_from_u64(0))?;
    assert_eq!(points.len(), 8);
    Ok(())
  }

  #[test] fn scale_applied_after_separation_check() -> Result<()> {
    // separation is checked in unit-square units, so a large scale must
    // not make an otherwise-rejected layout pass
    let sampler = PointSampler {
      n: 3,
      scale: 1000.0,
      min_distance: Some(0.9),
      max_retries: 4,
    };
    let points = sampler.sample(&mut Pcg64::seed_from_u64(7))?;
    assert!(points.iter().all(|p| p.x <= 1000.0 && p.y <= 1000.0));
    Ok(())
  }
}
