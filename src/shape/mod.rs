//! Tangent estimation, segment construction, and closed-outline assembly.

use {
  crate::{
    error::{Error, Result},
    geometry::{ccw_sort, CubicBezier, Point, WorldSpace},
    sampler::PointSampler
  },
  euclid::{Box2D, Vector2D as V2},
  itertools::Itertools,
  rand::Rng,
  std::f32::consts::PI,
};


/// An outline point together with the outline's tangent angle at it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
  pub point: Point,
  pub angle: f32,
}

/// Maps edginess ∈ (−∞, ∞) to a blend weight in (0, 1); 0 ↦ 0.5.
fn blend_weight(edginess: f32) -> f32 {
  edginess.atan() / PI + 0.5
}

/// Estimate a tangent angle at every point of a closed outline.
///
/// Points are sorted counter-clockwise and the first point is repeated at
/// the end, so `n` input points produce `n + 1` nodes with
/// `nodes[0] == nodes[n]` (point and angle). Each node's angle blends the
/// angle of its outgoing edge (weight `p`) with that of its incoming edge
/// (weight `1 − p`), where `p` is derived from `edginess`; when the two
/// raw angles differ by more than π, a π correction keeps the blend on
/// the short arc.
pub fn estimate_angles(points: &[Point], edginess: f32) -> Vec<Node> {
  if points.is_empty() { return vec![]; }
  let p = blend_weight(edginess);

  let mut points = ccw_sort(points);
  points.push(points[0]); // close the loop

  // outgoing edge angle per point, normalized into [0, 2π)
  let outgoing = points.iter()
    .tuple_windows()
    .map(|(a, b)| {
      let ang = (b.y - a.y).atan2(b.x - a.x);
      if ang < 0.0 { ang + 2.0 * PI } else { ang }
    })
    .collect::<Vec<_>>();

  let mut angles = (0..outgoing.len())
    .map(|i| {
      let out = outgoing[i];
      // the incoming edge is the cyclically previous outgoing edge
      let inc = outgoing[(i + outgoing.len() - 1) % outgoing.len()];
      let wrap = if (inc - out).abs() > PI { PI } else { 0.0 };
      p * out + (1.0 - p) * inc + wrap
    })
    .collect::<Vec<_>>();
  angles.push(angles[0]);

  points.into_iter().zip(angles)
    .map(|(point, angle)| Node { point, angle })
    .collect()
}

/// Build the cubic segment between two nodes.
///
/// Control points sit at distance `roundness · |p2 − p1|` from their
/// endpoint: the first along `p1`'s tangent, the second along the
/// *reverse* of `p2`'s tangent, so the curve passes through `p2` smoothly
/// into the next segment.
pub fn build_segment(p1: Point, angle1: f32, p2: Point, angle2: f32, roundness: f32) -> CubicBezier {
  let r = roundness * (p2 - p1).length();
  let c1 = p1 + V2::new(angle1.cos(), angle1.sin()) * r;
  let c2 = p2 + V2::new((angle2 + PI).cos(), (angle2 + PI).sin()) * r;
  CubicBezier::new(p1, c1, c2, p2)
}

/// Closed curved polygon: a cyclic chain of cubic Bezier segments, each
/// ending where the next begins.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
  segments: Vec<CubicBezier>,
}

impl Shape {
  /// Chain each consecutive node pair into one segment.
  ///
  /// Expects a closed node list as produced by [`estimate_angles`]
  /// (`k + 1` nodes whose last repeats the first) and yields `k`
  /// segments. Closure of the list is trusted, not validated; distinct
  /// point count and roundness are.
  pub fn assemble(nodes: &[Node], roundness: f32) -> Result<Self> {
    if roundness < 0.0 {
      return Err(Error::InvalidParameter { reason: "roundness must be non-negative" });
    }
    let distinct = nodes.iter()
      .map(|node| (node.point.x.to_bits(), node.point.y.to_bits()))
      .unique()
      .count();
    if distinct < 3 {
      return Err(Error::InsufficientPoints { found: distinct });
    }
    let segments = nodes.iter()
      .tuple_windows()
      .map(|(a, b)| build_segment(a.point, a.angle, b.point, b.angle, roundness))
      .collect();
    Ok(Shape { segments })
  }

  /// Estimate angles over `points`, then assemble.
  pub fn from_points(points: &[Point], edginess: f32, roundness: f32) -> Result<Self> {
    Self::assemble(&estimate_angles(points, edginess), roundness)
  }

  /// Sample a random point layout from `rng`, then build the outline.
  pub fn random<R: Rng + ?Sized>(
    rng: &mut R,
    sampler: &PointSampler,
    edginess: f32,
    roundness: f32
  ) -> Result<Self> {
    Self::from_points(&sampler.sample(rng)?, edginess, roundness)
  }

  /// The ordered segment sequence. Consecutive segments share endpoints
  /// exactly, and the last segment ends where the first begins.
  pub fn segments(&self) -> &[CubicBezier] {
    &self.segments
  }

  /// Control-hull box of the whole outline.
  pub fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.segments.iter()
      .map(CubicBezier::bounding_box)
      .reduce(|a, b| a.union(&b))
      .unwrap_or_else(Box2D::zero)
  }
}
