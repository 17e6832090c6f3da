use {
  super::{Point, WorldSpace},
  euclid::Box2D,
};

/// Cubic Bezier curve: two endpoints and two off-curve control points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBezier {
  pub p0: Point,
  pub c1: Point,
  pub c2: Point,
  pub p3: Point,
}

impl CubicBezier {
  pub fn new(p0: Point, c1: Point, c2: Point, p3: Point) -> Self {
    Self { p0, c1, c2, p3 }
  }

  pub fn start(&self) -> Point { self.p0 }
  pub fn end(&self) -> Point { self.p3 }

  /// Evaluate at parameter `t ∈ [0, 1]`, Bernstein basis.
  pub fn eval(&self, t: f32) -> Point {
    let s = 1.0 - t;
    (self.p0.to_vector() * (s * s * s)
      + self.c1.to_vector() * (3.0 * s * s * t)
      + self.c2.to_vector() * (3.0 * s * t * t)
      + self.p3.to_vector() * (t * t * t))
      .to_point()
  }

  /// `samples` points at uniform parameters, both endpoints included.
  /// Requires `samples >= 2`.
  pub fn sample(&self, samples: usize) -> impl Iterator<Item = Point> + '_ {
    debug_assert!(samples >= 2);
    let step = 1.0 / (samples - 1) as f32;
    (0..samples).map(move |k| self.eval(k as f32 * step))
  }

  /// Box of the control hull; contains the whole curve.
  pub fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    Box2D::from_points([self.p0, self.c1, self.c2, self.p3])
  }
}
