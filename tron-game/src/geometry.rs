//! Arena geometry — points and segment intersection.
//!
//! All trails are axis-aligned, so a dedicated test would be cheaper, but
//! the general parametric test is fast enough for four players.

/// A point in arena coordinates. Positions are whole numbers in practice,
/// but stay `f32` so every peer runs the exact same float math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Whether segment `a → b` intersects segment `c → d` (endpoints included).
///
/// Parallel segments only touch when they are collinear and overlap. This
/// also covers the zero-length head segment a turn leaves behind for one step.
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let denominator = (b.x - a.x) * (d.y - c.y) - (b.y - a.y) * (d.x - c.x);
    let numerator1 = (a.y - c.y) * (d.x - c.x) - (a.x - c.x) * (d.y - c.y);
    let numerator2 = (a.y - c.y) * (b.x - a.x) - (a.x - c.x) * (b.y - a.y);

    if denominator == 0.0 {
        return numerator1 == 0.0 && numerator2 == 0.0 && bounds_overlap(a, b, c, d);
    }

    let r = numerator1 / denominator;
    let s = numerator2 / denominator;

    (0.0..=1.0).contains(&r) && (0.0..=1.0).contains(&s)
}

fn bounds_overlap(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    a.x.min(b.x) <= c.x.max(d.x)
        && c.x.min(d.x) <= a.x.max(b.x)
        && a.y.min(b.y) <= c.y.max(d.y)
        && c.y.min(d.y) <= a.y.max(b.y)
}
