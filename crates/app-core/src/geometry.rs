use glam::Vec2;

/// Shortest distance from `p` to the segment `a`-`b` (clamped to the
/// endpoints, not the infinite line).
#[inline]
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let v = b - a;
    let w = p - a;
    let c1 = v.dot(w);
    if c1 <= 0.0 {
        return p.distance(a);
    }
    let c2 = v.dot(v);
    if c2 <= c1 {
        return p.distance(b);
    }
    p.distance(a + v * (c1 / c2))
}

/// Rescale `v` to magnitude `speed`, treating a degenerate zero vector as
/// unit length so the result stays finite.
#[inline]
pub fn rescale_to_speed(v: Vec2, speed: f32) -> Vec2 {
    let len = v.length();
    let len = if len > 0.0 { len } else { 1.0 };
    v * (speed / len)
}

/// Unit vector from `from` towards `to`, with the same zero-distance guard.
#[inline]
pub fn unit_away(from: Vec2, to: Vec2) -> Vec2 {
    let d = to - from;
    let len = d.length();
    let len = if len > 0.0 { len } else { 1.0 };
    d / len
}
