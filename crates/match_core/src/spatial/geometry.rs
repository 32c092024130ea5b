//! Stateless computational geometry over [`Vector2D`].
//!
//! All routines are total: degenerate input (zero-length segments, parallel
//! lines, collinear triangles) resolves to a defined fallback or `None`
//! rather than NaN.

use super::vector::{Vector2D, EPSILON};

// ============================================================================
// Distances
// ============================================================================

/// Perpendicular distance from `point` to the infinite line through `a` and `b`.
///
/// Falls back to the distance to `a` when the two line points coincide.
pub fn distance_to_line(point: Vector2D, a: Vector2D, b: Vector2D) -> f64 {
    let line = b.subtract(a);
    let line_mag_sq = line.magnitude_squared();
    if line_mag_sq < EPSILON * EPSILON {
        return point.distance_to(a);
    }
    // |line × (point - a)| / |line|
    line.cross(point.subtract(a)).abs() / line_mag_sq.sqrt()
}

/// Distance from `point` to the segment `start`-`end`, falling back to the
/// nearest endpoint outside the segment's span.
pub fn distance_to_segment(point: Vector2D, start: Vector2D, end: Vector2D) -> f64 {
    point.distance_to(closest_point_on_segment(point, start, end))
}

/// Squared form of [`distance_to_segment`] for comparisons.
pub fn distance_squared_to_segment(point: Vector2D, start: Vector2D, end: Vector2D) -> f64 {
    point.distance_squared_to(closest_point_on_segment(point, start, end))
}

/// Closest point to `point` on the segment `start`-`end`.
///
/// Solves `t = ((point - start)·(end - start)) / |end - start|²`, clamped to
/// [0, 1]. A zero-length segment returns `start`.
pub fn closest_point_on_segment(point: Vector2D, start: Vector2D, end: Vector2D) -> Vector2D {
    let segment = end.subtract(start);
    let length_sq = segment.magnitude_squared();
    if length_sq < EPSILON * EPSILON {
        return start;
    }
    let t = (point.subtract(start).dot(segment) / length_sq).clamp(0.0, 1.0);
    start.add(segment.multiply(t))
}

// ============================================================================
// Intersections
// ============================================================================

/// Parameters `(t1, t2)` of the crossing of two segments, if both lie in [0, 1].
fn segment_parameters(
    s1_start: Vector2D,
    s1_end: Vector2D,
    s2_start: Vector2D,
    s2_end: Vector2D,
) -> Option<(f64, f64)> {
    let d1 = s1_end.subtract(s1_start);
    let d2 = s2_end.subtract(s2_start);
    let denom = d1.cross(d2);

    // Parallel or coincident
    if denom.abs() < EPSILON {
        return None;
    }

    let delta = s2_start.subtract(s1_start);
    let t1 = delta.cross(d2) / denom;
    let t2 = delta.cross(d1) / denom;

    let in_range = |t: f64| (0.0..=1.0).contains(&t);
    (in_range(t1) && in_range(t2)).then_some((t1, t2))
}

/// Whether two segments cross. Parallel and coincident segments never do.
pub fn segments_intersect(
    s1_start: Vector2D,
    s1_end: Vector2D,
    s2_start: Vector2D,
    s2_end: Vector2D,
) -> bool {
    segment_parameters(s1_start, s1_end, s2_start, s2_end).is_some()
}

/// Crossing point of two segments, or `None`.
pub fn segment_intersection_point(
    s1_start: Vector2D,
    s1_end: Vector2D,
    s2_start: Vector2D,
    s2_end: Vector2D,
) -> Option<Vector2D> {
    segment_parameters(s1_start, s1_end, s2_start, s2_end)
        .map(|(t1, _)| s1_start.add(s1_end.subtract(s1_start).multiply(t1)))
}

// ============================================================================
// Containment
// ============================================================================

pub fn is_point_in_circle(point: Vector2D, center: Vector2D, radius: f64) -> bool {
    point.distance_squared_to(center) <= radius * radius
}

/// Inclusive axis-aligned rectangle test.
pub fn is_point_in_rectangle(point: Vector2D, min: Vector2D, max: Vector2D) -> bool {
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Barycentric triangle test, inclusive of edges.
///
/// A degenerate (zero-area) triangle contains nothing.
pub fn is_point_in_triangle(point: Vector2D, a: Vector2D, b: Vector2D, c: Vector2D) -> bool {
    let v0 = c.subtract(a);
    let v1 = b.subtract(a);
    let v2 = point.subtract(a);

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < EPSILON * EPSILON {
        return false;
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;
    u >= 0.0 && v >= 0.0 && u + v <= 1.0
}

// ============================================================================
// Clamping
// ============================================================================

pub fn clamp_to_rectangle(point: Vector2D, min: Vector2D, max: Vector2D) -> Vector2D {
    Vector2D::new(point.x.max(min.x).min(max.x), point.y.max(min.y).min(max.y))
}

/// Pulls an outside point onto the circle boundary along the center→point ray.
pub fn clamp_to_circle(point: Vector2D, center: Vector2D, radius: f64) -> Vector2D {
    let offset = point.subtract(center);
    let dist_sq = offset.magnitude_squared();
    if dist_sq <= radius * radius {
        return point;
    }
    center.add(offset.multiply(radius / dist_sq.sqrt()))
}

// ============================================================================
// Angles
// ============================================================================

/// Unsigned angle at vertex `b` between rays b→a and b→c.
pub fn angle_at_vertex(a: Vector2D, b: Vector2D, c: Vector2D) -> f64 {
    a.subtract(b).angle_to(c.subtract(b))
}

/// Signed angle at vertex `b`; positive when b→c is counter-clockwise of b→a.
pub fn signed_angle_at_vertex(a: Vector2D, b: Vector2D, c: Vector2D) -> f64 {
    a.subtract(b).signed_angle_to(c.subtract(b))
}

// ============================================================================
// Triangles
// ============================================================================

/// Signed area; positive for counter-clockwise winding.
pub fn signed_triangle_area(a: Vector2D, b: Vector2D, c: Vector2D) -> f64 {
    b.subtract(a).cross(c.subtract(a)) * 0.5
}

pub fn triangle_area(a: Vector2D, b: Vector2D, c: Vector2D) -> f64 {
    signed_triangle_area(a, b, c).abs()
}

pub fn are_collinear(a: Vector2D, b: Vector2D, c: Vector2D) -> bool {
    triangle_area(a, b, c) < EPSILON
}

pub fn triangle_centroid(a: Vector2D, b: Vector2D, c: Vector2D) -> Vector2D {
    Vector2D::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Center of the circle through all three points; `None` for collinear input.
pub fn triangle_circumcenter(a: Vector2D, b: Vector2D, c: Vector2D) -> Option<Vector2D> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < EPSILON {
        return None;
    }

    let a_sq = a.magnitude_squared();
    let b_sq = b.magnitude_squared();
    let c_sq = c.magnitude_squared();

    let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
    let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
    Some(Vector2D::new(ux, uy))
}

// ============================================================================
// Raycast
// ============================================================================

/// Ray parameter `t` (in units of `direction`) at which `origin + t·direction`
/// hits the segment.
///
/// `None` for parallel rays, hits behind the origin, or crossings outside
/// the segment.
pub fn raycast_to_segment(
    origin: Vector2D,
    direction: Vector2D,
    seg_start: Vector2D,
    seg_end: Vector2D,
) -> Option<f64> {
    let segment = seg_end.subtract(seg_start);
    let denom = direction.cross(segment);
    if denom.abs() < EPSILON {
        return None;
    }

    let to_segment = seg_start.subtract(origin);
    let t_ray = to_segment.cross(segment) / denom;
    let t_seg = to_segment.cross(direction) / denom;

    (t_ray >= 0.0 && (0.0..=1.0).contains(&t_seg)).then_some(t_ray)
}

/// Point where the ray hits the segment, or `None`.
pub fn raycast_intersection_point(
    origin: Vector2D,
    direction: Vector2D,
    seg_start: Vector2D,
    seg_end: Vector2D,
) -> Option<Vector2D> {
    raycast_to_segment(origin, direction, seg_start, seg_end)
        .map(|t| origin.add(direction.multiply(t)))
}
