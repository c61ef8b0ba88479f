//! Small geometric primitives: axis-aligned boxes, planes and rays.

use crate::error::GeometryError;
use glam::{Mat4, Vec3};

/// World- or model-space axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// An empty box; any union with it yields the other box.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::empty(), |b, p| b.including(p))
    }

    pub fn including(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn union(self, other: Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns the box if every coordinate is finite.
    pub fn validated(self) -> Result<Self, GeometryError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::NonFiniteBounds)
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounds of this box after an affine transform (re-fitted around the
    /// transformed corners, like a scene-graph box recomputation).
    pub fn transformed(&self, m: Mat4) -> Self {
        Self::from_points(self.corners().into_iter().map(|c| m.transform_point3(c)))
    }
}

/// Plane `normal · p + d = 0` with a unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            d: -n.dot(point),
        }
    }

    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }

    pub fn project_point(&self, p: Vec3) -> Vec3 {
        p - self.normal * self.signed_distance(p)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Intersection with a plane in front of the origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Result<Vec3, GeometryError> {
        let denom = plane.normal.dot(self.dir);
        if denom.abs() < 1e-8 {
            return Err(GeometryError::DegenerateRay);
        }
        let t = -plane.signed_distance(self.origin) / denom;
        if !(t >= 0.0) {
            return Err(GeometryError::DegenerateRay);
        }
        Ok(self.origin + self.dir * t)
    }
}

/// `smoothstep` over the unit interval.
#[inline]
pub fn smoothstep01(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    u * u * (3.0 - 2.0 * u)
}

/// Frame-rate independent exponential approach toward `target`.
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-lambda * dt).exp())
}
