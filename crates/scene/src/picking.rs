use foundation::math::precision::stable_total_cmp_f64;
use foundation::math::{Vec2, Vec3};

use crate::World;
use crate::camera::Camera;
use crate::components::{ComponentBounds, Geometry, RegionId};
use crate::entity::EntityId;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    pub entity: EntityId,
    pub region: RegionId,
    pub distance: f64,
    pub point: Vec3,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub max_distance: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            max_distance: 1.0e30,
        }
    }
}

/// Deterministic ray picking over region solids.
///
/// Only solid primitives tagged with a region participate; outlines and
/// decorative geometry never produce hits.
///
/// Ordering contract:
/// - The closest hit along the (normalized) ray wins.
/// - Equal distances tie-break on the lower `EntityId::index()`.
///
/// Results are re-derived per call; the camera and pointer move
/// independently, so nothing is cached.
pub fn pick_ray(world: &World, ray: Ray, opts: PickOptions) -> Option<PickHit> {
    let dir = ray.dir.normalized()?;

    let mut best: Option<(f64, EntityId, RegionId)> = None;

    for (entity, transform, _comp) in world.solids_by_entity() {
        let Some(region) = world.region_of(entity) else {
            continue;
        };
        if let Some(b) = world.bounds(entity)
            && ray_aabb_hit_t(ray.origin, dir, b, 0.0, opts.max_distance).is_none()
        {
            continue;
        }
        let Some(Geometry::Mesh(mesh)) =
            world.primitive(entity).and_then(|p| world.geometry(p.geometry))
        else {
            continue;
        };

        for i in 0..mesh.triangle_count() {
            let Some([a, b, c]) = mesh.triangle(i) else {
                continue;
            };
            let tri = [transform.apply(a), transform.apply(b), transform.apply(c)];
            let Some(t) = ray_triangle_hit_t(ray.origin, dir, tri) else {
                continue;
            };
            if t > opts.max_distance {
                continue;
            }

            best = match best {
                None => Some((t, entity, region)),
                Some((bt, be, br)) => {
                    let ord =
                        stable_total_cmp_f64(t, bt).then_with(|| entity.index().cmp(&be.index()));
                    if ord.is_lt() {
                        Some((t, entity, region))
                    } else {
                        Some((bt, be, br))
                    }
                }
            };
        }
    }

    let (t, entity, region) = best?;
    Some(PickHit {
        entity,
        region,
        distance: t,
        point: ray.origin + dir * t,
    })
}

/// NDC picking wrapper: casts the camera ray through `ndc` and picks.
pub fn pick_ndc(world: &World, camera: &Camera, ndc: Vec2, opts: PickOptions) -> Option<PickHit> {
    pick_ray(world, camera.ray_through_ndc(ndc), opts)
}

/// Möller–Trumbore, both triangle sides (region solids are double-sided).
fn ray_triangle_hit_t(origin: Vec3, dir: Vec3, tri: [Vec3; 3]) -> Option<f64> {
    const EPS: f64 = 1e-12;

    let edge1 = tri[1] - tri[0];
    let edge2 = tri[2] - tri[0];
    let p = dir.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPS {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = origin - tri[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t < 0.0 {
        return None;
    }
    Some(t)
}

fn ray_aabb_hit_t(
    origin: Vec3,
    dir: Vec3,
    bounds: ComponentBounds,
    mut t_min: f64,
    mut t_max: f64,
) -> Option<f64> {
    // Slabs intersection; returns entry distance.
    let origin = [origin.x, origin.y, origin.z];
    let dir = [dir.x, dir.y, dir.z];
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let (min, max) = match axis {
            0 => (bounds.min.x, bounds.max.x),
            1 => (bounds.min.y, bounds.max.y),
            _ => (bounds.min.z, bounds.max.z),
        };

        if d.abs() < 1e-12 {
            if o < min || o > max {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (min - o) * inv;
        let mut t2 = (max - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_max < t_min {
            return None;
        }
    }

    Some(t_min.max(0.0))
}
