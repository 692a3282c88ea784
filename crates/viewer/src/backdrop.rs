//! Decorative backdrop geometry.
//!
//! Two pieces sit behind the map in the source view: a terrain-like plane
//! whose row heights follow `2^(i/20)`, and a flat parametric sheet. Both
//! are scenery only; they carry no region tag and never pick.

use foundation::math::Vec3;
use scene::World;
use scene::components::{
    ComponentBounds, ComponentPrimitive, Geometry, Mesh, PrimitiveKind, Transform,
};
use scene::entity::EntityId;

/// Plane of `rows` segments along y, one segment wide, with an exponential
/// height ramp across the rows.
pub fn wavy_plane(width: f64, height: f64, rows: usize) -> Mesh {
    let rows = rows.max(1);
    let half_w = width * 0.5;
    let half_h = height * 0.5;

    let mut vertices = Vec::with_capacity((rows + 1) * 2);
    for i in 0..=rows {
        let y = half_h - height * (i as f64 / rows as f64);
        let z = 2f64.powf(i as f64 / 20.0);
        vertices.push(Vec3::new(-half_w, y, z));
        vertices.push(Vec3::new(half_w, y, z));
    }

    let mut indices = Vec::with_capacity(rows * 6);
    for i in 0..rows {
        let a = (i * 2) as u32;
        indices.extend([a, a + 1, a + 3]);
        indices.extend([a, a + 3, a + 2]);
    }

    Mesh::new(vertices, indices)
}

/// Flat sheet spanning `extent` in the xz plane, sampled on a u/v grid.
pub fn parametric_sheet(extent: f64, u_segments: usize, v_segments: usize) -> Mesh {
    let (us, vs) = (u_segments.max(1), v_segments.max(1));

    let mut vertices = Vec::with_capacity((us + 1) * (vs + 1));
    for vi in 0..=vs {
        let v = vi as f64 / vs as f64;
        for ui in 0..=us {
            let u = ui as f64 / us as f64;
            vertices.push(Vec3::new(u * extent, 0.0, v * extent));
        }
    }

    let stride = (us + 1) as u32;
    let mut indices = Vec::with_capacity(us * vs * 6);
    for vi in 0..vs as u32 {
        for ui in 0..us as u32 {
            let a = vi * stride + ui;
            indices.extend([a, a + 1, a + stride + 1]);
            indices.extend([a, a + stride + 1, a + stride]);
        }
    }

    Mesh::new(vertices, indices)
}

/// Spawns both backdrop pieces, sized as in the source view.
pub fn spawn_backdrop(world: &mut World) -> Vec<EntityId> {
    [wavy_plane(100.0, 100.0, 100), parametric_sheet(50.0, 25, 10)]
        .into_iter()
        .map(|mesh| {
            let entity = world.spawn();
            world.set_transform(entity, Transform::identity());
            if let Some(bounds) = ComponentBounds::from_points(mesh.vertices.iter().copied()) {
                world.set_bounds(entity, bounds);
            }
            let geom = world.add_geometry(Geometry::Mesh(mesh));
            world.set_primitive(entity, ComponentPrimitive::new(geom, PrimitiveKind::Decor));
            entity
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parametric_sheet, spawn_backdrop, wavy_plane};
    use scene::World;
    use scene::picking::{PickOptions, Ray, pick_ray};
    use foundation::math::Vec3;

    #[test]
    fn wavy_plane_rows_ramp_exponentially() {
        let mesh = wavy_plane(100.0, 100.0, 100);
        assert_eq!(mesh.vertices.len(), 101 * 2);
        assert_eq!(mesh.triangle_count(), 100 * 2);
        // Row i sits at 2^(i/20); both vertices of a row share it.
        assert_eq!(mesh.vertices[0].z, 1.0);
        assert_eq!(mesh.vertices[1].z, 1.0);
        let last = mesh.vertices[mesh.vertices.len() - 1].z;
        assert!((last - 2f64.powf(5.0)).abs() < 1e-12);
    }

    #[test]
    fn parametric_sheet_is_flat() {
        let mesh = parametric_sheet(50.0, 25, 10);
        assert_eq!(mesh.vertices.len(), 26 * 11);
        assert_eq!(mesh.triangle_count(), 25 * 10 * 2);
        assert!(mesh.vertices.iter().all(|v| v.y == 0.0));
    }

    #[test]
    fn backdrop_never_picks() {
        let mut world = World::new();
        let spawned = spawn_backdrop(&mut world);
        assert_eq!(spawned.len(), 2);

        let hit = pick_ray(
            &world,
            Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::new(0.0, 0.0, -1.0)),
            PickOptions::default(),
        );
        assert!(hit.is_none());
    }
}
