//! Flat (bevel-free) extrusion of a projected polygon.
//!
//! Caps are triangulated with `earcutr`; hole rings reduce the interior.
//! The mesh sits with its bottom cap at z = 0 and its top cap at z = depth,
//! so stretching the extrusion axis is a pure z scale.

use earcutr::earcut;
use foundation::math::{Vec2, Vec3};
use scene::components::Mesh;

/// Extrudes `exterior` (minus `holes`) by `depth`.
///
/// Returns `None` when the rings are too degenerate to triangulate (fewer
/// than 3 distinct points, or earcut failure).
pub fn extrude_polygon(exterior: &[Vec2], holes: &[Vec<Vec2>], depth: f64) -> Option<Mesh> {
    let mut flat: Vec<Vec2> = Vec::new();
    let mut ring_ranges: Vec<(usize, usize)> = Vec::new();
    let mut hole_indices: Vec<usize> = Vec::new();

    for (ring_i, ring) in std::iter::once(exterior)
        .chain(holes.iter().map(Vec::as_slice))
        .enumerate()
    {
        let mut pts = ring.to_vec();
        drop_closing_duplicate(&mut pts);
        if pts.len() < 3 {
            continue;
        }

        if ring_i > 0 {
            hole_indices.push(flat.len());
        }
        let start = flat.len();
        flat.extend(pts);
        ring_ranges.push((start, flat.len()));
    }

    if flat.len() < 3 || ring_ranges.is_empty() {
        return None;
    }
    // The exterior itself must have survived.
    if ring_ranges[0].0 != 0 {
        return None;
    }

    let mut coords_2d: Vec<f64> = Vec::with_capacity(flat.len() * 2);
    for p in &flat {
        coords_2d.push(p.x);
        coords_2d.push(p.y);
    }
    let cap = match earcut(&coords_2d, &hole_indices, 2) {
        Ok(ix) => ix,
        Err(_) => return None,
    };
    if cap.is_empty() {
        return None;
    }

    let n = flat.len() as u32;
    let mut vertices: Vec<Vec3> = Vec::with_capacity(flat.len() * 2);
    for p in &flat {
        vertices.push(Vec3::new(p.x, p.y, 0.0));
    }
    for p in &flat {
        vertices.push(Vec3::new(p.x, p.y, depth));
    }

    let mut indices: Vec<u32> = Vec::with_capacity(cap.len() * 2 + flat.len() * 6);
    // Bottom cap, winding reversed so it faces downward.
    for tri in cap.chunks_exact(3) {
        indices.extend([tri[0] as u32, tri[2] as u32, tri[1] as u32]);
    }
    // Top cap.
    for tri in cap.chunks_exact(3) {
        indices.extend([tri[0] as u32 + n, tri[1] as u32 + n, tri[2] as u32 + n]);
    }
    // Side walls, one quad per ring edge.
    for &(start, end) in &ring_ranges {
        for i in start..end {
            let j = if i + 1 == end { start } else { i + 1 };
            let (i, j) = (i as u32, j as u32);
            indices.extend([i, j, j + n]);
            indices.extend([i, j + n, i + n]);
        }
    }

    Some(Mesh::new(vertices, indices))
}

fn drop_closing_duplicate(points: &mut Vec<Vec2>) {
    if points.len() >= 2 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9 {
            points.pop();
        }
    }
}
