//! Render-ready triangle data extracted from CSG solids.

use crate::solid::Solid;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Positions are quantised to this many ticks per unit when welding
/// coincident vertices for the manifold check.
const WELD_TICKS_PER_UNIT: f64 = 1.0e4;

/// A welded vertex within this distance of another polygon's edge is
/// stitched into that edge. Comfortably above the weld quantisation and
/// well below the smallest feature the generator produces.
const EDGE_SNAP_DISTANCE: f64 = 1.0e-3;

/// Flat triangle mesh with per-face normals, ready for upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Triangulate a solid's polygons fan-wise.
    ///
    /// Every triangle of a polygon takes that polygon's plane normal, so
    /// faces shade flat. Duplicate run-on vertices left behind by plane
    /// splits are dropped before fanning; polygons reduced below three
    /// distinct corners are discarded.
    ///
    /// Clipping one solid against another can keep a polygon whole on one
    /// side of a cut while its neighbour across the cut is subdivided
    /// further, leaving a vertex stranded in the middle of the whole
    /// polygon's edge. Before fanning, every welded vertex lying on
    /// another polygon's edge is stitched into that edge, so both sides
    /// of every cut agree on their shared subdivision.
    pub fn from_solid(solid: &Solid) -> Self {
        let mut welded_ids: BTreeMap<(i64, i64, i64), u32> = BTreeMap::new();
        let mut welded_positions: Vec<[f32; 3]> = Vec::new();
        let mut loops: Vec<(Vec<u32>, [f32; 3])> = Vec::new();

        for polygon in &solid.polygons {
            let corners = distinct_corners(polygon.vertices.iter().map(|v| v.pos.to_array()));
            if corners.len() < 3 {
                continue;
            }

            let mut loop_ids = Vec::with_capacity(corners.len());
            for corner in &corners {
                let position = as_f32(*corner);
                let id = match welded_ids.get(&weld_key(position)) {
                    Some(&id) => id,
                    None => {
                        let id = welded_positions.len() as u32;
                        welded_ids.insert(weld_key(position), id);
                        welded_positions.push(position);
                        id
                    }
                };
                loop_ids.push(id);
            }
            loops.push((loop_ids, polygon.plane.normal.as_vec3().to_array()));
        }

        // Shared per undirected edge so both sides of a cut stitch the
        // same vertices in the same order.
        let mut edge_cache: BTreeMap<(u32, u32), Vec<u32>> = BTreeMap::new();

        let mut mesh = MeshData::default();
        for (loop_ids, normal) in &loops {
            let mut refined: Vec<u32> = Vec::with_capacity(loop_ids.len());
            for (i, &start) in loop_ids.iter().enumerate() {
                let end = loop_ids[(i + 1) % loop_ids.len()];
                refined.push(start);
                let key = ordered_edge(start, end);
                let on_edge = edge_cache
                    .entry(key)
                    .or_insert_with(|| vertices_on_edge(key, &welded_positions));
                if start == key.0 {
                    refined.extend(on_edge.iter().copied());
                } else {
                    refined.extend(on_edge.iter().rev().copied());
                }
            }

            let base = mesh.positions.len() as u32;
            for &id in &refined {
                mesh.positions.push(welded_positions[id as usize]);
                mesh.normals.push(*normal);
            }
            for i in 1..refined.len() as u32 - 1 {
                mesh.indices.extend([base, base + i, base + i + 1]);
            }
        }

        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when every undirected edge borders exactly two triangles.
    ///
    /// Vertices are welded by quantised position first, since the
    /// triangulation keeps per-face copies of shared corners. An empty
    /// mesh is not considered manifold.
    pub fn is_manifold(&self) -> bool {
        if self.indices.is_empty() {
            return false;
        }

        let mut welded_ids: BTreeMap<(i64, i64, i64), u32> = BTreeMap::new();
        let mut welded = Vec::with_capacity(self.positions.len());
        for position in &self.positions {
            let key = weld_key(*position);
            let next = welded_ids.len() as u32;
            welded.push(*welded_ids.entry(key).or_insert(next));
        }

        let mut edge_counts: BTreeMap<(u32, u32), u32> = BTreeMap::new();
        for triangle in self.indices.chunks_exact(3) {
            let corners = [
                welded[triangle[0] as usize],
                welded[triangle[1] as usize],
                welded[triangle[2] as usize],
            ];
            if corners[0] == corners[1] || corners[1] == corners[2] || corners[0] == corners[2] {
                // A collapsed triangle cannot contribute paired edges.
                return false;
            }
            for (a, b) in [
                (corners[0], corners[1]),
                (corners[1], corners[2]),
                (corners[2], corners[0]),
            ] {
                *edge_counts.entry(ordered_edge(a, b)).or_insert(0) += 1;
            }
        }

        edge_counts.values().all(|count| *count == 2)
    }
}

/// Drop consecutive (and wrap-around) duplicates from a polygon loop.
fn distinct_corners(positions: impl Iterator<Item = [f64; 3]>) -> Vec<[f64; 3]> {
    let mut corners: Vec<[f64; 3]> = Vec::new();
    for position in positions {
        if corners
            .last()
            .is_some_and(|last| weld_key(as_f32(*last)) == weld_key(as_f32(position)))
        {
            continue;
        }
        corners.push(position);
    }
    while corners.len() > 2
        && weld_key(as_f32(corners[0])) == weld_key(as_f32(corners[corners.len() - 1]))
    {
        corners.pop();
    }
    corners
}

/// Welded vertices lying strictly inside the segment, ordered from the
/// segment's first endpoint.
fn vertices_on_edge(edge: (u32, u32), welded_positions: &[[f32; 3]]) -> Vec<u32> {
    let start = to_dvec(welded_positions[edge.0 as usize]);
    let span = to_dvec(welded_positions[edge.1 as usize]) - start;
    let length_squared = span.length_squared();
    if length_squared == 0.0 {
        return Vec::new();
    }

    let mut hits: Vec<(f64, u32)> = Vec::new();
    for (id, position) in welded_positions.iter().enumerate() {
        let id = id as u32;
        if id == edge.0 || id == edge.1 {
            continue;
        }
        let offset = to_dvec(*position) - start;
        let t = offset.dot(span) / length_squared;
        if t <= 0.0 || t >= 1.0 {
            continue;
        }
        if (offset - span * t).length_squared() < EDGE_SNAP_DISTANCE * EDGE_SNAP_DISTANCE {
            hits.push((t, id));
        }
    }
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    hits.into_iter().map(|(_, id)| id).collect()
}

fn to_dvec(position: [f32; 3]) -> DVec3 {
    DVec3::new(position[0] as f64, position[1] as f64, position[2] as f64)
}

fn as_f32(position: [f64; 3]) -> [f32; 3] {
    [position[0] as f32, position[1] as f32, position[2] as f32]
}

fn weld_key(position: [f32; 3]) -> (i64, i64, i64) {
    (
        (position[0] as f64 * WELD_TICKS_PER_UNIT).round() as i64,
        (position[1] as f64 * WELD_TICKS_PER_UNIT).round() as i64,
        (position[2] as f64 * WELD_TICKS_PER_UNIT).round() as i64,
    )
}

fn ordered_edge(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}
