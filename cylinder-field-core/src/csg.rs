//! Boolean operations on solids via binary space partitioning.
//!
//! Each solid is compiled into a BSP tree whose nodes split space along
//! polygon planes. Clipping one tree against another removes the polygon
//! fragments inside the other solid; combining clip and invert steps
//! yields the boolean difference used to carve the boundary ring.

use crate::solid::{Plane, Polygon, Solid};
use std::mem;

/// Distance from a plane below which a vertex counts as lying on it.
const PLANE_EPSILON: f64 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Boolean difference `a - b`: the region inside `a` but not inside `b`.
///
/// Follows the classic clip/invert sequence: both trees are clipped
/// against each other (with the extra invert round on `b` that removes
/// coplanar fragments of its surface), then merged and re-inverted.
pub fn subtract(a: &Solid, b: &Solid) -> Solid {
    let mut a = Node::new(a.polygons.clone());
    let mut b = Node::new(b.polygons.clone());

    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    a.invert();

    Solid::from_polygons(a.all_polygons())
}

/// One BSP node: a splitting plane, the polygons coplanar with it, and
/// subtrees for the half-spaces in front of and behind it.
#[derive(Default)]
struct Node {
    plane: Option<Plane>,
    front: Option<Box<Node>>,
    back: Option<Box<Node>>,
    polygons: Vec<Polygon>,
}

impl Node {
    fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Node::default();
        node.build(polygons);
        node
    }

    /// Flip the solid the tree represents inside out.
    fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        mem::swap(&mut self.front, &mut self.back);
    }

    /// Remove every part of `polygons` inside the solid this tree
    /// represents, returning the surviving fragments.
    fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = &self.plane else {
            return polygons;
        };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in polygons {
            split_polygon(
                plane,
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        // Coplanar fragments follow the side their normal faces.
        front.append(&mut coplanar_front);
        back.append(&mut coplanar_back);

        let mut front = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };
        let back = match &self.back {
            Some(node) => node.clip_polygons(back),
            // No back subtree: these fragments are inside the solid.
            None => Vec::new(),
        };

        front.extend(back);
        front
    }

    /// Clip this tree's polygons to the solid represented by `other`.
    fn clip_to(&mut self, other: &Node) {
        self.polygons = other.clip_polygons(mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Collect every polygon stored in the tree.
    fn all_polygons(&self) -> Vec<Polygon> {
        let mut polygons = self.polygons.clone();
        if let Some(front) = &self.front {
            polygons.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            polygons.extend(back.all_polygons());
        }
        polygons
    }

    /// Insert polygons into the tree, extending it with new nodes as
    /// fragments land in empty half-spaces.
    fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        let plane = *self.plane.get_or_insert(polygons[0].plane);

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in polygons {
            split_polygon(
                &plane,
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }

        self.polygons.extend(coplanar_front);
        self.polygons.extend(coplanar_back);
        if !front.is_empty() {
            self.front
                .get_or_insert_with(|| Box::new(Node::default()))
                .build(front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(|| Box::new(Node::default()))
                .build(back);
        }
    }
}

/// Split `polygon` by `plane`, routing it (or its fragments) into one of
/// the four output lists.
fn split_polygon(
    plane: &Plane,
    polygon: Polygon,
    coplanar_front: &mut Vec<Polygon>,
    coplanar_back: &mut Vec<Polygon>,
    front: &mut Vec<Polygon>,
    back: &mut Vec<Polygon>,
) {
    let mut polygon_type = COPLANAR;
    let mut types = Vec::with_capacity(polygon.vertices.len());
    for vertex in &polygon.vertices {
        let distance = plane.normal.dot(vertex.pos) - plane.w;
        let vertex_type = if distance < -PLANE_EPSILON {
            BACK
        } else if distance > PLANE_EPSILON {
            FRONT
        } else {
            COPLANAR
        };
        polygon_type |= vertex_type;
        types.push(vertex_type);
    }

    match polygon_type {
        COPLANAR => {
            if plane.normal.dot(polygon.plane.normal) > 0.0 {
                coplanar_front.push(polygon);
            } else {
                coplanar_back.push(polygon);
            }
        }
        FRONT => front.push(polygon),
        BACK => back.push(polygon),
        _ => {
            let mut front_vertices = Vec::new();
            let mut back_vertices = Vec::new();
            let count = polygon.vertices.len();
            for i in 0..count {
                let j = (i + 1) % count;
                let ti = types[i];
                let tj = types[j];
                let vi = polygon.vertices[i];
                let vj = polygon.vertices[j];

                if ti != BACK {
                    front_vertices.push(vi);
                }
                if ti != FRONT {
                    back_vertices.push(vi);
                }
                if (ti | tj) == SPANNING {
                    let t = (plane.w - plane.normal.dot(vi.pos))
                        / plane.normal.dot(vj.pos - vi.pos);
                    let split = vi.interpolate(&vj, t);
                    front_vertices.push(split);
                    back_vertices.push(split);
                }
            }
            if front_vertices.len() >= 3 {
                front.push(Polygon::with_plane(front_vertices, polygon.plane));
            }
            if back_vertices.len() >= 3 {
                back.push(Polygon::with_plane(back_vertices, polygon.plane));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh_data::MeshData;
    use glam::DVec3;

    fn horizontal_radius(pos: DVec3) -> f64 {
        (pos.x * pos.x + pos.z * pos.z).sqrt()
    }

    #[test]
    fn subtract_keeps_the_outer_wall_and_exposes_the_inner_wall() {
        let outer = Solid::cylinder(50.0, 20.0, 32, DVec3::ZERO);
        let inner = Solid::cylinder(48.0, 20.0, 32, DVec3::ZERO);
        let carved = subtract(&outer, &inner);

        assert!(!carved.polygons.is_empty());

        let mut min_radius = f64::INFINITY;
        let mut max_radius: f64 = 0.0;
        for polygon in &carved.polygons {
            for vertex in &polygon.vertices {
                let r = horizontal_radius(vertex.pos);
                min_radius = min_radius.min(r);
                max_radius = max_radius.max(r);
                assert!(vertex.pos.y.abs() <= 10.0 + 1e-6);
            }
        }

        // Inner-wall vertices sit on the inner circle, outer on the outer.
        assert!((min_radius - 48.0).abs() < 1e-3, "min radius {min_radius}");
        assert!((max_radius - 50.0).abs() < 1e-3, "max radius {max_radius}");
    }

    #[test]
    fn subtract_result_closes_into_a_manifold() {
        let outer = Solid::cylinder(50.0, 20.0, 32, DVec3::ZERO);
        let inner = Solid::cylinder(48.0, 20.0, 32, DVec3::ZERO);
        let mesh = MeshData::from_solid(&subtract(&outer, &inner));

        assert!(mesh.is_manifold());
    }

    #[test]
    fn subtract_of_disjoint_solids_leaves_the_minuend_intact() {
        let a = Solid::cylinder(10.0, 20.0, 16, DVec3::ZERO);
        let b = Solid::cylinder(10.0, 20.0, 16, DVec3::new(100.0, 0.0, 0.0));
        let carved = subtract(&a, &b);

        let mesh = MeshData::from_solid(&carved);
        assert!(mesh.is_manifold());

        // Every surviving vertex still belongs to `a`'s surface.
        for polygon in &carved.polygons {
            for vertex in &polygon.vertices {
                assert!(horizontal_radius(vertex.pos) <= 10.0 + 1e-6);
            }
        }
    }
}
