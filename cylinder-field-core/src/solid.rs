//! Closed solids used as boolean geometry inputs.
//!
//! Solids are polygon soups in f64 precision: each polygon is convex,
//! planar and wound counter-clockwise when seen from outside, so the
//! plane normals all point out of the enclosed volume.

use glam::DVec3;

/// Vertex of a CSG polygon carrying position and outward normal.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub pos: DVec3,
    pub normal: DVec3,
}

impl Vertex {
    pub fn new(pos: DVec3, normal: DVec3) -> Self {
        Self { pos, normal }
    }

    /// Linear interpolation toward `other`, used when an edge is split
    /// by a clipping plane.
    pub fn interpolate(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex {
            pos: self.pos.lerp(other.pos, t),
            normal: self.normal.lerp(other.normal, t),
        }
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }
}

/// Oriented plane in normal/offset form: `dot(normal, p) == w`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: DVec3,
    pub w: f64,
}

impl Plane {
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self {
            normal,
            w: normal.dot(a),
        }
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }
}

/// Convex planar polygon, one face of a solid.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
}

impl Polygon {
    /// Build a polygon, deriving its plane from the first three vertices.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let plane = Plane::from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos);
        Self { vertices, plane }
    }

    /// Build a polygon that reuses an already-known plane. Fragments cut
    /// from a polygon stay on the parent's plane, and rederiving it from
    /// possibly near-collinear fragment vertices would lose precision.
    pub fn with_plane(vertices: Vec<Vertex>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// Reverse the winding so the polygon faces the other way.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for vertex in &mut self.vertices {
            vertex.flip();
        }
        self.plane.flip();
    }
}

/// A closed volume described by its boundary polygons.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    pub polygons: Vec<Polygon>,
}

impl Solid {
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Closed cylinder centred on `center`, axis along +Y.
    ///
    /// Caps are triangle fans around the axis; side walls are one quad
    /// per segment. Segment phase starts at angle zero, so two coaxial
    /// cylinders built with the same `segments` share their tessellation
    /// planes, which keeps boolean subtraction between them numerically
    /// clean.
    pub fn cylinder(radius: f64, height: f64, segments: usize, center: DVec3) -> Self {
        let half = height / 2.0;
        let bottom_center = Vertex::new(center - DVec3::Y * half, -DVec3::Y);
        let top_center = Vertex::new(center + DVec3::Y * half, DVec3::Y);

        // Vertex on the wall at the given segment boundary. `cap` selects
        // the normal: -1 bottom cap, 0 side wall, 1 top cap.
        let rim = |i: usize, y_sign: f64, cap: i8| -> Vertex {
            let angle = std::f64::consts::TAU * (i % segments) as f64 / segments as f64;
            let out = DVec3::new(angle.cos(), 0.0, angle.sin());
            let normal = match cap {
                -1 => -DVec3::Y,
                1 => DVec3::Y,
                _ => out,
            };
            Vertex::new(center + out * radius + DVec3::Y * (half * y_sign), normal)
        };

        let mut polygons = Vec::with_capacity(segments * 3);
        for i in 0..segments {
            let j = i + 1;
            polygons.push(Polygon::new(vec![
                bottom_center,
                rim(i, -1.0, -1),
                rim(j, -1.0, -1),
            ]));
            polygons.push(Polygon::new(vec![
                rim(j, -1.0, 0),
                rim(i, -1.0, 0),
                rim(i, 1.0, 0),
                rim(j, 1.0, 0),
            ]));
            polygons.push(Polygon::new(vec![
                top_center,
                rim(j, 1.0, 1),
                rim(i, 1.0, 1),
            ]));
        }

        Self::from_polygons(polygons)
    }

    /// Shift the whole solid by `offset`, keeping planes consistent.
    pub fn translate(&mut self, offset: DVec3) {
        for polygon in &mut self.polygons {
            for vertex in &mut polygon.vertices {
                vertex.pos += offset;
            }
            polygon.plane.w += polygon.plane.normal.dot(offset);
        }
    }
}
