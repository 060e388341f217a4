/// Horizontal spacing between neighbouring grid cells, in world units
pub const CELL_SPACING: f32 = 30.0;

/// Half a cell; doubles as the horizontal jitter range and the ring sizing unit
pub const CELL_HALF_SPACING: f32 = 15.0;

/// Cylinder cap radius, identical top and bottom (true cylinders, not cones)
pub const CYLINDER_RADIUS: f32 = 10.0;

/// Radial tessellation used for every cylindrical solid
pub const CYLINDER_SEGMENTS: usize = 32;

/// Extrusion heights are sampled from `[-HEIGHT_RANGE, HEIGHT_RANGE)`
pub const HEIGHT_RANGE: f32 = 100.0;

/// Vertical extent of the boundary ring wall
pub const RING_HEIGHT: f32 = 20.0;

/// Radial distance between the ring's outer and inner solids
pub const RING_WALL_OFFSET: f32 = 2.0;
