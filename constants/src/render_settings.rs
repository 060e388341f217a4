/// Cylinder count used before the user touches the settings panel
pub const DEFAULT_CYLINDER_COUNT: i32 = 20;

/// Ring gradient parameter used before the user touches the settings panel
pub const DEFAULT_RING_COLOR_VALUE: i32 = 20;

/// Lower bound of both user-facing numeric parameters
pub const PARAM_MIN: i32 = -100;

/// Upper bound of both user-facing numeric parameters
pub const PARAM_MAX: i32 = 100;

/// Initial camera position; the camera starts on the +X axis looking at the origin
pub const CAMERA_START: [f32; 3] = [400.0, 0.0, 0.0];

pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;

/// Orbit dolly limits, in world units
pub const ORBIT_MIN_DISTANCE: f32 = 100.0;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;

/// The orbit camera never drops below the horizon plane
pub const ORBIT_MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Smoothing factor applied per frame while the camera approaches its target pose
pub const ORBIT_DAMPING: f32 = 0.05;

/// Exponential fog density for the scene camera
pub const FOG_DENSITY: f32 = 0.002;
