//! # Configuration Constants
//!
//! Centralized constants for the Conway notation pipeline. Operator presets,
//! precision values and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: floating-point comparison and vertex merge tolerances
//! - **Operator presets**: default distances used by kis, chamfer, inset,
//!   extrude, loft and hollow
//! - **Limits**: bounds on subdivision factors and seed side counts
//! - **Color**: face palette used by the derived-attribute pass

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Distance under which two lattice points produced by triangular
/// subdivision are treated as the same vertex.
///
/// Points on an edge shared by two triangles are generated once per
/// triangle and must collapse into one vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// let a = [0.5_f64, 0.5, 0.0];
/// let b = [0.5_f64 + 1e-12, 0.5, 0.0];
/// let d = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt();
/// assert!(d < VERTEX_MERGE_EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// OPERATOR PRESETS
// =============================================================================

/// Height of the kis apex above the face centroid, along the face normal.
pub const KIS_APEX_DISTANCE: f64 = 0.1;

/// Chamfer depth. Original vertices are scaled by `1 + d` and the new
/// per-face vertices are pushed `1.5 * d` along the face normal.
pub const CHAMFER_DISTANCE: f64 = 0.5;

/// Fraction of the way from a corner toward the face centroid at which the
/// inset operator places its inner vertex.
pub const INSET_DISTANCE: f64 = 0.5;

/// Offset of inset vertices along the face normal (negative sinks the face).
pub const INSET_POPOUT: f64 = -0.2;

/// Normal offset used by extrude (inset with no tween toward the centroid).
pub const EXTRUDE_POPOUT: f64 = 0.3;

/// Tween fraction used by loft (no normal offset).
pub const LOFT_INSET: f64 = 0.0;

/// Tween fraction of the hollow operator's window ring.
pub const HOLLOW_INSET: f64 = 0.5;

/// Wall thickness of the hollow operator.
pub const HOLLOW_THICKNESS: f64 = 0.1;

/// Subdivision factor used by `trisub` when the notation gives none.
pub const TRISUB_DEFAULT_FACTOR: u32 = 2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Largest subdivision factor accepted by `trisub`.
///
/// Each triangle turns into `n * n` triangles and `(n + 1)(n + 2) / 2`
/// lattice points, so the factor is bounded before any allocation.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TRISUB_FACTOR;
///
/// let requested = 8;
/// assert!(requested <= MAX_TRISUB_FACTOR);
/// ```
pub const MAX_TRISUB_FACTOR: u32 = 64;

/// Side count used by parametric seeds (prism, pyramid, ...) when the
/// notation carries no parameter.
pub const DEFAULT_SEED_SIDES: u32 = 3;

/// Smallest side count a parametric seed accepts.
pub const MIN_SEED_SIDES: u32 = 3;

/// Largest side count a parametric seed accepts.
///
/// Seeds allocate a few vertices per side, so the count is checked before
/// anything is built.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SEED_SIDES, MIN_SEED_SIDES};
///
/// assert!((MIN_SEED_SIDES..=MAX_SEED_SIDES).contains(&120));
/// assert!(!(MIN_SEED_SIDES..=MAX_SEED_SIDES).contains(&400_000_000));
/// ```
pub const MAX_SEED_SIDES: u32 = 1024;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default color when none is specified (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Face palette. A face with `n` sides gets entry `(n - 3) % len`.
pub const FACE_PALETTE: [[f32; 4]; 8] = [
    [1.0, 0.467, 0.467, 1.0],
    [0.867, 0.867, 0.867, 1.0],
    [0.533, 0.6, 0.6, 1.0],
    [1.0, 0.941, 0.898, 1.0],
    [0.667, 0.2, 0.2, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [0.667, 0.667, 0.667, 1.0],
];

/// Returns the palette color for a face with the given side count.
///
/// Faces with fewer than three sides are degenerate and get [`DEFAULT_COLOR`].
///
/// # Example
///
/// ```rust
/// use config::constants::{face_color, FACE_PALETTE};
///
/// assert_eq!(face_color(3), FACE_PALETTE[0]);
/// assert_eq!(face_color(11), FACE_PALETTE[0]);
/// ```
pub fn face_color(sides: usize) -> [f32; 4] {
    if sides < 3 {
        return DEFAULT_COLOR;
    }
    FACE_PALETTE[(sides - 3) % FACE_PALETTE.len()]
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// CONWAY CONFIG
// =============================================================================

/// Immutable snapshot of the operator presets shared between the mesh kernel
/// and the notation interpreter.
///
/// # Examples
/// ```
/// use config::constants::ConwayConfig;
/// let config = ConwayConfig::default();
/// assert!(config.merge_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConwayConfig {
    /// Distance under which `trisub` merges lattice points.
    pub merge_tolerance: f64,
    /// Largest accepted `trisub` factor.
    pub max_trisub_factor: u32,
    /// Largest accepted side count for parametric seeds.
    pub max_seed_sides: u32,
    /// Kis apex height above the face centroid.
    pub kis_apex_distance: f64,
    /// Chamfer depth.
    pub chamfer_distance: f64,
    /// Inset tween fraction toward the face centroid.
    pub inset_distance: f64,
    /// Inset offset along the face normal.
    pub inset_popout: f64,
    /// Hollow window tween fraction.
    pub hollow_inset: f64,
    /// Hollow wall thickness.
    pub hollow_thickness: f64,
}

impl ConwayConfig {
    /// Builds a configuration enforcing strict validation of the merge
    /// tolerance and the subdivision limit. Distance presets keep their
    /// defaults and can be overridden with the `with_*` builders.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ConwayConfig;
    /// let cfg = ConwayConfig::new(1.0e-6, 16).expect("valid config");
    /// assert_eq!(cfg.max_trisub_factor, 16);
    /// ```
    pub fn new(merge_tolerance: f64, max_trisub_factor: u32) -> Result<Self, ConfigError> {
        if !(merge_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(merge_tolerance));
        }
        if max_trisub_factor == 0 {
            return Err(ConfigError::InvalidSubdivisionLimit(max_trisub_factor));
        }
        Ok(Self {
            merge_tolerance,
            max_trisub_factor,
            ..Self::default()
        })
    }

    /// Overrides the largest accepted seed side count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ConwayConfig;
    /// let cfg = ConwayConfig::default().with_max_seed_sides(64).expect("valid limit");
    /// assert_eq!(cfg.max_seed_sides, 64);
    /// assert!(ConwayConfig::default().with_max_seed_sides(2).is_err());
    /// ```
    pub fn with_max_seed_sides(mut self, sides: u32) -> Result<Self, ConfigError> {
        if sides < MIN_SEED_SIDES {
            return Err(ConfigError::InvalidSeedLimit(sides));
        }
        self.max_seed_sides = sides;
        Ok(self)
    }

    /// Overrides the kis apex height.
    pub fn with_kis_apex_distance(mut self, distance: f64) -> Self {
        self.kis_apex_distance = distance;
        self
    }

    /// Overrides the chamfer depth.
    pub fn with_chamfer_distance(mut self, distance: f64) -> Self {
        self.chamfer_distance = distance;
        self
    }

    /// Overrides the inset tween fraction and normal offset.
    pub fn with_inset(mut self, distance: f64, popout: f64) -> Self {
        self.inset_distance = distance;
        self.inset_popout = popout;
        self
    }

    /// Overrides the hollow window fraction and wall thickness.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ConwayConfig;
    /// let cfg = ConwayConfig::default().with_hollow(0.3, 0.05).expect("valid thickness");
    /// assert_eq!(cfg.hollow_thickness, 0.05);
    /// ```
    pub fn with_hollow(mut self, inset: f64, thickness: f64) -> Result<Self, ConfigError> {
        if !(thickness > 0.0) {
            return Err(ConfigError::InvalidThickness(thickness));
        }
        self.hollow_inset = inset;
        self.hollow_thickness = thickness;
        Ok(self)
    }
}

impl Default for ConwayConfig {
    fn default() -> Self {
        Self {
            merge_tolerance: VERTEX_MERGE_EPSILON,
            max_trisub_factor: MAX_TRISUB_FACTOR,
            max_seed_sides: MAX_SEED_SIDES,
            kis_apex_distance: KIS_APEX_DISTANCE,
            chamfer_distance: CHAMFER_DISTANCE,
            inset_distance: INSET_DISTANCE,
            inset_popout: INSET_POPOUT,
            hollow_inset: HOLLOW_INSET,
            hollow_thickness: HOLLOW_THICKNESS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the merge tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the subdivision limit would forbid every factor.
    InvalidSubdivisionLimit(u32),
    /// Raised when the seed side limit is below the smallest seed.
    InvalidSeedLimit(u32),
    /// Raised when the hollow wall thickness is not positive.
    InvalidThickness(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "merge tolerance must be positive: {value}")
            }
            ConfigError::InvalidSubdivisionLimit(value) => {
                write!(f, "max_trisub_factor must be >= 1: {value}")
            }
            ConfigError::InvalidSeedLimit(value) => {
                write!(f, "max_seed_sides must be >= {MIN_SEED_SIDES}: {value}")
            }
            ConfigError::InvalidThickness(value) => {
                write!(f, "hollow thickness must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
