//! # Config Crate
//!
//! Centralized configuration constants for the Conway notation pipeline.
//! Operator presets, tolerances and safety limits are defined here so the
//! mesh kernel and the notation interpreter agree on every literal.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ConwayConfig, KIS_APEX_DISTANCE, MAX_TRISUB_FACTOR};
//!
//! let cfg = ConwayConfig::default();
//! assert_eq!(cfg.kis_apex_distance, KIS_APEX_DISTANCE);
//! assert_eq!(cfg.max_trisub_factor, MAX_TRISUB_FACTOR);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every preset defined once, used everywhere
//! - **Notation Compatible**: defaults reproduce the classic operator presets
//! - **Well-Documented**: every constant has clear documentation

pub mod constants;
