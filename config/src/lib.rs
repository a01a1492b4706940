//! # Config Crate
//!
//! Centralized configuration constants for the wall mesh pipeline.
//! All defaults and tunable limits are defined here so the core geometry
//! library and the file adapters agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_EXTRUSION_HEIGHT, OBJ_COORDINATE_DECIMALS};
//!
//! let height = DEFAULT_EXTRUSION_HEIGHT;
//! assert!(height > 0.0);
//! assert_eq!(format!("{:.*}", OBJ_COORDINATE_DECIMALS, 1.5), "1.500000");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and small helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
