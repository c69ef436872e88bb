//! # masp
//!
//! Coordonnées Massachusetts State Plane (Mainland zone, FIPS 2001) depuis
//! des latitudes/longitudes GRS 80.
//!
//! ## Features
//!
//! - Grille Mainland en mètres ou en pieds (avec correction d'origine)
//! - Zones décrites en JSON, presets embarqués (`ma-mainland`, `ma-island`)
//! - Transformation de géométries `geo` et de lots de points (rayon)
//!
//! ## Usage
//!
//! ```rust
//! use masp::{GridUnit, MassachusettsMainlandGrid};
//!
//! let grid = MassachusettsMainlandGrid::new()?;
//! let (x, y) = grid.transform_to_feet(42.0_f64.to_radians(), (-71.0_f64).to_radians())?;
//! assert!((x - 735772.848).abs() < 1e-2);
//! assert!((y - 364751.995).abs() < 1e-2);
//!
//! let (x, _) = grid.transform(41.0_f64.to_radians(), (-71.5_f64).to_radians(), GridUnit::Meters)?;
//! assert_eq!(x, 200000.0);
//! # Ok::<(), spcs::SpcsError>(())
//! ```

pub mod config;
pub mod geometry;
pub mod grid;

pub use config::{ProjectionKind, ZoneConfig};
pub use grid::{GridUnit, MassachusettsMainlandGrid};
pub use spcs::{Geographic, SpcsError};
