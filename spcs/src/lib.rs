//! # spcs
//!
//! Zones de State Plane Coordinate System et projection conique conforme de Lambert.
//!
//! ## Features
//!
//! - Ellipsoïde de référence (`a`, `f`) avec excentricité toujours dérivée
//! - Zone générique sur la famille de projection (trait `Projection`)
//! - Lambert Conformal Conic à 2 parallèles standards (Snyder)
//! - Erreurs typées au lieu de NaN silencieux
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use spcs::{Ellipsoid, LambertZone, ZoneParameters};
//!
//! let parameters = ZoneParameters::new(
//!     Arc::new(Ellipsoid::grs80()),
//!     (-71.5_f64).to_radians(),
//!     41.0_f64.to_radians(),
//!     41.71666666667_f64.to_radians(),
//!     42.68333333333_f64.to_radians(),
//!     200000.0,
//!     750000.0,
//! );
//! let zone = LambertZone::new(parameters)?;
//! let (x, y) = zone.transform(42.0_f64.to_radians(), (-71.0_f64).to_radians())?;
//! assert!(x > 200000.0 && y > 750000.0);
//! # Ok::<(), spcs::SpcsError>(())
//! ```

pub mod ellipsoid;
pub mod error;
pub mod lambert;
pub mod projection;
pub mod zone;

pub use ellipsoid::{Ellipsoid, GRS80};
pub use error::SpcsError;
pub use lambert::LambertConformalConic;
pub use projection::Projection;
pub use zone::{LambertZone, ZoneDefinition, ZoneParameters};

/// Point en coordonnées géographiques (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geographic {
    /// Latitude en radians
    pub lat: f64,
    /// Longitude en radians
    pub lon: f64,
}

impl Geographic {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Crée depuis des degrés
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
        }
    }

    /// Convertit en degrés (latitude, longitude)
    pub fn to_degrees(self) -> (f64, f64) {
        (self.lat.to_degrees(), self.lon.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geographic_degrees() {
        let geo = Geographic::from_degrees(42.0, -71.0);
        assert_eq!(geo.lat, 42.0_f64.to_radians());
        assert_eq!(geo.lon, (-71.0_f64).to_radians());

        let (lat, lon) = geo.to_degrees();
        assert!((lat - 42.0).abs() < 1e-12, "lat={}", lat);
        assert!((lon + 71.0).abs() < 1e-12, "lon={}", lon);
    }
}
