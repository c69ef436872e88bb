//! Massachusetts State Plane, Mainland zone (FIPS 2001)
//!
//! Définition officielle (MassGIS) :
//! - Projection: Lambert Conformal Conic
//! - Ellipsoïde: GRS 80
//! - Méridien central: -71.5°
//! - Latitude de référence: 41°
//! - Parallèles standards: 41.71666666667° et 42.68333333333°
//! - False easting: 200000 m, false northing: 750000 m

use std::sync::Arc;

use spcs::{Ellipsoid, Geographic, LambertZone, SpcsError, ZoneParameters};
use tracing::debug;

/// Unité des coordonnées planes en sortie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridUnit {
    /// Mètres, origine de la zone
    #[default]
    Meters,
    /// Pieds, avec correction des false easting/northing
    Feet,
}

/// Grille Massachusetts Mainland sur GRS 80
#[derive(Debug, Clone)]
pub struct MassachusettsMainlandGrid {
    zone: LambertZone,
}

impl MassachusettsMainlandGrid {
    pub const FEET_PER_METER: f64 = 3.2808399;

    /// Correction du false easting, en pieds
    pub const FALSE_EASTING_OFFSET_FEET: f64 = 56300.406613422674;

    /// Correction du false northing, en pieds
    pub const FALSE_NORTHING_OFFSET_FEET: f64 = 2460676.7994120447;

    pub const CENTRAL_MERIDIAN_DEG: f64 = -71.5;
    pub const REFERENCE_LATITUDE_DEG: f64 = 41.0;
    pub const STANDARD_PARALLEL_ONE_DEG: f64 = 41.71666666667;
    pub const STANDARD_PARALLEL_TWO_DEG: f64 = 42.68333333333;
    pub const FALSE_EASTING: f64 = 200000.0;
    pub const FALSE_NORTHING: f64 = 750000.0;

    /// Construit la zone (GRS 80, angles convertis en radians)
    pub fn new() -> Result<Self, SpcsError> {
        let parameters = ZoneParameters::new(
            Arc::new(Ellipsoid::grs80()),
            Self::CENTRAL_MERIDIAN_DEG.to_radians(),
            Self::REFERENCE_LATITUDE_DEG.to_radians(),
            Self::STANDARD_PARALLEL_ONE_DEG.to_radians(),
            Self::STANDARD_PARALLEL_TWO_DEG.to_radians(),
            Self::FALSE_EASTING,
            Self::FALSE_NORTHING,
        );
        let zone = LambertZone::new(parameters)?;

        debug!("Grille Massachusetts Mainland construite");
        Ok(Self { zone })
    }

    pub fn zone(&self) -> &LambertZone {
        &self.zone
    }

    /// (latitude, longitude) en radians → (x, y) en mètres
    pub fn transform_to_meters(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(f64, f64), SpcsError> {
        self.zone.transform(latitude, longitude)
    }

    /// (latitude, longitude) en radians → (x, y) en pieds
    pub fn transform_to_feet(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(f64, f64), SpcsError> {
        let (x, y) = self.transform_to_meters(latitude, longitude)?;

        let x = x * Self::FEET_PER_METER - Self::FALSE_EASTING_OFFSET_FEET;
        let y = y * Self::FEET_PER_METER - Self::FALSE_NORTHING_OFFSET_FEET;

        Ok((x, y))
    }

    /// Transforme vers l'unité demandée
    pub fn transform(
        &self,
        latitude: f64,
        longitude: f64,
        unit: GridUnit,
    ) -> Result<(f64, f64), SpcsError> {
        match unit {
            GridUnit::Meters => self.transform_to_meters(latitude, longitude),
            GridUnit::Feet => self.transform_to_feet(latitude, longitude),
        }
    }

    pub fn transform_point(
        &self,
        point: Geographic,
        unit: GridUnit,
    ) -> Result<(f64, f64), SpcsError> {
        self.transform(point.lat, point.lon, unit)
    }
}
