//! Zone d'un State Plane Coordinate System
//!
//! Une zone associe un ellipsoïde à sept paramètres (méridien central,
//! latitude de référence, 2 parallèles standards, false easting/northing)
//! et à une famille de projection liée une fois pour toutes.

use std::sync::Arc;

use crate::ellipsoid::Ellipsoid;
use crate::lambert::LambertConformalConic;
use crate::projection::Projection;
use crate::SpcsError;

/// Paramètres définissant une zone.
///
/// Angles en radians, distances dans l'unité de l'ellipsoïde (mètres).
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneParameters {
    /// Ellipsoïde partagé entre zones, jamais modifié en place
    pub ellipsoid: Arc<Ellipsoid>,
    /// Méridien central (longitude d'origine)
    pub central_meridian: f64,
    /// Latitude de référence (latitude de l'origine fictive)
    pub reference_latitude: f64,
    pub standard_parallel_one: f64,
    pub standard_parallel_two: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl ZoneParameters {
    pub fn new(
        ellipsoid: Arc<Ellipsoid>,
        central_meridian: f64,
        reference_latitude: f64,
        standard_parallel_one: f64,
        standard_parallel_two: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            ellipsoid,
            central_meridian,
            reference_latitude,
            standard_parallel_one,
            standard_parallel_two,
            false_easting,
            false_northing,
        }
    }
}

/// Zone avec sa projection liée
#[derive(Debug, Clone)]
pub struct ZoneDefinition<P: Projection = LambertConformalConic> {
    parameters: ZoneParameters,
    projection: P,
}

/// Zone en Lambert Conformal Conic
pub type LambertZone = ZoneDefinition<LambertConformalConic>;

impl<P: Projection> ZoneDefinition<P> {
    /// Construit la zone et lie immédiatement la projection.
    ///
    /// # Errors
    ///
    /// Retourne l'erreur de `P::bind` (parallèles identiques, cône dégénéré, ...).
    pub fn new(parameters: ZoneParameters) -> Result<Self, SpcsError> {
        let projection = P::bind(&parameters)?;
        Ok(Self {
            parameters,
            projection,
        })
    }

    /// Transforme (latitude, longitude) en radians vers (easting, northing)
    pub fn transform(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), SpcsError> {
        self.projection.transform(latitude, longitude)
    }

    pub fn parameters(&self) -> &ZoneParameters {
        &self.parameters
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.parameters.ellipsoid
    }
}
