//! Famille de projection liée à une zone

use std::f64::consts::FRAC_PI_2;

use crate::zone::ZoneParameters;
use crate::SpcsError;

/// Projection cartographique liée aux paramètres d'une zone.
///
/// `bind` est la fabrique : la zone fournit ses paramètres, la projection
/// précalcule ses constantes et garde ce dont elle a besoin. Une fois liée,
/// une projection n'est plus modifiée.
pub trait Projection: Send + Sync + Sized {
    /// Construit la projection pour une zone
    fn bind(zone: &ZoneParameters) -> Result<Self, SpcsError>;

    /// Transformation directe: (latitude, longitude) en radians → (easting, northing)
    /// dans l'unité linéaire de l'ellipsoïde
    fn transform(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), SpcsError>;

    /// Identifiant de la famille de projection
    fn name(&self) -> &'static str;
}

/// Vérifie qu'une latitude est finie et strictement comprise entre les pôles
pub(crate) fn check_latitude(latitude: f64) -> Result<(), SpcsError> {
    if latitude.is_finite() && latitude.abs() < FRAC_PI_2 {
        Ok(())
    } else {
        Err(SpcsError::LatitudeOutOfDomain { latitude })
    }
}

pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<(), SpcsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpcsError::NonFiniteInput { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_latitude() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(-1.5).is_ok());
        assert_eq!(
            check_latitude(FRAC_PI_2),
            Err(SpcsError::LatitudeOutOfDomain {
                latitude: FRAC_PI_2
            })
        );
        assert!(check_latitude(-2.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite("longitude", -1.2).is_ok());
        assert!(matches!(
            check_finite("longitude", f64::INFINITY),
            Err(SpcsError::NonFiniteInput {
                what: "longitude",
                ..
            })
        ));
    }
}
