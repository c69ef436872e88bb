//! Projection conique conforme de Lambert (Lambert Conformal Conic)
//!
//! Variante à 2 parallèles standards, formules de Snyder
//! (Map Projections - A Working Manual, USGS Professional Paper 1395).

use std::f64::consts::FRAC_PI_4;
use std::sync::Arc;

use tracing::debug;

use crate::ellipsoid::Ellipsoid;
use crate::projection::{check_finite, check_latitude, Projection};
use crate::zone::ZoneParameters;
use crate::SpcsError;

/// Lambert Conformal Conic liée à une zone
#[derive(Debug, Clone)]
pub struct LambertConformalConic {
    ellipsoid: Arc<Ellipsoid>,
    central_meridian: f64,
    false_easting: f64,
    false_northing: f64,
    /// Constante du cône
    n: f64,
    /// Facteur d'échelle F = m₁/(n·t₁ⁿ)
    f: f64,
    /// Rayon à la latitude de référence
    r0: f64,
}

/// m(θ) = cos θ / sqrt(1 - e²·sin²θ) (Snyder 14-15)
fn m(theta: f64, e: f64) -> f64 {
    theta.cos() / (1.0 - e.powi(2) * theta.sin().powi(2)).sqrt()
}

/// t(θ) = tan(π/4 - θ/2) / ((1 - e·sin θ)/(1 + e·sin θ))^(e/2) (Snyder 15-9)
fn t(theta: f64, e: f64) -> f64 {
    let e_sin = e * theta.sin();
    (FRAC_PI_4 - theta / 2.0).tan() / ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)
}

impl LambertConformalConic {
    /// Constante du cône n
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Facteur d'échelle F
    pub fn scale_factor(&self) -> f64 {
        self.f
    }

    /// Rayon r0 à la latitude de référence
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Rayon depuis le sommet du cône: r(θ) = a·F·t(θ)ⁿ
    pub fn radius(&self, theta: f64) -> f64 {
        self.ellipsoid.a() * self.f * t(theta, self.ellipsoid.e()).powf(self.n)
    }
}

impl Projection for LambertConformalConic {
    fn bind(zone: &ZoneParameters) -> Result<Self, SpcsError> {
        let phi1 = zone.standard_parallel_one;
        let phi2 = zone.standard_parallel_two;

        if phi1 == phi2 {
            return Err(SpcsError::EqualStandardParallels { parallel: phi1 });
        }
        check_latitude(phi1)?;
        check_latitude(phi2)?;
        check_latitude(zone.reference_latitude)?;
        check_finite("central meridian", zone.central_meridian)?;

        let e = zone.ellipsoid.e();
        let m1 = m(phi1, e);
        let t1 = t(phi1, e);

        let n = (m1.ln() - m(phi2, e).ln()) / (t1.ln() - t(phi2, e).ln());
        if n == 0.0 || !n.is_finite() {
            return Err(SpcsError::degenerate(format!(
                "cone constant n = {} for standard parallels {} and {} rad",
                n, phi1, phi2
            )));
        }

        let f = m1 / (n * t1.powf(n));
        if f == 0.0 || !f.is_finite() {
            return Err(SpcsError::degenerate(format!("scale factor F = {}", f)));
        }

        let mut lcc = Self {
            ellipsoid: Arc::clone(&zone.ellipsoid),
            central_meridian: zone.central_meridian,
            false_easting: zone.false_easting,
            false_northing: zone.false_northing,
            n,
            f,
            r0: 0.0,
        };
        lcc.r0 = lcc.radius(zone.reference_latitude);
        if lcc.r0 == 0.0 || !lcc.r0.is_finite() {
            return Err(SpcsError::degenerate(format!(
                "reference radius r0 = {}",
                lcc.r0
            )));
        }

        debug!(n, scale_factor = f, r0 = lcc.r0, "Lambert Conformal Conic constants");

        Ok(lcc)
    }

    fn transform(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), SpcsError> {
        check_latitude(latitude)?;
        check_finite("longitude", longitude)?;

        // Pas de normalisation de l'écart en longitude
        let theta = self.n * (longitude - self.central_meridian);
        let r = self.radius(latitude);

        let easting = self.false_easting + r * theta.sin();
        let northing = self.false_northing + self.r0 - r * theta.cos();

        Ok((easting, northing))
    }

    fn name(&self) -> &'static str {
        "lambert_conformal_conic"
    }
}
