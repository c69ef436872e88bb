//! Ellipsoïde de référence
//!
//! L'excentricité `e` est toujours dérivée de l'aplatissement :
//! `e = sqrt(2f - f²)`. Il n'existe pas de setter indépendant pour `e`.

use crate::SpcsError;

/// Ellipsoïde défini par son demi-grand axe et son aplatissement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Demi-grand axe (rayon équatorial) en mètres
    a: f64,
    /// Demi-petit axe en mètres, si renseigné
    b: Option<f64>,
    /// Aplatissement: (a - b) / a
    f: f64,
    /// Première excentricité
    e: f64,
}

impl Ellipsoid {
    /// Crée un ellipsoïde et calcule immédiatement son excentricité.
    ///
    /// Aucune validation de `a` ni de `f` : des valeurs absurdes se propagent
    /// dans les calculs de projection.
    pub fn new(a: f64, f: f64) -> Self {
        Self {
            a,
            b: None,
            f,
            e: eccentricity(f),
        }
    }

    /// Ellipsoïde GRS 80
    pub fn grs80() -> Self {
        Self::new(GRS80::A, GRS80::F)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    /// Demi-petit axe tel que renseigné par `set_b`
    pub fn b(&self) -> Option<f64> {
        self.b
    }

    pub fn f(&self) -> f64 {
        self.f
    }

    /// Première excentricité
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Première excentricité au carré
    pub fn e2(&self) -> f64 {
        self.e * self.e
    }

    /// Demi-petit axe : valeur renseignée, sinon `a(1 - f)`
    pub fn semi_minor_axis(&self) -> f64 {
        self.b.unwrap_or(self.a * (1.0 - self.f))
    }

    /// Modifie le demi-grand axe et oublie un `b` renseigné
    pub fn set_a(&mut self, a: f64) {
        self.a = a;
        self.b = None;
    }

    pub fn set_b(&mut self, b: f64) {
        self.b = Some(b);
    }

    /// Modifie l'aplatissement, recalcule l'excentricité et oublie un `b` renseigné
    pub fn set_f(&mut self, f: f64) {
        self.f = f;
        self.e = eccentricity(f);
        self.b = None;
    }

    /// Calcule l'aplatissement depuis `a` et `b`, puis l'excentricité.
    ///
    /// # Errors
    ///
    /// `SpcsError::Precondition` si `b` n'est pas renseigné ou si `a` est nul.
    pub fn compute_f(&mut self) -> Result<(), SpcsError> {
        let b = self
            .b
            .ok_or_else(|| SpcsError::precondition("compute_f", "semi-minor axis b is not set"))?;
        if self.a == 0.0 || !self.a.is_finite() {
            return Err(SpcsError::precondition(
                "compute_f",
                format!("semi-major axis a must be non-zero and finite (got {})", self.a),
            ));
        }

        // `b` reste cohérent avec le nouvel aplatissement
        self.f = (self.a - b) / self.a;
        self.e = eccentricity(self.f);
        Ok(())
    }

    /// Recalcule l'excentricité depuis l'aplatissement.
    ///
    /// # Errors
    ///
    /// `SpcsError::Precondition` si `f` est nul ou non fini.
    pub fn compute_e(&mut self) -> Result<(), SpcsError> {
        if self.f == 0.0 || !self.f.is_finite() {
            return Err(SpcsError::precondition(
                "compute_e",
                format!("flattening f must be non-zero and finite (got {})", self.f),
            ));
        }

        self.e = eccentricity(self.f);
        Ok(())
    }
}

/// e = sqrt(2f - f²)
fn eccentricity(f: f64) -> f64 {
    (2.0 * f - f.powi(2)).sqrt()
}

/// Ellipsoïde GRS 80 (Geodetic Reference System 1980)
pub struct GRS80;

impl GRS80 {
    /// Demi-grand axe en mètres
    pub const A: f64 = 6378137.0;

    /// Aplatissement
    pub const F: f64 = 0.003352810681225;
}
