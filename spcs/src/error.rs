//! Types d'erreurs pour le crate spcs

use thiserror::Error;

/// Erreurs pouvant survenir lors de la définition d'une zone ou d'une transformation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpcsError {
    /// Les deux parallèles standards sont identiques : constante du cône indéfinie
    #[error("Standard parallels must differ (both are {parallel} rad)")]
    EqualStandardParallels { parallel: f64 },

    /// Constantes de projection nulles ou non finies
    #[error("Degenerate cone: {reason}")]
    DegenerateCone { reason: String },

    /// Dérivation de l'ellipsoïde appelée sans ses paramètres d'entrée
    #[error("Precondition not met for {operation}: {reason}")]
    Precondition {
        operation: &'static str,
        reason: String,
    },

    /// Latitude hors du domaine de la projection (|φ| >= π/2)
    #[error("Latitude out of domain: {latitude} rad")]
    LatitudeOutOfDomain { latitude: f64 },

    /// Entrée non finie (NaN ou infini)
    #[error("Non-finite {what}: {value}")]
    NonFiniteInput { what: &'static str, value: f64 },
}

impl SpcsError {
    /// Crée une erreur de cône dégénéré avec contexte
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateCone {
            reason: reason.into(),
        }
    }

    /// Crée une erreur de précondition non remplie
    pub fn precondition(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Precondition {
            operation,
            reason: reason.into(),
        }
    }
}
