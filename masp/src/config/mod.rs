//! Configuration des zones (JSON)
//!
//! Les angles sont exprimés en degrés dans la configuration et convertis en
//! radians à la construction de la zone.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spcs::{Ellipsoid, LambertZone, ZoneParameters};
use tracing::debug;

/// Famille de projection d'une zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    #[default]
    LambertConformalConic,
}

/// Paramètres de l'ellipsoïde
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EllipsoidConfig {
    /// Demi-grand axe en mètres
    pub a: f64,
    /// Aplatissement
    pub f: f64,
}

/// Définition d'une zone
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ZoneConfig {
    pub name: String,

    #[serde(default)]
    pub projection: ProjectionKind,

    pub ellipsoid: EllipsoidConfig,

    /// Méridien central (degrés)
    pub central_meridian: f64,

    /// Latitude de référence (degrés)
    pub reference_latitude: f64,

    /// Premier parallèle standard (degrés)
    pub standard_parallel_one: f64,

    /// Deuxième parallèle standard (degrés)
    pub standard_parallel_two: f64,

    /// False easting (mètres)
    pub false_easting: f64,

    /// False northing (mètres)
    pub false_northing: f64,
}

impl ZoneConfig {
    /// Presets embarqués
    pub const PRESETS: [&'static str; 2] = ["ma-mainland", "ma-island"];

    /// Charge une configuration depuis du JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse zone config JSON")
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "ma-mainland" => Self::load_embedded(include_str!("presets/ma_mainland.json")),
            "ma-island" => Self::load_embedded(include_str!("presets/ma_island.json")),
            _ => anyhow::bail!(
                "Unknown preset: {}. Use: {}",
                preset,
                Self::PRESETS.join(", ")
            ),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded zone config")
    }

    /// Sérialise la configuration en JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize zone config")
    }

    /// Paramètres de zone, angles convertis en radians
    pub fn to_parameters(&self) -> ZoneParameters {
        ZoneParameters::new(
            Arc::new(Ellipsoid::new(self.ellipsoid.a, self.ellipsoid.f)),
            self.central_meridian.to_radians(),
            self.reference_latitude.to_radians(),
            self.standard_parallel_one.to_radians(),
            self.standard_parallel_two.to_radians(),
            self.false_easting,
            self.false_northing,
        )
    }

    /// Construit la zone décrite par la configuration
    pub fn build(&self) -> Result<LambertZone> {
        debug!(name = %self.name, projection = ?self.projection, "Construction de la zone");

        match self.projection {
            ProjectionKind::LambertConformalConic => LambertZone::new(self.to_parameters())
                .with_context(|| format!("Invalid zone definition: {}", self.name)),
        }
    }
}
