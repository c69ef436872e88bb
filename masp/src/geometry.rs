//! Transformation de géométries `geo` et de lots de points

use geo::{Coord, Geometry, MapCoords};
use rayon::prelude::*;
use spcs::{Geographic, SpcsError};
use tracing::debug;

use crate::grid::{GridUnit, MassachusettsMainlandGrid};

impl MassachusettsMainlandGrid {
    /// Transforme une géométrie en coordonnées planes.
    ///
    /// Les coordonnées d'entrée sont en degrés, ordre EPSG:4326 :
    /// `x` = longitude, `y` = latitude. La première erreur interrompt la
    /// transformation.
    pub fn transform_geometry(
        &self,
        geom: &Geometry<f64>,
        unit: GridUnit,
    ) -> Result<Geometry<f64>, SpcsError> {
        geom.try_map_coords(|c: Coord<f64>| -> Result<Coord<f64>, SpcsError> {
            let (x, y) = self.transform(c.y.to_radians(), c.x.to_radians(), unit)?;
            Ok(Coord { x, y })
        })
    }

    /// Transforme un lot de points en parallèle (rayon), ordre conservé
    pub fn transform_batch(
        &self,
        points: &[Geographic],
        unit: GridUnit,
    ) -> Result<Vec<(f64, f64)>, SpcsError> {
        debug!(points = points.len(), unit = ?unit, "Transformation par lot");

        points
            .par_iter()
            .map(|p| self.transform(p.lat, p.lon, unit))
            .collect()
    }
}
