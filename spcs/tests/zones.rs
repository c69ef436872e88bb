//! Tests d'intégration : zones génériques et familles de projection

use std::sync::Arc;

use spcs::{Ellipsoid, LambertZone, Projection, SpcsError, ZoneDefinition, ZoneParameters};

/// Projection équirectangulaire minimale, pour vérifier qu'une zone
/// accepte n'importe quelle famille de projection
struct Equirectangular {
    a: f64,
    central_meridian: f64,
    false_easting: f64,
    false_northing: f64,
}

impl Projection for Equirectangular {
    fn bind(zone: &ZoneParameters) -> Result<Self, SpcsError> {
        Ok(Self {
            a: zone.ellipsoid.a(),
            central_meridian: zone.central_meridian,
            false_easting: zone.false_easting,
            false_northing: zone.false_northing,
        })
    }

    fn transform(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), SpcsError> {
        Ok((
            self.false_easting + self.a * (longitude - self.central_meridian),
            self.false_northing + self.a * latitude,
        ))
    }

    fn name(&self) -> &'static str {
        "equirectangular"
    }
}

/// Connecticut (FIPS 0600), NAD83 / GRS 80
fn connecticut(ellipsoid: Arc<Ellipsoid>) -> ZoneParameters {
    ZoneParameters::new(
        ellipsoid,
        (-72.75_f64).to_radians(),
        (40.0 + 50.0 / 60.0_f64).to_radians(),
        (41.0 + 12.0 / 60.0_f64).to_radians(),
        (41.0 + 52.0 / 60.0_f64).to_radians(),
        304800.6096,
        152400.3048,
    )
}

#[test]
fn test_custom_projection_family() {
    let zone: ZoneDefinition<Equirectangular> =
        ZoneDefinition::new(connecticut(Arc::new(Ellipsoid::grs80()))).unwrap();

    assert_eq!(zone.projection().name(), "equirectangular");
    let (x, y) = zone.transform(0.0, (-72.75_f64).to_radians()).unwrap();
    assert_eq!(x, 304800.6096);
    assert_eq!(y, 152400.3048);
}

#[test]
fn test_connecticut_origin() {
    let zone = LambertZone::new(connecticut(Arc::new(Ellipsoid::grs80()))).unwrap();
    let params = zone.parameters();

    let (x, y) = zone
        .transform(params.reference_latitude, params.central_meridian)
        .unwrap();
    assert_eq!(x, params.false_easting);
    assert!((y - params.false_northing).abs() < 1e-8, "y={}", y);

    // Hartford: au nord-est de l'origine
    let (x, y) = zone
        .transform(41.7637_f64.to_radians(), (-72.6851_f64).to_radians())
        .unwrap();
    assert!(x > params.false_easting, "x={}", x);
    assert!(y > params.false_northing + 90000.0, "y={}", y);
}

#[test]
fn test_zones_share_ellipsoid() {
    let grs80 = Arc::new(Ellipsoid::grs80());
    let a = LambertZone::new(connecticut(Arc::clone(&grs80))).unwrap();
    let b = LambertZone::new(connecticut(Arc::clone(&grs80))).unwrap();

    // Zone, projection et appelant partagent le même ellipsoïde
    assert!(Arc::strong_count(&grs80) >= 5);

    let lat = 41.5_f64.to_radians();
    let lon = (-72.0_f64).to_radians();
    assert_eq!(a.transform(lat, lon).unwrap(), b.transform(lat, lon).unwrap());
}

#[test]
fn test_swapped_parallels_same_cone() {
    let grs80 = Arc::new(Ellipsoid::grs80());
    let params = connecticut(Arc::clone(&grs80));
    let mut swapped = params.clone();
    std::mem::swap(
        &mut swapped.standard_parallel_one,
        &mut swapped.standard_parallel_two,
    );

    let zone = LambertZone::new(params).unwrap();
    let swapped = LambertZone::new(swapped).unwrap();

    let n1 = zone.projection().n();
    let n2 = swapped.projection().n();
    assert!((n1 - n2).abs() < 1e-12, "n1={} n2={}", n1, n2);
}
