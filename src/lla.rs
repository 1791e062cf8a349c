use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A position on the spherical Earth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// degrees, north positive
    pub latitude: f64,
    /// degrees, east positive
    pub longitude: f64,
}

impl LatLon {
    /// Builds a position without checking it. Formulas accept any real input.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Builds a position, rejecting non-finite values and latitudes beyond the poles.
    ///
    /// Longitude is accepted as given; use [`LatLon::normalized`] to wrap it.
    pub fn checked(latitude: f64, longitude: f64) -> crate::error::Result<Self> {
        if !latitude.is_finite() {
            return Err(GeoError::NonFinite { parameter: "latitude", value: latitude });
        }
        if !longitude.is_finite() {
            return Err(GeoError::NonFinite { parameter: "longitude", value: longitude });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange { value: latitude });
        }
        Ok(Self { latitude, longitude })
    }

    pub fn from_rads(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.to_degrees(),
            longitude: longitude.to_degrees(),
        }
    }

    /// Same position with longitude wrapped into `(-180, 180]`.
    pub fn normalized(&self) -> Self {
        Self {
            latitude: self.latitude,
            longitude: normalize_longitude_deg(self.longitude),
        }
    }

    /// Unit vector from the Earth's center, x toward (0, 0), z toward the north pole.
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        let cos_lat = lat.cos();
        Vector3::new(cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin())
    }

    /// Inverse of [`LatLon::to_unit_vector`]. The vector need not be normalized.
    pub fn from_unit_vector(v: &Vector3<f64>) -> Self {
        let latitude = v.z.atan2((v.x * v.x + v.y * v.y).sqrt());
        let longitude = v.y.atan2(v.x);
        Self::from_rads(latitude, longitude)
    }

    pub fn distance_rad(&self, other: &LatLon) -> f64 {
        gc_distance_rad(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn distance_nm(&self, other: &LatLon) -> f64 {
        gc_distance_nm(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn distance(&self, other: &LatLon, unit: DistanceUnit) -> f64 {
        unit.from_radians(self.distance_rad(other))
    }

    pub fn initial_bearing(&self, other: &LatLon) -> f64 {
        initial_bearing_deg(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn final_bearing(&self, other: &LatLon) -> f64 {
        final_bearing_deg(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn intermediate(&self, other: &LatLon, fraction: f64) -> LatLon {
        gc_intermediate_point(self.latitude, self.longitude, other.latitude, other.longitude, fraction)
    }

    pub fn midpoint(&self, other: &LatLon) -> LatLon {
        self.intermediate(other, DEFAULT_FRACTION)
    }

    pub fn destination(&self, distance_nm: f64, bearing_deg: f64) -> LatLon {
        point_at_distance_and_bearing(self.latitude, self.longitude, distance_nm, bearing_deg)
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

impl From<LatLon> for (f64, f64) {
    fn from(p: LatLon) -> Self {
        (p.latitude, p.longitude)
    }
}
