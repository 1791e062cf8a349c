//! Closed-form great-circle formulas on a spherical Earth.
//!
//! Every function takes decimal degrees unless its name says otherwise and is
//! pure: no state, no allocation, no panics for any real input. Degenerate
//! geometry (coincident points, poles) falls back to the limiting value.
//!
//! Formulas follow Ed Williams' Aviation Formulary
//! (<http://www.edwilliams.org/avform.htm>) and the Movable Type collection
//! (<https://www.movable-type.co.uk/scripts/latlong.html>).

use crate::prelude::*;

/// Fraction used by [`gc_midpoint`].
pub const DEFAULT_FRACTION: f64 = 0.5;

/// Great-circle distance as an arc angle in radians (haversine).
pub fn gc_distance_rad(lat_deg1: f64, lon_deg1: f64, lat_deg2: f64, lon_deg2: f64) -> f64 {
    let lat1 = lat_deg1.to_radians();
    let lat2 = lat_deg2.to_radians();
    let dlat = (lat_deg2 - lat_deg1).to_radians();
    let dlon = (lon_deg2 - lon_deg1).to_radians();

    let sin_dlat_half = (dlat / 2.0).sin();
    let sin_dlon_half = (dlon / 2.0).sin();
    let a = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance in nautical miles.
pub fn gc_distance_nm(lat_deg1: f64, lon_deg1: f64, lat_deg2: f64, lon_deg2: f64) -> f64 {
    gc_distance_rad(lat_deg1, lon_deg1, lat_deg2, lon_deg2) * Earth::MEAN_RADIUS_NM
}

/// True course in degrees `[0, 360)` leaving point 1 toward point 2.
///
/// Coincident points give 0. From anywhere toward the north pole gives 0,
/// toward the south pole 180.
pub fn initial_bearing_deg(lat_deg1: f64, lon_deg1: f64, lat_deg2: f64, lon_deg2: f64) -> f64 {
    let lat1 = lat_deg1.to_radians();
    let lat2 = lat_deg2.to_radians();
    let dlon = (lon_deg2 - lon_deg1).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    normalize_angle_deg(y.atan2(x).to_degrees())
}

/// True course in degrees `[0, 360)` on arrival at point 2.
pub fn final_bearing_deg(lat_deg1: f64, lon_deg1: f64, lat_deg2: f64, lon_deg2: f64) -> f64 {
    normalize_angle_deg(initial_bearing_deg(lat_deg2, lon_deg2, lat_deg1, lon_deg1) + 180.0)
}

/// Point at `fraction` of the way along the great circle from point 1 to point 2.
///
/// `fraction` is clamped to `[0, 1]`; 0 gives point 1 exactly as given and 1
/// gives point 2. Coincident points also return point 1 as given. Antipodal
/// points have no unique great circle and the result is unspecified.
pub fn gc_intermediate_point(
    lat_deg1: f64,
    lon_deg1: f64,
    lat_deg2: f64,
    lon_deg2: f64,
    fraction: f64,
) -> LatLon {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction == 0.0 {
        return LatLon::new(lat_deg1, lon_deg1);
    }

    let d = gc_distance_rad(lat_deg1, lon_deg1, lat_deg2, lon_deg2);
    let sin_d = d.sin();
    if d == 0.0 || sin_d == 0.0 {
        tracing::trace!(lat_deg1, lon_deg1, lat_deg2, lon_deg2, "coincident points, returning start");
        return LatLon::new(lat_deg1, lon_deg1);
    }

    let a = ((1.0 - fraction) * d).sin() / sin_d;
    let b = (fraction * d).sin() / sin_d;
    let v = LatLon::new(lat_deg1, lon_deg1).to_unit_vector() * a + LatLon::new(lat_deg2, lon_deg2).to_unit_vector() * b;
    LatLon::from_unit_vector(&v)
}

/// Halfway point of the great circle between two points.
pub fn gc_midpoint(lat_deg1: f64, lon_deg1: f64, lat_deg2: f64, lon_deg2: f64) -> LatLon {
    gc_intermediate_point(lat_deg1, lon_deg1, lat_deg2, lon_deg2, DEFAULT_FRACTION)
}

/// Destination reached after `distance_nm` along a great circle leaving at `bearing_deg`.
///
/// Longitude of the result is wrapped into `(-180, 180]`.
pub fn point_at_distance_and_bearing(lat_deg1: f64, lon_deg1: f64, distance_nm: f64, bearing_deg: f64) -> LatLon {
    let lat1 = lat_deg1.to_radians();
    let lon1 = lon_deg1.to_radians();
    let d = distance_nm / Earth::MEAN_RADIUS_NM;
    let theta = bearing_deg.to_radians();

    let sin_lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * theta.cos()).clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lon2 = lon1 + (theta.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * sin_lat2);

    LatLon::new(lat2.to_degrees(), normalize_longitude_deg(lon2.to_degrees()))
}

/// Signed angular distance in radians of point 3 from the great circle through points 1 and 2.
///
/// Positive when point 3 lies to the right of the course from point 1 toward
/// point 2, negative to the left. Multiply by a radius to get a distance.
pub fn cross_track_distance_rad(
    lat_deg1: f64,
    lon_deg1: f64,
    lat_deg2: f64,
    lon_deg2: f64,
    lat_deg3: f64,
    lon_deg3: f64,
) -> f64 {
    let d13 = gc_distance_rad(lat_deg1, lon_deg1, lat_deg3, lon_deg3);
    let theta13 = initial_bearing_deg(lat_deg1, lon_deg1, lat_deg3, lon_deg3).to_radians();
    let theta12 = initial_bearing_deg(lat_deg1, lon_deg1, lat_deg2, lon_deg2).to_radians();
    (d13.sin() * (theta13 - theta12).sin()).asin()
}

/// Angular distance in radians from point 1 to the foot of the perpendicular
/// dropped from point 3 onto the great circle through points 1 and 2.
///
/// Negative when the foot lies behind point 1.
pub fn along_track_distance_rad(
    lat_deg1: f64,
    lon_deg1: f64,
    lat_deg2: f64,
    lon_deg2: f64,
    lat_deg3: f64,
    lon_deg3: f64,
) -> f64 {
    let d13 = gc_distance_rad(lat_deg1, lon_deg1, lat_deg3, lon_deg3);
    let theta13 = initial_bearing_deg(lat_deg1, lon_deg1, lat_deg3, lon_deg3).to_radians();
    let theta12 = initial_bearing_deg(lat_deg1, lon_deg1, lat_deg2, lon_deg2).to_radians();
    along_track_from_parts(d13, theta13 - theta12)
}

/// Shared by [`along_track_distance_rad`] and `Track`, given d13 and θ13 - θ12.
///
/// For a point abeam the start (θ13 - θ12 within rounding of ±90°) the sign
/// test may yield either 0 or -0.
pub(crate) fn along_track_from_parts(d13: f64, relative_course: f64) -> f64 {
    let xtd = (d13.sin() * relative_course.sin()).asin();
    let atd = (d13.cos() / xtd.cos()).clamp(-1.0, 1.0).acos();
    if relative_course.cos() < 0.0 { -atd } else { atd }
}
