use serde::Serialize;

use crate::formula::along_track_from_parts;
use crate::prelude::*;

/// A great-circle leg from `start` toward `end`, with its departure course cached.
///
/// Cross-track values are signed: positive right of course, negative left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Track {
    pub start: LatLon,
    pub end: LatLon,
    /// radians
    course: f64,
}

impl Track {
    pub fn new(start: LatLon, end: LatLon) -> Self {
        Track {
            start,
            end,
            course: start.initial_bearing(&end).to_radians(),
        }
    }

    /// Departure course in degrees `[0, 360)`.
    pub fn course_deg(&self) -> f64 {
        self.course.to_degrees()
    }

    pub fn length_rad(&self) -> f64 {
        self.start.distance_rad(&self.end)
    }

    pub fn length_nm(&self) -> f64 {
        self.start.distance_nm(&self.end)
    }

    fn parts(&self, point: &LatLon) -> (f64, f64) {
        let d13 = self.start.distance_rad(point);
        let theta13 = self.start.initial_bearing(point).to_radians();
        (d13, theta13 - self.course)
    }

    pub fn cross_track_rad(&self, point: &LatLon) -> f64 {
        let (d13, relative_course) = self.parts(point);
        (d13.sin() * relative_course.sin()).asin()
    }

    pub fn cross_track_nm(&self, point: &LatLon) -> f64 {
        self.cross_track_rad(point) * Earth::MEAN_RADIUS_NM
    }

    pub fn along_track_rad(&self, point: &LatLon) -> f64 {
        let (d13, relative_course) = self.parts(point);
        along_track_from_parts(d13, relative_course)
    }

    pub fn along_track_nm(&self, point: &LatLon) -> f64 {
        self.along_track_rad(point) * Earth::MEAN_RADIUS_NM
    }

    /// Position `distance_nm` along the track from its start.
    pub fn point_along(&self, distance_nm: f64) -> LatLon {
        self.start.destination(distance_nm, self.course_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn lax_jfk() -> Track {
        Track::new(
            LatLon::new(33.0 + 57.0 / 60.0, -(118.0 + 24.0 / 60.0)),
            LatLon::new(40.0 + 38.0 / 60.0, -(73.0 + 47.0 / 60.0)),
        )
    }

    #[test]
    fn test_course() {
        assert_abs_diff_eq!(lax_jfk().course_deg(), 65.892, epsilon = 1e-3);
    }

    #[test]
    fn test_matches_free_functions() {
        let track = lax_jfk();
        let d = LatLon::new(34.5, -116.5);
        let (s, e) = (track.start, track.end);
        assert_abs_diff_eq!(
            track.cross_track_rad(&d),
            cross_track_distance_rad(s.latitude, s.longitude, e.latitude, e.longitude, d.latitude, d.longitude),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            track.along_track_rad(&d),
            along_track_distance_rad(s.latitude, s.longitude, e.latitude, e.longitude, d.latitude, d.longitude),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_offsets_in_nautical_miles() {
        let track = lax_jfk();
        let d = LatLon::new(34.5, -116.5);
        assert_abs_diff_eq!(track.cross_track_nm(&d), 7.457, epsilon = 1e-2);
        assert_abs_diff_eq!(track.along_track_nm(&d), 99.656, epsilon = 1e-2);
    }

    #[test]
    fn test_length() {
        let track = lax_jfk();
        let (s, e) = (track.start, track.end);
        assert_eq!(track.length_rad(), gc_distance_rad(s.latitude, s.longitude, e.latitude, e.longitude));
        assert_abs_diff_eq!(track.length_nm(), track.length_rad() * Earth::MEAN_RADIUS_NM, epsilon = 1e-9);
    }

    #[test]
    fn test_point_along_reaches_end() {
        let track = lax_jfk();
        let end = track.point_along(track.length_nm());
        assert_abs_diff_eq!(end.latitude, track.end.latitude, epsilon = 1e-9);
        assert_abs_diff_eq!(end.longitude, track.end.longitude, epsilon = 1e-9);
    }

    #[test]
    fn test_point_on_track_has_no_offset() {
        let track = lax_jfk();
        let p = track.point_along(500.0);
        assert_abs_diff_eq!(track.cross_track_nm(&p), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(track.along_track_nm(&p), 500.0, epsilon = 1e-6);
    }
}
