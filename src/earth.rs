pub struct Earth {}

impl Earth {
    /// WGS-84 arithmetic mean radius, meters
    pub const MEAN_RADIUS_M: f64 = 6371008.7714;
    pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
    pub const METERS_PER_STATUTE_MILE: f64 = 1609.344;
    pub const MEAN_RADIUS_NM: f64 = Earth::MEAN_RADIUS_M / Earth::METERS_PER_NAUTICAL_MILE;
    pub const MEAN_RADIUS_KM: f64 = Earth::MEAN_RADIUS_M / 1000.0;
    pub const MEAN_RADIUS_MI: f64 = Earth::MEAN_RADIUS_M / Earth::METERS_PER_STATUTE_MILE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_radius_in_nautical_miles() {
        assert_abs_diff_eq!(Earth::MEAN_RADIUS_NM, 3440.069, epsilon = 1e-3);
    }

    #[test]
    fn test_mean_radius_in_statute_miles() {
        assert_abs_diff_eq!(Earth::MEAN_RADIUS_MI, 3958.761, epsilon = 1e-3);
    }
}
