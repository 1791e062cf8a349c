/// Wraps an angle into a compass bearing in `[0, 360)`.
///
/// Uses a floored modulo, so negative inputs wrap forward: `-137.446` gives `222.554`.
pub fn normalize_angle_deg(angle_deg: f64) -> f64 {
    let wrapped = angle_deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wraps a longitude into `(-180, 180]`.
pub fn normalize_longitude_deg(lon_deg: f64) -> f64 {
    let wrapped = (lon_deg + 540.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 { 180.0 } else { wrapped }
}
