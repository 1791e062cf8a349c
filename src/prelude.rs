pub use nalgebra::Vector3;
pub use crate::angle::{normalize_angle_deg, normalize_longitude_deg};
pub use crate::earth::Earth;
pub use crate::error::GeoError;
pub use crate::formula::{
    DEFAULT_FRACTION, along_track_distance_rad, cross_track_distance_rad, final_bearing_deg, gc_distance_nm,
    gc_distance_rad, gc_intermediate_point, gc_midpoint, initial_bearing_deg, point_at_distance_and_bearing,
};
pub use crate::lla::LatLon;
pub use crate::track::Track;
pub use crate::units::DistanceUnit;
