use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Linear unit an angular great-circle distance is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    NauticalMiles,
    Kilometers,
    Meters,
    StatuteMiles,
}

impl DistanceUnit {
    /// Mean Earth radius in this unit.
    pub fn radius(self) -> f64 {
        match self {
            DistanceUnit::NauticalMiles => Earth::MEAN_RADIUS_NM,
            DistanceUnit::Kilometers => Earth::MEAN_RADIUS_KM,
            DistanceUnit::Meters => Earth::MEAN_RADIUS_M,
            DistanceUnit::StatuteMiles => Earth::MEAN_RADIUS_MI,
        }
    }

    pub fn from_radians(self, angular_distance: f64) -> f64 {
        angular_distance * self.radius()
    }

    pub fn to_radians(self, distance: f64) -> f64 {
        distance / self.radius()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::NauticalMiles => "nm",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
            DistanceUnit::StatuteMiles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nm" | "nmi" | "nautical-miles" | "nautical_miles" => Ok(DistanceUnit::NauticalMiles),
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "m" | "meters" | "metres" => Ok(DistanceUnit::Meters),
            "mi" | "miles" | "statute-miles" | "statute_miles" => Ok(DistanceUnit::StatuteMiles),
            _ => Err(GeoError::UnknownUnit(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_one_nautical_mile_in_meters() {
        let rad = DistanceUnit::NauticalMiles.to_radians(1.0);
        assert_abs_diff_eq!(DistanceUnit::Meters.from_radians(rad), 1852.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_circumference() {
        let km = DistanceUnit::Kilometers.from_radians(core::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(km, 10007.557, epsilon = 1e-3);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("NM".parse::<DistanceUnit>(), Ok(DistanceUnit::NauticalMiles));
        assert_eq!(" km ".parse::<DistanceUnit>(), Ok(DistanceUnit::Kilometers));
        assert_eq!("metres".parse::<DistanceUnit>(), Ok(DistanceUnit::Meters));
        assert_eq!("mi".parse::<DistanceUnit>(), Ok(DistanceUnit::StatuteMiles));
        assert_eq!(
            "furlong".parse::<DistanceUnit>(),
            Err(GeoError::UnknownUnit("furlong".to_owned()))
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&DistanceUnit::StatuteMiles).unwrap(), "\"statute_miles\"");
        let unit: DistanceUnit = serde_json::from_str("\"kilometers\"").unwrap();
        assert_eq!(unit, DistanceUnit::Kilometers);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for unit in [
            DistanceUnit::NauticalMiles,
            DistanceUnit::Kilometers,
            DistanceUnit::Meters,
            DistanceUnit::StatuteMiles,
        ] {
            assert_eq!(unit.to_string().parse::<DistanceUnit>(), Ok(unit));
        }
    }
}
