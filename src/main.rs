use anyhow::{Context, Result};
use avform::prelude::*;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Distance unit for inputs and outputs
    #[arg(long, global = true, default_value = "nm")]
    unit: DistanceUnit,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Reject latitudes outside [-90, 90] and non-finite values
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

/// Positions are decimal degrees, north and east positive.
#[derive(Subcommand, Debug)]
enum Command {
    /// Great-circle distance between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
    /// Initial and final true course from point 1 to point 2
    Bearing {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
    /// Point a fraction of the way from point 1 to point 2
    Intermediate {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
        /// 0 is point 1, 1 is point 2
        #[arg(long, default_value_t = DEFAULT_FRACTION)]
        fraction: f64,
    },
    /// Point reached from a start position given a distance and a true course
    Destination {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        distance: f64,
        #[arg(allow_negative_numbers = true)]
        bearing: f64,
    },
    /// Cross-track and along-track offset of point 3 from the course point 1 to point 2
    CrossTrack {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
        #[arg(allow_negative_numbers = true)]
        lat3: f64,
        #[arg(allow_negative_numbers = true)]
        lon3: f64,
    },
    /// Wrap an angle to a compass bearing and to a longitude
    Normalize {
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },
}

#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Report {
    Distance { radians: f64, distance: f64, unit: DistanceUnit },
    Bearing { initial_deg: f64, final_deg: f64 },
    Position { latitude: f64, longitude: f64 },
    CrossTrack { cross_track_rad: f64, cross_track: f64, along_track_rad: f64, along_track: f64, unit: DistanceUnit },
    Normalize { bearing_deg: f64, longitude_deg: f64 },
}

impl Report {
    fn to_text(&self) -> String {
        match self {
            Report::Distance { radians, distance, unit } => format!("{distance:.3} {unit} ({radians:.8} rad)"),
            Report::Bearing { initial_deg, final_deg } => {
                format!("initial {initial_deg:.3}°, final {final_deg:.3}°")
            }
            Report::Position { latitude, longitude } => format!("{latitude:.6}, {longitude:.6}"),
            Report::CrossTrack { cross_track, along_track, unit, .. } => {
                let side = if *cross_track < 0.0 { "left" } else { "right" };
                format!("cross-track {:.3} {unit} {side}, along-track {along_track:.3} {unit}", cross_track.abs())
            }
            Report::Normalize { bearing_deg, longitude_deg } => {
                format!("bearing {bearing_deg:.6}°, longitude {longitude_deg:.6}°")
            }
        }
    }
}

struct App {
    unit: DistanceUnit,
    strict: bool,
}

impl App {
    fn point(&self, latitude: f64, longitude: f64) -> Result<LatLon> {
        if self.strict {
            LatLon::checked(latitude, longitude).with_context(|| format!("Invalid position {latitude}, {longitude}"))
        } else {
            Ok(LatLon::new(latitude, longitude))
        }
    }

    fn evaluate(&self, command: &Command) -> Result<Report> {
        let report = match *command {
            Command::Distance { lat1, lon1, lat2, lon2 } => {
                let radians = self.point(lat1, lon1)?.distance_rad(&self.point(lat2, lon2)?);
                Report::Distance {
                    radians,
                    distance: self.unit.from_radians(radians),
                    unit: self.unit,
                }
            }
            Command::Bearing { lat1, lon1, lat2, lon2 } => {
                let (from, to) = (self.point(lat1, lon1)?, self.point(lat2, lon2)?);
                Report::Bearing {
                    initial_deg: from.initial_bearing(&to),
                    final_deg: from.final_bearing(&to),
                }
            }
            Command::Intermediate { lat1, lon1, lat2, lon2, fraction } => {
                if !(0.0..=1.0).contains(&fraction) {
                    debug!(fraction, "fraction outside [0, 1] will be clamped");
                }
                let p = self.point(lat1, lon1)?.intermediate(&self.point(lat2, lon2)?, fraction);
                Report::Position { latitude: p.latitude, longitude: p.longitude }
            }
            Command::Destination { lat, lon, distance, bearing } => {
                let distance_nm = DistanceUnit::NauticalMiles.from_radians(self.unit.to_radians(distance));
                debug!(distance, unit = %self.unit, distance_nm, "converted distance");
                let p = self.point(lat, lon)?.destination(distance_nm, bearing);
                Report::Position { latitude: p.latitude, longitude: p.longitude }
            }
            Command::CrossTrack { lat1, lon1, lat2, lon2, lat3, lon3 } => {
                let track = Track::new(self.point(lat1, lon1)?, self.point(lat2, lon2)?);
                let p = self.point(lat3, lon3)?;
                debug!(course_deg = track.course_deg(), "track course");
                let cross_track_rad = track.cross_track_rad(&p);
                let along_track_rad = track.along_track_rad(&p);
                Report::CrossTrack {
                    cross_track_rad,
                    cross_track: self.unit.from_radians(cross_track_rad),
                    along_track_rad,
                    along_track: self.unit.from_radians(along_track_rad),
                    unit: self.unit,
                }
            }
            Command::Normalize { angle } => Report::Normalize {
                bearing_deg: normalize_angle_deg(angle),
                longitude_deg: normalize_longitude_deg(angle),
            },
        };
        Ok(report)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let app = App { unit: args.unit, strict: args.strict };
    let report = app.evaluate(&args.command)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).context("Failed to encode report")?);
    } else {
        println!("{}", report.to_text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn app(unit: DistanceUnit) -> App {
        App { unit, strict: true }
    }

    #[test]
    fn test_args_parse_negative_coordinates() {
        let args = Args::try_parse_from(["avform", "--unit", "km", "distance", "50", "10", "-10", "-30"]).unwrap();
        assert_eq!(args.unit, DistanceUnit::Kilometers);
        assert!(matches!(args.command, Command::Distance { lat2, lon2, .. } if lat2 == -10.0 && lon2 == -30.0));
    }

    #[test]
    fn test_args_unit_parses_through_from_str() {
        let args = Args::try_parse_from(["avform", "normalize", "-137.446"]).unwrap();
        assert_eq!(args.unit, DistanceUnit::NauticalMiles);
        let args = Args::try_parse_from(["avform", "bearing", "0", "0", "1", "1", "--unit", "statute-miles"]).unwrap();
        assert_eq!(args.unit, DistanceUnit::StatuteMiles);
        assert!(Args::try_parse_from(["avform", "--unit", "furlong", "normalize", "0"]).is_err());
    }

    #[test]
    fn test_distance_report_in_kilometers() {
        let command = Command::Distance { lat1: 50.0, lon1: 10.0, lat2: -10.0, lon2: -30.0 };
        let Report::Distance { distance, .. } = app(DistanceUnit::Kilometers).evaluate(&command).unwrap() else {
            panic!("expected a distance report");
        };
        assert_abs_diff_eq!(distance, 4166.596 * 1.852, epsilon = 0.5);
    }

    #[test]
    fn test_destination_converts_units() {
        let command = Command::Destination { lat: -10.0, lon: -30.0, distance: 1852.0, bearing: 200.0 };
        let Report::Position { latitude, longitude } = app(DistanceUnit::Kilometers).evaluate(&command).unwrap() else {
            panic!("expected a position report");
        };
        assert_abs_diff_eq!(latitude, -25.569, epsilon = 1e-2);
        assert_abs_diff_eq!(longitude, -36.239, epsilon = 1e-2);
    }

    #[test]
    fn test_strict_rejects_out_of_range_latitude() {
        let command = Command::Bearing { lat1: 95.0, lon1: 0.0, lat2: 0.0, lon2: 0.0 };
        assert!(app(DistanceUnit::NauticalMiles).evaluate(&command).is_err());
    }

    #[test]
    fn test_report_json_is_tagged() {
        let report = Report::Normalize { bearing_deg: 222.554, longitude_deg: -137.446 };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "normalize");
        assert_eq!(json["bearing_deg"], 222.554);
    }

    #[test]
    fn test_cross_track_text_names_side() {
        let command = Command::CrossTrack { lat1: 0.0, lon1: 0.0, lat2: 0.0, lon2: 10.0, lat3: 1.0, lon3: 5.0 };
        let report = app(DistanceUnit::NauticalMiles).evaluate(&command).unwrap();
        assert!(report.to_text().contains("left"));
    }
}
