use serde::{Deserialize, Serialize};

/// One row of the station export, keyed by the upstream column names.
/// Coordinates arrive as decimal-comma strings and stay raw until render time.
#[derive(Deserialize, Debug, Clone)]
pub struct StationRecord {
    #[serde(rename = "Globale ID")]
    pub global_id: String,
    #[serde(rename = "Name mit Ort")]
    pub name: String,
    #[serde(rename = "X-Koordinate")]
    pub x_coordinate: String,
    #[serde(rename = "Y-Koordinate")]
    pub y_coordinate: String,
}

/// One origin station's computed trip to the current destination.
/// A duration of -1 means the fetcher found no trip.
#[derive(Deserialize, Debug, Clone)]
pub struct StationVisit {
    pub station: StationRecord,
    pub duration: f64,
    pub changes: u32,
    pub transportation: Vec<String>,
}

impl StationVisit {
    /// Y is latitude and X is longitude in the source data.
    pub fn position(&self) -> LatLng {
        LatLng {
            latitude: parse_decimal_comma(&self.station.y_coordinate),
            longitude: parse_decimal_comma(&self.station.x_coordinate),
        }
    }

    pub fn transportation_summary(&self) -> String {
        self.transportation.join(", ")
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Destination {
    pub id: String,
    pub name: String,
    coordinates: [String; 2],
}

impl Destination {
    pub fn position(&self) -> LatLng {
        LatLng {
            latitude: parse_decimal_comma(&self.coordinates[0]),
            longitude: parse_decimal_comma(&self.coordinates[1]),
        }
    }
}

/// One navigation entry: a destination plus the visits from every origin
/// station. Entries in `stations` may be null placeholders.
#[derive(Deserialize, Debug, Clone)]
pub struct ItemGroup {
    pub destination: Destination,
    pub stations: Vec<Option<StationVisit>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// The station export uses German decimal commas. Malformed input turns into
/// NaN instead of an error; validation is the data producer's job.
pub fn parse_decimal_comma(raw: &str) -> f64 {
    raw.replace(',', ".").parse().unwrap_or(f64::NAN)
}
