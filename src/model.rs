use std::fmt;

use geo::Point;

pub const INPUT_COLUMNS: [&str; 4] = ["postcode", "city", "street", "housenumber"];
pub const OUTPUT_COLUMNS: [&str; 6] = ["postcode", "city", "street", "housenumber", "lon", "lat"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRecord {
    pub postcode: String,
    pub city: String,
    pub street: String,
    pub housenumber: String,
}

impl AddressRecord {
    pub fn new(
        postcode: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        housenumber: impl Into<String>,
    ) -> Self {
        Self {
            postcode: postcode.into(),
            city: city.into(),
            street: street.into(),
            housenumber: housenumber.into(),
        }
    }

    /// Fields in `INPUT_COLUMNS` order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.postcode, &self.city, &self.street, &self.housenumber]
    }
}

// city street housenumber, as shown in progress lines
impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.city, self.street, self.housenumber)
    }
}

/// Result of looking up a single address. `Point` is `x = lon, y = lat`.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Matched(Point),
    NotMatched,
    Failed(String),
}

impl Outcome {
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Matched(x) => Some(*x),
            Self::NotMatched | Self::Failed(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeocodedRecord {
    pub address: AddressRecord,
    pub outcome: Outcome,
}

impl GeocodedRecord {
    /// Fields in `OUTPUT_COLUMNS` order, coordinates empty when absent.
    pub fn row(&self) -> [String; 6] {
        let (lon, lat) = match self.outcome.point() {
            Some(x) => (x.x().to_string(), x.y().to_string()),
            None => (String::new(), String::new()),
        };
        let [postcode, city, street, housenumber] = self.address.fields();
        [
            postcode.to_string(),
            city.to_string(),
            street.to_string(),
            housenumber.to_string(),
            lon,
            lat,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zurich() -> AddressRecord {
        AddressRecord::new("8000", "Zurich", "Bahnhofstrasse", "1")
    }

    #[test]
    fn output_columns_extend_input_columns() {
        assert_eq!(OUTPUT_COLUMNS[..4], INPUT_COLUMNS);
        assert_eq!(OUTPUT_COLUMNS[4..], ["lon", "lat"]);
    }

    #[test]
    fn matched_row_has_lon_then_lat() {
        let record = GeocodedRecord {
            address: zurich(),
            outcome: Outcome::Matched(Point::new(8.54, 47.37)),
        };
        assert_eq!(
            record.row(),
            ["8000", "Zurich", "Bahnhofstrasse", "1", "8.54", "47.37"].map(String::from)
        );
    }

    #[test]
    fn unmatched_and_failed_rows_have_empty_coordinates() {
        for outcome in [Outcome::NotMatched, Outcome::Failed("timeout".into())] {
            let record = GeocodedRecord {
                address: zurich(),
                outcome,
            };
            let row = record.row();
            assert_eq!(row[4], "");
            assert_eq!(row[5], "");
        }
    }

    #[test]
    fn display_is_city_street_housenumber() {
        assert_eq!(zurich().to_string(), "Zurich Bahnhofstrasse 1");
    }
}
