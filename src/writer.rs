use std::path::Path;

use tracing::warn;

use crate::{
    error::{Error, Result},
    model::{GeocodedRecord, OUTPUT_COLUMNS},
    DELIMITER,
};

/// Writes the header and one row per record, replacing whatever is at `path`.
pub fn write(path: &Path, records: &[GeocodedRecord]) -> Result<()> {
    warn!(
        "Writing addresses to {}, it will overwrite existing files!",
        path.display()
    );
    let csv_error = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(csv_error)?;
    writer.write_record(OUTPUT_COLUMNS).map_err(csv_error)?;
    for record in records {
        writer.write_record(record.row()).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use geo::Point;

    use super::*;
    use crate::model::{AddressRecord, Outcome};

    fn records() -> Vec<GeocodedRecord> {
        vec![
            GeocodedRecord {
                address: AddressRecord::new("8000", "Zurich", "Bahnhofstrasse", "1"),
                outcome: Outcome::Matched(Point::new(8.54, 47.37)),
            },
            GeocodedRecord {
                address: AddressRecord::new("9000", "St.Gallen", "Unknownstreet", "99"),
                outcome: Outcome::NotMatched,
            },
        ]
    }

    #[test]
    fn writes_header_then_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write(&path, &records()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "postcode;city;street;housenumber;lon;lat\n\
             8000;Zurich;Bahnhofstrasse;1;8.54;47.37\n\
             9000;St.Gallen;Unknownstreet;99;;\n"
        );
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale\n".repeat(100)).unwrap();
        write(&path, &records()[..1]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn empty_collection_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write(&path, &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "postcode;city;street;housenumber;lon;lat\n"
        );
    }

    #[test]
    fn fields_containing_delimiter_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let record = GeocodedRecord {
            address: AddressRecord::new("8000", "Zurich", "Bahnhof;strasse", "1"),
            outcome: Outcome::NotMatched,
        };
        write(&path, &[record]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("8000;Zurich;\"Bahnhof;strasse\";1;;"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write(&dir.path().join("missing").join("out.csv"), &records()).unwrap_err();
        assert!(matches!(err, Error::Csv { .. }), "{err}");
    }
}
