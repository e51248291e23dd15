use std::{fs, path::Path};

use csv::StringRecord;
use itertools::Itertools;
use tracing::info;

use crate::{
    error::{Error, Result},
    model::{AddressRecord, INPUT_COLUMNS},
    DELIMITER,
};

/// Reads the address file at `path`. The first line must be exactly the
/// `INPUT_COLUMNS` header, every later line exactly that many fields.
pub fn read(path: &Path) -> Result<Vec<AddressRecord>> {
    info!("Reading input file {} ...", path.display());
    let csv_error = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };
    let header_error = || Error::Header {
        path: path.to_path_buf(),
        expected: INPUT_COLUMNS.iter().join(";"),
    };

    let field_count_error = |line, found| Error::FieldCount {
        path: path.to_path_buf(),
        line,
        expected: INPUT_COLUMNS.len(),
        found,
    };

    let data = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());
    let mut rows = reader.records();

    let header = rows.next().ok_or_else(header_error)?.map_err(csv_error)?;
    let header_line = header.position().map_or(1, |x| x.line());
    if header_line != 1 || header.iter().ne(INPUT_COLUMNS) {
        return Err(header_error());
    }

    // the parser skips blank lines, so a record starting past `next_line` means one was dropped
    let mut next_line = header_line + line_count(&header);
    let mut addresses = Vec::new();
    for row in rows {
        let row = row.map_err(csv_error)?;
        let line = row.position().map_or(next_line, |x| x.line());
        if line > next_line {
            return Err(field_count_error(next_line, 0));
        }
        if row.len() != INPUT_COLUMNS.len() {
            return Err(field_count_error(line, row.len()));
        }
        next_line = line + line_count(&row);
        addresses.push(AddressRecord::new(&row[0], &row[1], &row[2], &row[3]));
    }

    // only a single final newline may end the file
    let mut total_lines = data.iter().filter(|x| **x == b'\n').count() as u64;
    if data.last().is_some_and(|x| *x != b'\n') {
        total_lines += 1;
    }
    if total_lines >= next_line {
        return Err(field_count_error(next_line, 0));
    }

    info!("... got {} addresses", addresses.len());
    Ok(addresses)
}

/// Lines taken up by a record, counting newlines inside quoted fields.
fn line_count(record: &StringRecord) -> u64 {
    1 + record
        .iter()
        .map(|x| x.matches('\n').count() as u64)
        .sum::<u64>()
}
