use std::fmt;

use crate::model::GeocodedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub geocoded: usize,
    pub total: usize,
}

impl Statistics {
    pub fn from_records(records: &[GeocodedRecord]) -> Self {
        Self {
            geocoded: records
                .iter()
                .filter(|x| x.outcome.point().is_some())
                .count(),
            total: records.len(),
        }
    }

    /// Share of geocoded records in percent, `None` when there were no records.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.geocoded as f64 / self.total as f64 * 100.0)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} addresses successfully geocoded",
            self.geocoded, self.total
        )?;
        match self.percentage() {
            Some(x) => write!(f, " ({x:.2}%)"),
            None => write!(f, " (n/a)"),
        }
    }
}
