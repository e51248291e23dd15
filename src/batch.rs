use tracing::error;

use crate::{
    config::{Config, FailurePolicy},
    error::Result,
    geocoder::Geocode,
    model::{AddressRecord, GeocodedRecord, Outcome},
    reader,
    stats::Statistics,
    utils::progress_bar,
    writer,
};

/// Reads, geocodes and writes the whole file, then prints the statistics line.
pub fn run(config: &Config, geocoder: &impl Geocode) -> Result<Statistics> {
    let addresses = reader::read(&config.input)?;
    let records = geocode_all(addresses, geocoder, config.policy)?;
    writer::write(&config.output, &records)?;

    let stats = Statistics::from_records(&records);
    println!("{stats}");
    Ok(stats)
}

pub fn geocode_all(
    addresses: Vec<AddressRecord>,
    geocoder: &impl Geocode,
    policy: FailurePolicy,
) -> Result<Vec<GeocodedRecord>> {
    let bar = progress_bar(addresses.len() as u64);
    let mut records = Vec::with_capacity(addresses.len());

    for (i, address) in addresses.into_iter().enumerate() {
        let outcome = match geocoder.geocode(&address) {
            Ok(Some(x)) => Outcome::Matched(x),
            Ok(None) => Outcome::NotMatched,
            Err(e) if policy == FailurePolicy::Skip && e.is_request() => {
                bar.suspend(|| error!("skipping #{i} ({address}): {e}"));
                Outcome::Failed(e.to_string())
            }
            Err(e) => {
                bar.abandon();
                return Err(e);
            }
        };

        // println on a hidden bar is a no-op, suspend prints regardless
        bar.suspend(|| println!("{}", progress_line(i, &address, &outcome)));
        bar.inc(1);
        records.push(GeocodedRecord { address, outcome });
    }

    bar.finish_and_clear();
    Ok(records)
}

pub fn progress_line(i: usize, address: &AddressRecord, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Matched(x) => format!("> #{i}: found {address} @ {:.3} {:.3}", x.x(), x.y()),
        Outcome::NotMatched => format!("> #{i}: coordinates of address {address} not found"),
        Outcome::Failed(reason) => format!("> #{i}: lookup of address {address} failed: {reason}"),
    }
}
