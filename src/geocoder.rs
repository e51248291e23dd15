use geo::Point;
use serde::Deserialize;
use tracing::debug;
use ureq::{Agent, AgentBuilder};

use crate::{
    error::{Error, Result},
    model::{AddressRecord, INPUT_COLUMNS},
};

pub const DEFAULT_BASE_URL: &str = "http://www.openaddresses.org/addresses/";

/// Looks up one address. `Ok(None)` means the service answered but had no match.
pub trait Geocode {
    fn geocode(&self, address: &AddressRecord) -> Result<Option<Point>>;
}

pub struct OpenAddresses {
    agent: Agent,
    base_url: String,
}

impl OpenAddresses {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = AgentBuilder::new()
            .user_agent(concat!("batchgeocode/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

impl Geocode for OpenAddresses {
    fn geocode(&self, address: &AddressRecord) -> Result<Option<Point>> {
        let mut request = self.agent.get(&self.base_url);
        for (key, value) in query(address) {
            request = request.query(key, &value);
        }
        debug!(url = request.url(), "geocoding {address}");

        let response = request.call()?;
        check_response(response.status(), response.content_type())?;
        let response: FeatureCollection = response
            .into_json()
            .map_err(|x| Error::Response(x.to_string()))?;
        response.first_match()
    }
}

/// Query parameters for one address, in request order.
pub fn query(address: &AddressRecord) -> Vec<(&'static str, String)> {
    vec![
        ("postcode__eq", address.postcode.clone()),
        ("city__ilike", address.city.clone()),
        ("street__ilike", address.street.clone()),
        ("housenumber__eq", address.housenumber.clone()),
        ("queryable", INPUT_COLUMNS.join(",")),
        ("limit", "1".to_string()),
    ]
}

pub fn check_response(status: u16, content_type: &str) -> Result<()> {
    if !(200..300).contains(&status) {
        return Err(Error::Service { status });
    }
    if !content_type.contains("json") {
        return Err(Error::UnsupportedFormat {
            content_type: content_type.to_string(),
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

impl FeatureCollection {
    /// Coordinates of the first feature, `None` for an empty feature list.
    fn first_match(self) -> Result<Option<Point>> {
        let Some(feature) = self.features.into_iter().next() else {
            return Ok(None);
        };
        match feature.geometry.coordinates.as_slice() {
            [lon, lat, ..] => Ok(Some(Point::new(*lon, *lat))),
            x => Err(Error::Response(format!(
                "expected [lon, lat] coordinates, got {x:?}"
            ))),
        }
    }
}
