use serde::{Deserialize, Serialize};
use std::fmt;

/// Geocoding response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeStatus {
    Ok,
    ZeroResults,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Unknown,
}

impl GeocodeStatus {
    /// Parse from the vendor's status string
    pub fn from_status(status: &str) -> Self {
        match status {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Unknown,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::ZeroResults => write!(f, "ZERO_RESULTS"),
            Self::OverDailyLimit => write!(f, "OVER_DAILY_LIMIT"),
            Self::OverQueryLimit => write!(f, "OVER_QUERY_LIMIT"),
            Self::RequestDenied => write!(f, "REQUEST_DENIED"),
            Self::InvalidRequest => write!(f, "INVALID_REQUEST"),
            Self::UnknownError => write!(f, "UNKNOWN_ERROR"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Raw response from the geocoding API
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Individual candidate result in the response
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Tagged fragment of a geocoded address (postal code, locality, ...),
/// carrying a short and long display form and a set of semantic type tags
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub short_name: String,
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Administrative fields extracted from a single geocode result.
///
/// Built fresh per geocode call, written into a form sink, then discarded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub state_code: String,
    pub state_name: String,
    pub locality: String,
    pub postal_code: String,
}

impl Location {
    /// Extract administrative fields from one candidate result.
    ///
    /// Single forward scan over the address components; the last matching
    /// component wins for every field. When no `locality` component has
    /// matched yet, `administrative_area_level_2` fills the locality in,
    /// but a genuine `locality` seen later still overwrites it.
    pub fn from_result(result: &GeocodeResult) -> Self {
        let mut location = Location {
            latitude: result.geometry.location.lat,
            longitude: result.geometry.location.lng,
            ..Default::default()
        };

        for component in &result.address_components {
            if component.has_type(component_types::ADMIN_AREA_LEVEL_1) {
                location.state_code = component.short_name.clone();
                location.state_name = component.long_name.clone();
            }
            if component.has_type(component_types::POSTAL_CODE) {
                location.postal_code = component.short_name.clone();
            }
            if component.has_type(component_types::LOCALITY) {
                location.locality = component.short_name.clone();
            }
            if location.locality.is_empty()
                && component.has_type(component_types::ADMIN_AREA_LEVEL_2)
            {
                location.locality = component.short_name.clone();
            }
        }

        location
    }
}

/// Outcome of one geocode request/response cycle
#[derive(Debug, Clone)]
pub enum GeocodeOutcome {
    /// Status OK: administrative fields from the first candidate result
    Found(Location),
    /// Any non-OK status
    Failed(GeocodeStatus),
}

/// Address component type tags
pub mod component_types {
    pub const ADMIN_AREA_LEVEL_1: &str = "administrative_area_level_1";
    pub const ADMIN_AREA_LEVEL_2: &str = "administrative_area_level_2";
    pub const LOCALITY: &str = "locality";
    pub const POSTAL_CODE: &str = "postal_code";
}
