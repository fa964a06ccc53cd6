pub mod client;
pub mod form;
pub mod types;
pub mod widgets;

pub use client::{GeocoderClient, GeocoderConfig};
pub use form::{FormSink, FormState, NOT_FOUND_MESSAGE, OUTPUT_ACTION, fields, populate_form};
pub use types::{GeocodeOutcome, GeocodeStatus, Location, component_types};
pub use widgets::{month_val, slider_percent};
