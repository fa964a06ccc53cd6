use std::collections::HashMap;

use crate::types::{GeocodeOutcome, Location};

/// Path the form submits to after a successful geocode
pub const OUTPUT_ACTION: &str = "/output";

/// Status message shown when geocoding fails
pub const NOT_FOUND_MESSAGE: &str = "Sorry, I couldn't find that location.";

/// Form field names populated from a geocoded location
pub mod fields {
    pub const LAT: &str = "lat";
    pub const LNG: &str = "lng";
    pub const STATE: &str = "state";
    pub const STATE_NAME: &str = "state_name";
    pub const LOCALITY: &str = "locality";
    pub const ZIPCODE: &str = "zipcode";
}

/// Sink the geocoder writes into: named form fields, a status line, and a
/// submit action. Decouples field extraction from any particular UI binding.
pub trait FormSink {
    fn set_field(&mut self, name: &str, value: &str);
    fn set_status(&mut self, message: &str);
    fn submit(&mut self, action: &str);
}

/// Write a geocode outcome into a form sink.
///
/// Success populates all six fields and submits to `/output`; the submit
/// happens on every success. Failure writes the status message only and
/// never submits.
pub fn populate_form<S: FormSink>(outcome: &GeocodeOutcome, form: &mut S) {
    match outcome {
        GeocodeOutcome::Found(location) => {
            write_location(location, form);
            form.submit(OUTPUT_ACTION);
        }
        GeocodeOutcome::Failed(_) => {
            form.set_status(NOT_FOUND_MESSAGE);
        }
    }
}

fn write_location<S: FormSink>(location: &Location, form: &mut S) {
    form.set_field(fields::LAT, &location.latitude.to_string());
    form.set_field(fields::LNG, &location.longitude.to_string());
    form.set_field(fields::STATE, &location.state_code);
    form.set_field(fields::STATE_NAME, &location.state_name);
    form.set_field(fields::LOCALITY, &location.locality);
    form.set_field(fields::ZIPCODE, &location.postal_code);
}

/// In-memory form, used by the CLI and the HTTP service
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: HashMap<String, String>,
    pub status: Option<String>,
    pub submitted_action: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_action.is_some()
    }
}

impl FormSink for FormState {
    fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    fn submit(&mut self, action: &str) {
        self.submitted_action = Some(action.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeocodeStatus;

    fn sample_location() -> Location {
        Location {
            latitude: 37.75,
            longitude: -122.41,
            state_code: "CA".to_string(),
            state_name: "California".to_string(),
            locality: "San Francisco".to_string(),
            postal_code: "94110".to_string(),
        }
    }

    #[test]
    fn test_success_populates_and_submits() {
        let mut form = FormState::new();
        populate_form(&GeocodeOutcome::Found(sample_location()), &mut form);

        assert_eq!(form.field(fields::LAT), Some("37.75"));
        assert_eq!(form.field(fields::LNG), Some("-122.41"));
        assert_eq!(form.field(fields::STATE), Some("CA"));
        assert_eq!(form.field(fields::STATE_NAME), Some("California"));
        assert_eq!(form.field(fields::LOCALITY), Some("San Francisco"));
        assert_eq!(form.field(fields::ZIPCODE), Some("94110"));
        assert_eq!(form.submitted_action.as_deref(), Some(OUTPUT_ACTION));
        assert!(form.status.is_none());
    }

    #[test]
    fn test_failure_sets_status_only() {
        let mut form = FormState::new();
        populate_form(&GeocodeOutcome::Failed(GeocodeStatus::ZeroResults), &mut form);

        assert_eq!(form.status.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert!(form.fields.is_empty());
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_later_outcome_overwrites_fields() {
        // Two independent geocodes writing the same form: last one wins.
        let mut form = FormState::new();
        populate_form(&GeocodeOutcome::Found(sample_location()), &mut form);

        let second = Location {
            latitude: 41.88,
            longitude: -87.63,
            state_code: "IL".to_string(),
            state_name: "Illinois".to_string(),
            locality: "Chicago".to_string(),
            postal_code: "60601".to_string(),
        };
        populate_form(&GeocodeOutcome::Found(second), &mut form);

        assert_eq!(form.field(fields::STATE), Some("IL"));
        assert_eq!(form.field(fields::LOCALITY), Some("Chicago"));
    }
}
