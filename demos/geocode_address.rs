use anyhow::Result;
use geoform_rs::{GeocodeOutcome, GeocoderClient};

#[tokio::main]
async fn main() -> Result<()> {
    let client = GeocoderClient::new()?;

    let outcome = client.geocode("1 Market St, San Francisco, CA").await?;

    match outcome {
        GeocodeOutcome::Found(location) => {
            println!("Coordinates: {}, {}", location.latitude, location.longitude);
            println!("State: {} ({})", location.state_code, location.state_name);
            println!("Locality: {}", location.locality);
            println!("Zip: {}", location.postal_code);
        }
        GeocodeOutcome::Failed(status) => {
            println!("Geocoding failed: {}", status);
        }
    }

    Ok(())
}
