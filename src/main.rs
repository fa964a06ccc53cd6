use std::env;

use anyhow::Result;
use geoform_rs::{
    FormState, GeocodeOutcome, GeocoderClient, GeocoderConfig, fields, month_val, populate_form,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <address> [api_key]", args[0]);
        eprintln!("  address: free-text address (quote it if it has spaces)");
        eprintln!("  api_key: geocoding API key (default: GOOGLE_MAPS_API_KEY env var)");
        std::process::exit(1);
    }

    let address = args[1].trim().to_string();
    if address.is_empty() {
        eprintln!("Error: No address provided");
        std::process::exit(1);
    }

    let client = GeocoderClient::with_config(GeocoderConfig {
        api_key: args.get(2).cloned(),
        ..Default::default()
    })?;

    println!("Geocoding \"{}\"...", address);
    let outcome = client.geocode(&address).await?;

    let mut form = FormState::new();
    populate_form(&outcome, &mut form);

    match outcome {
        GeocodeOutcome::Found(_) => {
            for name in [
                fields::LAT,
                fields::LNG,
                fields::STATE,
                fields::STATE_NAME,
                fields::LOCALITY,
                fields::ZIPCODE,
            ] {
                println!("  {}: {}", name, form.field(name).unwrap_or(""));
            }
            println!(
                "Form submitted to {}",
                form.submitted_action.as_deref().unwrap_or("")
            );
        }
        GeocodeOutcome::Failed(status) => {
            println!("{} ({})", form.status.as_deref().unwrap_or(""), status);
        }
    }

    println!("Default usage month: {}", month_val());

    Ok(())
}
