use anyhow::Result;
use geoform_rs::{FormState, GeocoderClient, populate_form, slider_percent};

#[tokio::main]
async fn main() -> Result<()> {
    let client = GeocoderClient::new()?;

    let outcome = client.geocode("350 5th Ave, New York, NY 10118").await?;

    let mut form = FormState::new();
    populate_form(&outcome, &mut form);

    if let Some(action) = &form.submitted_action {
        println!("Submitting to {}:", action);
        let mut names: Vec<&String> = form.fields.keys().collect();
        names.sort();
        for name in names {
            println!("  {} = {}", name, form.fields[name]);
        }
    } else if let Some(status) = &form.status {
        println!("{}", status);
    }

    println!("Demand slider at 0.5 shows {}", slider_percent(0.5));

    Ok(())
}
