//! Fetch a server-vs-region comparison from NexusHub and print the cleaned
//! arrays a chart layer would consume.
//!
//! Run with: `cargo run -p goldwatch --example compare -- "Saronite Ore"`

use std::sync::Arc;

use goldwatch::{CompareOptions, Faction, Goldwatch, ItemName, Realm, Region};
use goldwatch_nexushub::NexusHubConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let item = std::env::args().nth(1).unwrap_or_else(|| "Saronite Ore".into());

    let gw = Goldwatch::builder()
        .with_connector(Arc::new(NexusHubConnector::new()?))
        .build()?;

    let aligned = gw
        .comparison(
            &ItemName::new(&item),
            &Realm::new("Skyfury"),
            Faction::Alliance,
            Region::Us,
            Some(7),
            CompareOptions {
                repair: true,
                threshold: None,
            },
        )
        .await?;

    println!("{item}: {} aligned points", aligned.len());
    for ((ts, server), region) in aligned
        .times()
        .iter()
        .zip(aligned.server_prices())
        .zip(aligned.region_prices())
    {
        println!("{ts}  server={server:>10.0}  region={region:>10.0}");
    }
    Ok(())
}
