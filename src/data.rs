use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use log::info;

use crate::stations::ItemGroup;

/// Loads the trip data file written by the fetcher.
pub fn load_item_groups(path: &str) -> Result<Vec<ItemGroup>> {
    let file = File::open(path).with_context(|| format!("opening trip data at {path}"))?;
    let item_groups: Vec<ItemGroup> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing trip data at {path}"))?;

    let visits: usize = item_groups.iter().map(|group| group.stations.len()).sum();
    info!(
        "Loaded {} destinations with {} station visits",
        item_groups.len(),
        visits
    );

    Ok(item_groups)
}
