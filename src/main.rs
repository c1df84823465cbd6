mod categories;
mod data;
mod grouping;
mod layers;
mod stations;
mod web;

use log::info;

const DEFAULT_DATA_PATH: &str = "pendelstrecke.json";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    info!("Serving trip data from {data_path}");

    let item_groups = data::load_item_groups(&data_path)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        web::main(item_groups).await;
    });

    Ok(())
}
