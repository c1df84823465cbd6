use std::convert::Infallible;
use std::sync::Arc;

use log::info;
use rustc_hash::FxHashMap;
use serde::Serialize;
use warp::{Filter, Reply};

use crate::categories::legend;
use crate::layers::render_destination;
use crate::stations::{ItemGroup, LatLng};

pub struct AppData {
    item_groups: Vec<ItemGroup>,
    by_destination: FxHashMap<String, usize>,
}

impl AppData {
    pub fn new(item_groups: Vec<ItemGroup>) -> AppData {
        let by_destination = item_groups
            .iter()
            .enumerate()
            .map(|(index, group)| (group.destination.id.clone(), index))
            .collect();

        AppData {
            item_groups,
            by_destination,
        }
    }

    fn item_group(&self, destination_id: &str) -> Option<&ItemGroup> {
        self.by_destination
            .get(destination_id)
            .map(|&index| &self.item_groups[index])
    }
}

/// One entry of the navigation bar.
#[derive(Serialize)]
struct NavigationEntry {
    id: String,
    name: String,
    coordinates: LatLng,
}

fn navigation(ad: &AppData) -> Vec<NavigationEntry> {
    ad.item_groups
        .iter()
        .map(|group| NavigationEntry {
            id: group.destination.id.clone(),
            name: group.destination.name.clone(),
            coordinates: group.destination.position(),
        })
        .collect()
}

fn map_for_destination(ad: Arc<AppData>, destination_id: String) -> impl Reply {
    match ad.item_group(&destination_id) {
        Some(group) => warp::reply::json(&render_destination(group)),
        None => warp::reply::json(&"No destination found for this id"),
    }
}

fn with_appdata(
    ad: Arc<AppData>,
) -> impl Filter<Extract = (Arc<AppData>,), Error = Infallible> + Clone {
    warp::any().map(move || ad.clone())
}

pub async fn main(item_groups: Vec<ItemGroup>) {
    let appdata = Arc::new(AppData::new(item_groups));

    let cors_policy = warp::cors()
        .allow_any_origin()
        .allow_headers(vec![
            "Access-Control-Allow-Origin",
            "Origin",
            "Accept",
            "X-Requested-With",
            "Content-Type",
        ])
        .allow_methods(["POST", "GET"]);

    info!("Setup done");

    let log = warp::log("warp");
    let destinations = warp::get()
        .and(with_appdata(appdata.clone()))
        .and(warp::path!("destinations"))
        .map(|ad: Arc<AppData>| warp::reply::json(&navigation(&ad)));

    let map = warp::get()
        .and(with_appdata(appdata.clone()))
        .and(warp::path!("map" / String))
        .map(map_for_destination);

    let legend_endpoint = warp::get()
        .and(warp::path!("legend"))
        .map(|| warp::reply::json(&legend()));

    let routes = destinations
        .or(map)
        .or(legend_endpoint)
        .with(cors_policy)
        .with(log);

    warp::serve(routes).run(([0, 0, 0, 0], 3030)).await;
}
