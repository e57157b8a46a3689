//! Fetches the earthquake and plate boundary datasets, composes the map and reports
//! what would be drawn.

use quakemap::client::HttpClient;
use quakemap::config::MapConfig;
use quakemap::error::QuakeMapError;
use quakemap::feature::{earthquakes_from_geojson, fault_lines_from_geojson};
use quakemap::layer::symbol::{FaultLineSymbol, QuakeMarkerSymbol};
use quakemap::layer::FeatureLayer;
use quakemap::map::compose_map;

#[tokio::main]
async fn main() -> Result<(), QuakeMapError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MapConfig::from_env();
    let client = HttpClient::new()?;

    // The two datasets are independent, so the fetches are joined instead of awaited
    // one after the other.
    let (quake_data, plates_data) = tokio::try_join!(
        client.load_geojson(&config.earthquake_url),
        client.load_geojson(&config.plates_url),
    )?;

    let earthquakes = earthquakes_from_geojson(quake_data)?;
    log::info!("Loaded {} earthquake events", earthquakes.len());
    let quake_layer = FeatureLayer::new("Earthquakes", earthquakes, QuakeMarkerSymbol);

    let fault_lines = fault_lines_from_geojson(plates_data)?;
    log::info!("Loaded {} fault line segments", fault_lines.len());
    let fault_layer = FeatureLayer::new("Fault Line", fault_lines, FaultLineSymbol::default());

    let map = compose_map(quake_layer, fault_layer, &config);

    let frame = map.render_frame();
    log::info!(
        "Composed map at zoom {} with {} layers: {} markers, {} strokes over the {:?} basemap",
        map.view().zoom(),
        map.layers().len(),
        frame.markers().len(),
        frame.strokes().len(),
        map.switcher().active_basemap(),
    );

    if let Some(legend) = map.legend() {
        println!("{}", legend.title());
        for entry in legend.entries() {
            println!("  {}  {}", entry.color.to_hex(), entry.label);
        }
    }

    for attribution in map.attributions() {
        log::info!("Attribution: {}", attribution.text());
    }

    Ok(())
}
