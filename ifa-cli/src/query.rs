//! Query implementations for the IFA CLI.

use ifa_core::client::AdvisoryApi;
use ifa_core::location::LocationSelection;
use ifa_data::heatmap;
use log::info;

/// Print the selectable states (backend list or embedded fallback).
pub async fn run_states(api: &AdvisoryApi) -> anyhow::Result<()> {
    info!("querying states from {}", api.base_url());
    let states = api.states().await;
    for state in &states {
        println!("{state}");
    }
    info!("{} states", states.len());
    Ok(())
}

/// Print the rivers for a state (backend list or embedded fallback).
pub async fn run_rivers(api: &AdvisoryApi, state: &str) -> anyhow::Result<()> {
    info!("querying rivers for {state} from {}", api.base_url());
    let rivers = api.rivers(state).await;
    if rivers.is_empty() {
        println!("No rivers known for {state}");
        return Ok(());
    }
    for river in &rivers {
        println!("{river}");
    }
    info!("{} rivers", rivers.len());
    Ok(())
}

/// Fetch and print the advisory for a location.
pub async fn run_advisory(api: &AdvisoryApi, state: &str, river: &str) -> anyhow::Result<()> {
    let selection = LocationSelection::new(state, river);
    let result = api.submit(&selection).await?;

    println!("{} - overall zone: {}", result.river_name, result.overall_zone);
    if result.species.is_empty() {
        println!("No species records found for this location.");
        return Ok(());
    }
    for advisory in &result.species {
        println!();
        println!("{} [{}]", advisory.name, advisory.zone);
        for factor in &advisory.risk_factors {
            println!("  - {factor}");
        }
        println!("  Advisory: {}", advisory.fishing_advisory);
        println!("  Gear: {}", advisory.recommended_gear);
        println!("  Economics: {}", advisory.economic_note);
    }
    Ok(())
}

/// Fetch heatmap points for a location and print the normalized markers.
pub async fn run_heatmap(api: &AdvisoryApi, state: &str, river: &str) -> anyhow::Result<()> {
    let selection = LocationSelection::new(state, river);
    let points = api.heatmap(&selection).await?;
    let map = heatmap::normalize(&points);

    println!(
        "center: ({:.4}, {:.4}), zoom: {}",
        map.center.0, map.center.1, map.zoom
    );
    if map.markers.is_empty() {
        println!("No spatial records found for this combination.");
        return Ok(());
    }
    for marker in &map.markers {
        println!(
            "({:.4}, {:.4}) value={:.3} radius={:.1} color={}",
            marker.lat, marker.lon, marker.value, marker.radius, marker.color
        );
    }
    Ok(())
}
