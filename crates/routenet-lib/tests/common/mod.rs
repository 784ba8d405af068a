//! Shared fixtures for integration tests.

use std::path::PathBuf;

use routenet_lib::{Coordinate, Coordinates, Hemisphere, Metro, RouteNetwork};

/// Path to the fixtures directory shared by the workspace tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Three-city network: MEX, LIM and SCL, every pair connected both ways.
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("test_data.json")
}

/// Adds CMI and CCU on top of the base fixture.
#[allow(dead_code)]
pub fn supplement_path() -> PathBuf {
    fixtures_dir().join("supplement.json")
}

pub fn fixture_network() -> RouteNetwork {
    let mut network = RouteNetwork::new();
    network.load(&fixture_path()).expect("fixture loads");
    network
}

/// Champaign, not part of the base fixture.
#[allow(dead_code)]
pub fn champaign() -> Metro {
    Metro {
        code: "CMI".to_string(),
        name: "Champaign".to_string(),
        country: "US".to_string(),
        continent: "North America".to_string(),
        timezone: -6.0,
        coordinates: Coordinates::new(
            Coordinate::new(Hemisphere::North, 40.0),
            Coordinate::new(Hemisphere::West, 88.0),
        )
        .expect("valid coordinates"),
        population: 226_000,
        region: 1,
    }
}

/// Edges rendered as `DEP -> DEST, distance`, sorted.
#[allow(dead_code)]
pub fn edge_lines(network: &RouteNetwork) -> Vec<String> {
    let mut lines: Vec<String> = network
        .edges()
        .map(|edge| {
            format!(
                "{} -> {}, {}",
                edge.departure, edge.destination, edge.distance
            )
        })
        .collect();
    lines.sort();
    lines
}
