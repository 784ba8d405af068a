//! Route network library entry points.
//!
//! This crate loads route networks (cities connected by directed flight legs)
//! from JSON, keeps them consistent under mutation, answers aggregate queries,
//! prices itineraries and finds least-distance paths. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!
//! A network has an explicit lifecycle: construct a [`RouteNetwork`], load one
//! or more files into it, query or mutate it, and optionally save it back.

#![deny(warnings)]

pub mod dataset;
pub mod document;
pub mod error;
pub mod itinerary;
pub mod network;
pub mod path;
pub mod query;

pub use dataset::{default_network_path, resolve_network_paths, DATA_ENV_VAR};
pub use document::{load_network, MetroRecord, NetworkDocument, RouteRecord};
pub use error::{Error, Result};
pub use itinerary::{calculate_route_info, is_valid_route, HopInfo, RouteInfo};
pub use network::{edge_key, Coordinate, Coordinates, Edge, Hemisphere, Metro, RouteNetwork, Vertex};
pub use path::{calculate_shortest_path, ShortestPath};
pub use query::{
    average_distance, average_vertex_size, biggest_vertex, continents_info, hub_vertices,
    longest_edges, map_url, shortest_edges, smallest_vertex, ContinentGroup,
};
