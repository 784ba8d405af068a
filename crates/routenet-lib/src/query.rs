//! Read-only aggregate queries over a [`RouteNetwork`].
//!
//! Edge extremes report every tied edge, while vertex extremes report the
//! first vertex in code order. Averages need at least one element and fail
//! with [`Error::EmptyNetwork`] otherwise.

use crate::error::{Error, Result};
use crate::network::{Edge, RouteNetwork, Vertex};

/// Prefix of the great-circle map service URL.
pub const MAP_URL_PREFIX: &str = "http://www.gcmap.com/mapui?P=";

/// Vertices grouped under one continent name.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinentGroup<'a> {
    pub continent: &'a str,
    pub vertices: Vec<&'a Vertex>,
}

/// Every edge tied for the greatest distance.
pub fn longest_edges(network: &RouteNetwork) -> Vec<&Edge> {
    extreme_edges(network, |candidate, best| candidate > best)
}

/// Every edge tied for the smallest distance.
pub fn shortest_edges(network: &RouteNetwork) -> Vec<&Edge> {
    extreme_edges(network, |candidate, best| candidate < best)
}

fn extreme_edges(network: &RouteNetwork, better: impl Fn(f64, f64) -> bool) -> Vec<&Edge> {
    let mut winners: Vec<&Edge> = Vec::new();
    for edge in network.edges() {
        match winners.first().map(|best| best.distance) {
            Some(best) if better(edge.distance, best) => {
                winners.clear();
                winners.push(edge);
            }
            Some(best) if edge.distance == best => winners.push(edge),
            Some(_) => {}
            None => winners.push(edge),
        }
    }
    winners
}

/// Mean distance over all edges.
pub fn average_distance(network: &RouteNetwork) -> Result<f64> {
    if network.edge_count() == 0 {
        return Err(Error::EmptyNetwork {
            what: "average distance",
        });
    }
    let total: f64 = network.edges().map(|edge| edge.distance).sum();
    Ok(total / network.edge_count() as f64)
}

/// Vertex with the largest population; the first in code order wins ties.
pub fn biggest_vertex(network: &RouteNetwork) -> Option<&Vertex> {
    extreme_vertex(network, |candidate, best| candidate > best)
}

/// Vertex with the smallest population; the first in code order wins ties.
pub fn smallest_vertex(network: &RouteNetwork) -> Option<&Vertex> {
    extreme_vertex(network, |candidate, best| candidate < best)
}

fn extreme_vertex(network: &RouteNetwork, better: impl Fn(u64, u64) -> bool) -> Option<&Vertex> {
    let mut best: Option<&Vertex> = None;
    for vertex in network.vertices() {
        match best {
            Some(current)
                if !better(vertex.metro().population, current.metro().population) => {}
            _ => best = Some(vertex),
        }
    }
    best
}

/// Mean population over all vertices.
pub fn average_vertex_size(network: &RouteNetwork) -> Result<f64> {
    if network.is_empty() {
        return Err(Error::EmptyNetwork {
            what: "average city size",
        });
    }
    let total: f64 = network
        .vertices()
        .map(|vertex| vertex.metro().population as f64)
        .sum();
    Ok(total / network.vertex_count() as f64)
}

/// Group vertices by continent. Continents appear in the order their first
/// vertex is encountered; vertices keep store order within each group.
pub fn continents_info(network: &RouteNetwork) -> Vec<ContinentGroup<'_>> {
    let mut groups: Vec<ContinentGroup<'_>> = Vec::new();
    for vertex in network.vertices() {
        let continent = vertex.metro().continent.as_str();
        match groups.iter_mut().find(|group| group.continent == continent) {
            Some(group) => group.vertices.push(vertex),
            None => groups.push(ContinentGroup {
                continent,
                vertices: vec![vertex],
            }),
        }
    }
    groups
}

/// Every vertex tied for the highest number of outgoing flights.
pub fn hub_vertices(network: &RouteNetwork) -> Vec<&Vertex> {
    let Some(max_degree) = network.vertices().map(Vertex::out_degree).max() else {
        return Vec::new();
    };
    network
        .vertices()
        .filter(|vertex| vertex.out_degree() == max_degree)
        .collect()
}

/// Great-circle map URL listing every edge as `DEP-DEST, `.
pub fn map_url(network: &RouteNetwork) -> String {
    let mut url = String::from(MAP_URL_PREFIX);
    for edge in network.edges() {
        url.push_str(&edge.departure);
        url.push('-');
        url.push_str(&edge.destination);
        url.push_str(", ");
    }
    url
}
