use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{Error, Result};
use crate::network::RouteNetwork;

mod queue;

use queue::DistanceQueue;

/// Least-distance path found by [`calculate_shortest_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// City codes from departure to destination, inclusive.
    pub steps: Vec<String>,
    /// Sum of the edge distances along `steps`.
    pub distance: f64,
}

impl ShortestPath {
    /// Number of flights in the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm from `departure` to `destination`.
///
/// Returns `Ok(None)` when both cities exist but no sequence of flights
/// connects them, and [`Error::UnknownVertex`] when either code is missing.
pub fn calculate_shortest_path(
    network: &RouteNetwork,
    departure: &str,
    destination: &str,
) -> Result<Option<ShortestPath>> {
    for code in [departure, destination] {
        if !network.contains_vertex(code) {
            return Err(Error::UnknownVertex {
                code: code.to_string(),
            });
        }
    }

    let mut tentative: HashMap<&str, f64> = HashMap::with_capacity(network.vertex_count());
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut unvisited: HashSet<&str> = HashSet::with_capacity(network.vertex_count());
    let mut queue = DistanceQueue::new();

    for vertex in network.vertices() {
        let code = vertex.code();
        let distance = if code == departure { 0.0 } else { f64::INFINITY };
        tentative.insert(code, distance);
        unvisited.insert(code);
        queue.insert(code.to_string(), distance);
    }

    while let Some((current, current_distance)) = queue.pop_min() {
        trace!(code = %current, distance = current_distance, queued = queue.len(), "settling");
        for edge in network.neighbours(&current) {
            let next = edge.destination.as_str();
            if !unvisited.contains(next) {
                continue;
            }
            let candidate = current_distance + edge.distance;
            let best = tentative.get(next).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                tentative.insert(next, candidate);
                predecessors.insert(next, edge.departure.as_str());
                queue.decrease_key(next, candidate);
            }
        }
        unvisited.remove(current.as_str());
    }

    let Some(steps) = reconstruct_path(&predecessors, departure, destination) else {
        return Ok(None);
    };
    let distance = tentative.get(destination).copied().unwrap_or(f64::INFINITY);

    Ok(Some(ShortestPath { steps, distance }))
}

fn reconstruct_path(
    predecessors: &HashMap<&str, &str>,
    departure: &str,
    destination: &str,
) -> Option<Vec<String>> {
    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while current != departure {
        current = predecessors.get(current).copied()?;
        path.push(current.to_string());
    }
    path.reverse();
    Some(path)
}
