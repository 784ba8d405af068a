use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

/// Hemisphere tag attached to a coordinate magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse the single-letter tag used in network files.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Single-letter tag used in network files.
    pub fn letter(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }

    /// `true` for the north/south tags.
    pub fn is_latitude(self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Magnitude in degrees tagged with its hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub hemisphere: Hemisphere,
    pub degrees: f64,
}

impl Coordinate {
    pub fn new(hemisphere: Hemisphere, degrees: f64) -> Self {
        Self {
            hemisphere,
            degrees,
        }
    }
}

/// Latitude/longitude pair of a city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: Coordinate,
    longitude: Coordinate,
}

impl Coordinates {
    /// Pair a latitude with a longitude, rejecting swapped hemisphere tags.
    pub fn new(latitude: Coordinate, longitude: Coordinate) -> Option<Self> {
        if !latitude.hemisphere.is_latitude() || longitude.hemisphere.is_latitude() {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Coordinate {
        self.latitude
    }

    pub fn longitude(&self) -> Coordinate {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{}",
            self.latitude.degrees,
            self.latitude.hemisphere,
            self.longitude.degrees,
            self.longitude.hemisphere
        )
    }
}

/// Descriptive record of a city, as supplied to [`RouteNetwork::add_vertex`]
/// and [`RouteNetwork::edit_vertex`].
#[derive(Debug, Clone, PartialEq)]
pub struct Metro {
    pub code: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    /// Offset from UTC in hours.
    pub timezone: f64,
    pub coordinates: Coordinates,
    pub population: u64,
    pub region: i64,
}

/// City node together with its outgoing and incoming connections.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    metro: Metro,
    /// Destination codes of outgoing edges.
    adjacency: BTreeSet<String>,
    /// Departure codes of incoming edges.
    inbound: BTreeSet<String>,
}

impl Vertex {
    fn new(metro: Metro) -> Self {
        Self {
            metro,
            adjacency: BTreeSet::new(),
            inbound: BTreeSet::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.metro.code
    }

    pub fn metro(&self) -> &Metro {
        &self.metro
    }

    /// Destination codes reachable by a single non-stop flight.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.iter().map(String::as_str)
    }

    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn in_degree(&self) -> usize {
        self.inbound.len()
    }
}

/// Directed flight leg between two cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub departure: String,
    pub destination: String,
    pub distance: f64,
}

impl Edge {
    /// Composite key under which this edge is indexed.
    pub fn key(&self) -> String {
        edge_key(&self.departure, &self.destination)
    }
}

/// Build the `"departure,destination"` key used by the edge table.
pub fn edge_key(departure: &str, destination: &str) -> String {
    format!("{departure},{destination}")
}

pub(crate) fn valid_distance(distance: f64) -> bool {
    distance.is_finite() && distance >= 0.0
}

/// In-memory route network: the vertex store and the single edge table.
///
/// Vertices only hold endpoint codes; every edge value lives in the edge
/// table keyed by [`edge_key`]. Both maps are ordered, so iteration follows
/// vertex code and composite key order respectively.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    vertices: BTreeMap<String, Vertex>,
    edges: BTreeMap<String, Edge>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, code: &str) -> bool {
        self.vertices.contains_key(code)
    }

    pub fn vertex(&self, code: &str) -> Option<&Vertex> {
        self.vertices.get(code)
    }

    /// All vertices in code order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges in composite key order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge(&self, departure: &str, destination: &str) -> Option<&Edge> {
        self.edges.get(&edge_key(departure, destination))
    }

    /// Outgoing edges of `code` ordered by destination. Unknown codes yield
    /// nothing.
    pub fn neighbours<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.vertices.get(code).into_iter().flat_map(move |vertex| {
            vertex
                .adjacency
                .iter()
                .filter_map(move |destination| self.edge(vertex.code(), destination))
        })
    }

    pub fn out_degree(&self, code: &str) -> Option<usize> {
        self.vertices.get(code).map(Vertex::out_degree)
    }

    /// Insert a new vertex. Returns `false` when the code is already taken.
    pub fn add_vertex(&mut self, metro: Metro) -> bool {
        if self.vertices.contains_key(&metro.code) {
            debug!(code = %metro.code, "rejecting duplicate vertex");
            return false;
        }
        self.vertices.insert(metro.code.clone(), Vertex::new(metro));
        true
    }

    /// Replace the descriptive fields of an existing vertex, keeping its
    /// connections. Returns `false` when the code is unknown.
    pub fn edit_vertex(&mut self, metro: Metro) -> bool {
        match self.vertices.get_mut(&metro.code) {
            Some(vertex) => {
                vertex.metro = metro;
                true
            }
            None => {
                debug!(code = %metro.code, "cannot edit unknown vertex");
                false
            }
        }
    }

    /// Remove a vertex and every edge that departs from or arrives at it.
    pub fn remove_vertex(&mut self, code: &str) -> bool {
        let Some(vertex) = self.vertices.remove(code) else {
            debug!(code, "cannot remove unknown vertex");
            return false;
        };

        for destination in &vertex.adjacency {
            self.edges.remove(&edge_key(code, destination));
            if let Some(neighbour) = self.vertices.get_mut(destination) {
                neighbour.inbound.remove(code);
            }
        }
        for departure in &vertex.inbound {
            self.edges.remove(&edge_key(departure, code));
            if let Some(neighbour) = self.vertices.get_mut(departure) {
                neighbour.adjacency.remove(code);
            }
        }

        debug!(
            code,
            outgoing = vertex.out_degree(),
            incoming = vertex.in_degree(),
            "removed vertex"
        );
        true
    }

    /// Add a single directed edge. Returns `false` when an endpoint is unknown
    /// or the distance is negative or not finite.
    pub fn add_edge(&mut self, departure: &str, destination: &str, distance: f64) -> bool {
        if !self.vertices.contains_key(departure) || !self.vertices.contains_key(destination) {
            debug!(departure, destination, "cannot connect unknown vertex");
            return false;
        }
        if !valid_distance(distance) {
            debug!(departure, destination, distance, "rejecting invalid distance");
            return false;
        }
        self.insert_edge(departure, destination, distance);
        true
    }

    /// Remove the directed edge `departure -> destination`.
    pub fn remove_edge(&mut self, departure: &str, destination: &str) -> bool {
        if !self.vertices.contains_key(departure) || !self.vertices.contains_key(destination) {
            return false;
        }
        if self.edges.remove(&edge_key(departure, destination)).is_none() {
            return false;
        }
        if let Some(vertex) = self.vertices.get_mut(departure) {
            vertex.adjacency.remove(destination);
        }
        if let Some(vertex) = self.vertices.get_mut(destination) {
            vertex.inbound.remove(departure);
        }
        true
    }

    /// Insert or overwrite a vertex during bulk load. Existing connections of
    /// an overwritten vertex are kept.
    pub(crate) fn upsert_vertex(&mut self, metro: Metro) {
        match self.vertices.get_mut(&metro.code) {
            Some(vertex) => vertex.metro = metro,
            None => {
                self.vertices.insert(metro.code.clone(), Vertex::new(metro));
            }
        }
    }

    /// Write the edge and both endpoint indexes. Callers have already checked
    /// that both endpoints exist.
    pub(crate) fn insert_edge(&mut self, departure: &str, destination: &str, distance: f64) {
        self.edges.insert(
            edge_key(departure, destination),
            Edge {
                departure: departure.to_string(),
                destination: destination.to_string(),
                distance,
            },
        );
        if let Some(vertex) = self.vertices.get_mut(departure) {
            vertex.adjacency.insert(destination.to_string());
        }
        if let Some(vertex) = self.vertices.get_mut(destination) {
            vertex.inbound.insert(departure.to_string());
        }
    }
}
