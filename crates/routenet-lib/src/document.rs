use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::{
    valid_distance, Coordinate, Coordinates, Edge, Hemisphere, Metro, RouteNetwork,
};

/// Largest magnitude below which every whole `f64` is exactly representable
/// as an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// On-disk representation of a route network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub metros: Vec<MetroRecord>,
    pub routes: Vec<RouteRecord>,
}

/// City record as stored in a network file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroRecord {
    pub code: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    #[serde(serialize_with = "serialize_number")]
    pub timezone: f64,
    /// Hemisphere letter to magnitude, e.g. `{"N": 19, "W": 99}`.
    #[serde(serialize_with = "serialize_coordinates")]
    pub coordinates: BTreeMap<String, f64>,
    pub population: u64,
    pub region: i64,
}

/// Route record as stored in a network file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub ports: [String; 2],
    #[serde(serialize_with = "serialize_number")]
    pub distance: f64,
}

impl MetroRecord {
    fn to_metro(&self) -> Result<Metro> {
        Ok(Metro {
            code: self.code.clone(),
            name: self.name.clone(),
            country: self.country.clone(),
            continent: self.continent.clone(),
            timezone: self.timezone,
            coordinates: parse_coordinates(&self.code, &self.coordinates)?,
            population: self.population,
            region: self.region,
        })
    }
}

impl From<&Metro> for MetroRecord {
    fn from(metro: &Metro) -> Self {
        let coordinates = [metro.coordinates.latitude(), metro.coordinates.longitude()]
            .into_iter()
            .map(|coordinate| (coordinate.hemisphere.letter().to_string(), coordinate.degrees))
            .collect();
        Self {
            code: metro.code.clone(),
            name: metro.name.clone(),
            country: metro.country.clone(),
            continent: metro.continent.clone(),
            timezone: metro.timezone,
            coordinates,
            population: metro.population,
            region: metro.region,
        }
    }
}

impl From<&Edge> for RouteRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            ports: [edge.departure.clone(), edge.destination.clone()],
            distance: edge.distance,
        }
    }
}

fn parse_coordinates(code: &str, raw: &BTreeMap<String, f64>) -> Result<Coordinates> {
    let invalid = |message: String| Error::InvalidCoordinates {
        code: code.to_string(),
        message,
    };

    if raw.len() != 2 {
        return Err(invalid(format!("expected 2 entries, found {}", raw.len())));
    }

    let mut latitude = None;
    let mut longitude = None;
    for (letter, degrees) in raw {
        let hemisphere = Hemisphere::from_letter(letter)
            .ok_or_else(|| invalid(format!("unknown hemisphere '{letter}'")))?;
        let slot = if hemisphere.is_latitude() {
            &mut latitude
        } else {
            &mut longitude
        };
        *slot = Some(Coordinate::new(hemisphere, *degrees));
    }

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Coordinates::new(latitude, longitude)
            .ok_or_else(|| invalid("hemisphere tags are swapped".to_string())),
        _ => Err(invalid("expected one of N/S and one of E/W".to_string())),
    }
}

/// Write whole numbers without a fractional part so saved files keep the
/// integer spelling they were loaded with.
fn serialize_number<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_coordinates<S: Serializer>(
    coordinates: &BTreeMap<String, f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(
        coordinates
            .iter()
            .map(|(letter, degrees)| (letter, Number(*degrees))),
    )
}

struct Number(f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

impl RouteNetwork {
    /// Load a network file and merge it into this network.
    ///
    /// Metros overwrite existing vertices with the same code and every route
    /// record adds both directions. The file is validated in full before the
    /// network is touched, so a failed load leaves it unchanged.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "loading network file");
        self.load_str(&contents)
    }

    /// Parse a network document from JSON text and merge it into this network.
    pub fn load_str(&mut self, json: &str) -> Result<()> {
        let document: NetworkDocument = serde_json::from_str(json)?;
        self.load_document(&document)
    }

    /// Merge an already parsed document into this network.
    pub fn load_document(&mut self, document: &NetworkDocument) -> Result<()> {
        let metros = document
            .metros
            .iter()
            .map(MetroRecord::to_metro)
            .collect::<Result<Vec<_>>>()?;

        let declared: HashSet<&str> = metros.iter().map(|metro| metro.code.as_str()).collect();
        for route in &document.routes {
            for port in &route.ports {
                if !declared.contains(port.as_str()) && !self.contains_vertex(port) {
                    return Err(Error::UnknownPort { code: port.clone() });
                }
            }
            if !valid_distance(route.distance) {
                return Err(Error::InvalidDistance {
                    departure: route.ports[0].clone(),
                    destination: route.ports[1].clone(),
                    distance: route.distance,
                });
            }
        }

        for metro in metros {
            self.upsert_vertex(metro);
        }
        for route in &document.routes {
            let [first, second] = &route.ports;
            self.insert_edge(first, second, route.distance);
            self.insert_edge(second, first, route.distance);
        }

        info!(
            metros = document.metros.len(),
            routes = document.routes.len(),
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "merged network document"
        );
        Ok(())
    }

    /// Structured form of the network: metros in code order, one route record
    /// per directed edge in composite key order.
    pub fn to_document(&self) -> NetworkDocument {
        NetworkDocument {
            metros: self
                .vertices()
                .map(|vertex| MetroRecord::from(vertex.metro()))
                .collect(),
            routes: self.edges().map(RouteRecord::from).collect(),
        }
    }

    /// Canonical JSON rendering with object keys sorted.
    pub fn to_canonical_json(&self) -> Result<String> {
        let value = serde_json::to_value(self.to_document())?;
        let mut json = serde_json::to_string_pretty(&value)?;
        json.push('\n');
        Ok(json)
    }

    /// Overwrite `path` with the canonical JSON rendering.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_canonical_json()?;
        fs::write(path, json)?;
        debug!(
            path = %path.display(),
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "saved network"
        );
        Ok(())
    }
}

/// Build a network from one or more files, merged in order.
pub fn load_network(paths: &[PathBuf]) -> Result<RouteNetwork> {
    let mut network = RouteNetwork::new();
    for path in paths {
        network.load(path)?;
    }
    Ok(network)
}
