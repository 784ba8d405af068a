//! Output formatting for CLI results.
//!
//! Every subcommand builds a view struct from library results. Views render
//! either as plain text for people (their `Display` impl) or as pretty JSON
//! for scripts.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use routenet_lib::{
    average_distance, average_vertex_size, biggest_vertex, continents_info, hub_vertices,
    longest_edges, shortest_edges, smallest_vertex, Edge, HopInfo, RouteInfo, RouteNetwork,
    ShortestPath, Vertex,
};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render `view` in this format. The result always ends with a newline.
    pub fn render<V: fmt::Display + Serialize>(self, view: &V) -> serde_json::Result<String> {
        match self {
            OutputFormat::Text => Ok(view.to_string()),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(view)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityEntry {
    pub code: String,
    pub name: String,
}

/// All cities in code order.
#[derive(Debug, Clone, Serialize)]
pub struct CityListView {
    pub cities: Vec<CityEntry>,
}

impl CityListView {
    pub fn new(network: &RouteNetwork) -> Self {
        let cities = network
            .vertices()
            .map(|vertex| CityEntry {
                code: vertex.code().to_string(),
                name: vertex.metro().name.clone(),
            })
            .collect();
        Self { cities }
    }
}

impl fmt::Display for CityListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.cities {
            writeln!(f, "{}  {}", city.code, city.name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub code: String,
    pub distance: f64,
}

/// Details of one city with its non-stop destinations.
#[derive(Debug, Clone, Serialize)]
pub struct CityView {
    pub code: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub timezone: f64,
    pub coordinates: String,
    pub population: u64,
    pub region: i64,
    pub destinations: Vec<Destination>,
}

impl CityView {
    pub fn new(network: &RouteNetwork, vertex: &Vertex) -> Self {
        let metro = vertex.metro();
        let destinations = network
            .neighbours(vertex.code())
            .map(|edge| Destination {
                code: edge.destination.clone(),
                distance: edge.distance,
            })
            .collect();
        Self {
            code: metro.code.clone(),
            name: metro.name.clone(),
            country: metro.country.clone(),
            continent: metro.continent.clone(),
            timezone: metro.timezone,
            coordinates: metro.coordinates.to_string(),
            population: metro.population,
            region: metro.region,
            destinations,
        }
    }
}

impl fmt::Display for CityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.code)?;
        writeln!(f, "Country: {}", self.country)?;
        writeln!(f, "Continent: {}", self.continent)?;
        writeln!(f, "Timezone: {}", self.timezone)?;
        writeln!(f, "Coordinates: {}", self.coordinates)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Region: {}", self.region)?;
        if self.destinations.is_empty() {
            return writeln!(f, "Non-stop flights: none");
        }
        writeln!(f, "Non-stop flights:")?;
        for destination in &self.destinations {
            writeln!(f, "- {} ({})", destination.code, destination.distance)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Flight {
    pub departure: String,
    pub destination: String,
    pub distance: f64,
}

impl From<&Edge> for Flight {
    fn from(edge: &Edge) -> Self {
        Self {
            departure: edge.departure.clone(),
            destination: edge.destination.clone(),
            distance: edge.distance,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContinentEntry {
    pub continent: String,
    pub cities: Vec<String>,
}

/// Aggregate statistics. Averages and extremes are absent on an empty network.
#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub cities: usize,
    pub flights: usize,
    pub longest_flights: Vec<Flight>,
    pub shortest_flights: Vec<Flight>,
    pub average_distance: Option<f64>,
    pub biggest_city: Option<String>,
    pub smallest_city: Option<String>,
    pub average_city_size: Option<f64>,
    pub continents: Vec<ContinentEntry>,
    pub hubs: Vec<String>,
}

impl StatsView {
    pub fn new(network: &RouteNetwork) -> Self {
        let codes = |vertices: Vec<&Vertex>| -> Vec<String> {
            vertices
                .into_iter()
                .map(|vertex| vertex.code().to_string())
                .collect()
        };
        Self {
            cities: network.vertex_count(),
            flights: network.edge_count(),
            longest_flights: longest_edges(network).into_iter().map(Flight::from).collect(),
            shortest_flights: shortest_edges(network).into_iter().map(Flight::from).collect(),
            average_distance: average_distance(network).ok(),
            biggest_city: biggest_vertex(network).map(|vertex| vertex.code().to_string()),
            smallest_city: smallest_vertex(network).map(|vertex| vertex.code().to_string()),
            average_city_size: average_vertex_size(network).ok(),
            continents: continents_info(network)
                .into_iter()
                .map(|group| ContinentEntry {
                    continent: group.continent.to_string(),
                    cities: codes(group.vertices),
                })
                .collect(),
            hubs: codes(hub_vertices(network)),
        }
    }
}

fn flight_list(flights: &[Flight]) -> String {
    if flights.is_empty() {
        return "n/a".to_string();
    }
    flights
        .iter()
        .map(|flight| {
            format!(
                "{} -> {} ({})",
                flight.departure, flight.destination, flight.distance
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn optional_average(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |value| format!("{value:.2}"))
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cities: {}", self.cities)?;
        writeln!(f, "Flights: {}", self.flights)?;
        writeln!(f, "Longest flight: {}", flight_list(&self.longest_flights))?;
        writeln!(f, "Shortest flight: {}", flight_list(&self.shortest_flights))?;
        writeln!(
            f,
            "Average distance: {}",
            optional_average(self.average_distance)
        )?;
        writeln!(
            f,
            "Biggest city: {}",
            self.biggest_city.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Smallest city: {}",
            self.smallest_city.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Average city size: {}",
            optional_average(self.average_city_size)
        )?;
        writeln!(f, "Continents:")?;
        for entry in &self.continents {
            writeln!(f, "  {}: {}", entry.continent, entry.cities.join(", "))?;
        }
        writeln!(f, "Hub cities: {}", self.hubs.join(", "))
    }
}

/// Cost and time of an itinerary.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryView {
    pub cities: Vec<String>,
    pub cost: f64,
    pub time: f64,
    pub hops: Vec<HopInfo>,
}

impl ItineraryView {
    pub fn new(cities: Vec<String>, info: RouteInfo) -> Self {
        Self {
            cities,
            cost: info.cost,
            time: info.time,
            hops: info.hops,
        }
    }
}

impl fmt::Display for ItineraryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Itinerary: {}", self.cities.join(" -> "))?;
        for hop in &self.hops {
            write!(
                f,
                "- {} -> {} ({}): fare {:.2}, flight {:.2}h",
                hop.departure, hop.destination, hop.distance, hop.fare, hop.flight_time
            )?;
            if hop.layover > 0.0 {
                write!(f, ", layover {:.2}h", hop.layover)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Total cost: {:.2}", self.cost)?;
        writeln!(f, "Total time: {:.2}", self.time)
    }
}

/// Shortest path between two cities together with its cost and time.
#[derive(Debug, Clone, Serialize)]
pub struct PathView {
    pub distance: f64,
    #[serde(flatten)]
    pub itinerary: ItineraryView,
}

impl PathView {
    pub fn new(path: ShortestPath, info: RouteInfo) -> Self {
        Self {
            distance: path.distance,
            itinerary: ItineraryView::new(path.steps, info),
        }
    }
}

impl fmt::Display for PathView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hops = self.itinerary.hops.len();
        writeln!(
            f,
            "Shortest path ({} {}, distance {}):",
            hops,
            if hops == 1 { "flight" } else { "flights" },
            self.distance
        )?;
        write!(f, "{}", self.itinerary)
    }
}

/// Both cities exist but no sequence of flights connects them.
#[derive(Debug, Clone, Serialize)]
pub struct NoPathView {
    pub departure: String,
    pub destination: String,
    /// Always `null`, mirroring the `cities` list of a found path.
    pub cities: Option<Vec<String>>,
}

impl NoPathView {
    pub fn new(departure: &str, destination: &str) -> Self {
        Self {
            departure: departure.to_string(),
            destination: destination.to_string(),
            cities: None,
        }
    }
}

impl fmt::Display for NoPathView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No route from {} to {}", self.departure, self.destination)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapUrlView {
    pub url: String,
}

impl fmt::Display for MapUrlView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.url)
    }
}

/// Confirmation of a completed save.
#[derive(Debug, Clone, Serialize)]
pub struct SavedView {
    pub path: String,
    pub cities: usize,
    pub flights: usize,
}

impl SavedView {
    pub fn new(path: &Path, network: &RouteNetwork) -> Self {
        Self {
            path: path.display().to_string(),
            cities: network.vertex_count(),
            flights: network.edge_count(),
        }
    }
}

impl fmt::Display for SavedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved {} cities and {} flights to {}",
            self.cities, self.flights, self.path
        )
    }
}
