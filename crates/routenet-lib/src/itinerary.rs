//! Fare and travel time estimates for a caller-supplied itinerary.
//!
//! Fares start at 35% of the first hop's distance and drop five percentage
//! points for every following hop, bottoming out at zero. Flight time uses a
//! constant-acceleration model for short hops and a fixed climb/descent cost
//! plus linear cruise for longer ones. Every intermediate stop adds a layover
//! that shrinks as the stop offers more outgoing flights.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::RouteNetwork;

/// Fraction of the distance charged on the first hop.
pub const BASE_FARE_RATE: f64 = 0.35;
/// Fare rate reduction applied per additional hop.
pub const FARE_DECAY_PER_HOP: f64 = 0.05;
/// Distance covered while accelerating to (or decelerating from) cruise.
pub const ACCELERATION_DISTANCE: f64 = 400.0;
/// Cruise speed in distance units per time unit.
pub const CRUISE_SPEED: f64 = 750.0;
/// Acceleration in distance units per time unit squared.
pub const ACCELERATION: f64 = 1406.25;
/// Layover at a stop with a single outgoing flight.
pub const BASE_LAYOVER: f64 = 2.0;
/// Layover reduction, in minutes, for each additional outgoing flight at a stop.
pub const LAYOVER_REDUCTION_MINUTES: f64 = 10.0;

/// Cost and time breakdown for one flight of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HopInfo {
    pub departure: String,
    pub destination: String,
    pub distance: f64,
    pub fare: f64,
    pub flight_time: f64,
    /// Layover spent at `destination` before the next hop, zero on the last hop.
    pub layover: f64,
}

/// Totals for an itinerary, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    pub cost: f64,
    pub time: f64,
    pub hops: Vec<HopInfo>,
}

/// `true` when every code is a known city and each consecutive pair is
/// joined by a direct flight. An empty itinerary is never valid.
pub fn is_valid_route<S: AsRef<str>>(network: &RouteNetwork, codes: &[S]) -> bool {
    check_route(network, codes).is_ok()
}

/// Price and time an itinerary.
///
/// Fails with [`Error::EmptyItinerary`], [`Error::UnknownVertex`] or
/// [`Error::InvalidRoute`] when [`is_valid_route`] would return `false`.
pub fn calculate_route_info<S: AsRef<str>>(
    network: &RouteNetwork,
    codes: &[S],
) -> Result<RouteInfo> {
    check_route(network, codes)?;

    let hop_count = codes.len() - 1;
    let mut hops = Vec::with_capacity(hop_count);
    let mut cost = 0.0;
    let mut time = 0.0;

    for (index, pair) in codes.windows(2).enumerate() {
        let (departure, destination) = (pair[0].as_ref(), pair[1].as_ref());
        let edge = network
            .edge(departure, destination)
            .ok_or_else(|| Error::InvalidRoute {
                departure: departure.to_string(),
                destination: destination.to_string(),
            })?;

        let fare = edge.distance * fare_rate(index);
        let flight_time = flight_time(edge.distance);
        let layover = if index + 1 < hop_count {
            let routes = network
                .out_degree(destination)
                .ok_or_else(|| Error::UnknownVertex {
                    code: destination.to_string(),
                })?;
            layover_time(routes)
        } else {
            0.0
        };

        cost += fare;
        time += flight_time + layover;
        hops.push(HopInfo {
            departure: departure.to_string(),
            destination: destination.to_string(),
            distance: edge.distance,
            fare,
            flight_time,
            layover,
        });
    }

    Ok(RouteInfo {
        cost: round_hundredths(cost),
        time: round_hundredths(time),
        hops,
    })
}

fn check_route<S: AsRef<str>>(network: &RouteNetwork, codes: &[S]) -> Result<()> {
    if codes.is_empty() {
        return Err(Error::EmptyItinerary);
    }
    for code in codes {
        let code = code.as_ref();
        if !network.contains_vertex(code) {
            return Err(Error::UnknownVertex {
                code: code.to_string(),
            });
        }
    }
    for pair in codes.windows(2) {
        let (departure, destination) = (pair[0].as_ref(), pair[1].as_ref());
        if network.edge(departure, destination).is_none() {
            return Err(Error::InvalidRoute {
                departure: departure.to_string(),
                destination: destination.to_string(),
            });
        }
    }
    Ok(())
}

/// Fraction of the distance charged for the hop at `index` (zero-based).
pub fn fare_rate(index: usize) -> f64 {
    (BASE_FARE_RATE - FARE_DECAY_PER_HOP * index as f64).max(0.0)
}

/// Time needed to fly `distance`.
pub fn flight_time(distance: f64) -> f64 {
    if distance < ACCELERATION_DISTANCE {
        (2.0 * distance / ACCELERATION).sqrt()
    } else {
        let ramp = ACCELERATION_DISTANCE / (CRUISE_SPEED / 2.0);
        ramp + (distance - ACCELERATION_DISTANCE) / CRUISE_SPEED
    }
}

/// Layover at a stop offering `routes` outgoing flights.
pub fn layover_time(routes: usize) -> f64 {
    let extra = routes.saturating_sub(1) as f64;
    (BASE_LAYOVER - extra * LAYOVER_REDUCTION_MINUTES / 60.0).max(0.0)
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
