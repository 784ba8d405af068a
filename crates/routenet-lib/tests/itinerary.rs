mod common;

use routenet_lib::{calculate_route_info, is_valid_route, Error, Result};

use common::{champaign, fixture_network};

#[test]
fn two_hop_itinerary_cost_and_time() -> Result<()> {
    let network = fixture_network();
    let info = calculate_route_info(&network, &["MEX", "SCL", "LIM"])?;

    assert_eq!(info.cost, 2415.9);
    assert_eq!(info.time, 12.57);
    assert_eq!(info.hops.len(), 2);

    let first = &info.hops[0];
    assert_eq!((first.departure.as_str(), first.destination.as_str()), ("MEX", "SCL"));
    assert!((first.fare - 1680.0).abs() < 1e-9);
    // Layover at SCL, which offers two outgoing flights.
    assert!((first.layover - (2.0 - 10.0 / 60.0)).abs() < 1e-9);

    let last = &info.hops[1];
    assert!((last.fare - 735.9).abs() < 1e-9);
    assert_eq!(last.layover, 0.0);
    Ok(())
}

#[test]
fn single_hop_has_no_layover() -> Result<()> {
    let network = fixture_network();
    let info = calculate_route_info(&network, &["LIM", "SCL"])?;

    assert_eq!(info.cost, 858.55);
    // 400 / 375 + 2053 / 750
    assert_eq!(info.time, 3.8);
    Ok(())
}

#[test]
fn single_city_itinerary_is_free() -> Result<()> {
    let network = fixture_network();
    assert!(is_valid_route(&network, &["MEX"]));

    let info = calculate_route_info(&network, &["MEX"])?;
    assert_eq!(info.cost, 0.0);
    assert_eq!(info.time, 0.0);
    assert!(info.hops.is_empty());
    Ok(())
}

#[test]
fn removed_edge_invalidates_itinerary() {
    let mut network = fixture_network();
    assert!(is_valid_route(&network, &["MEX", "SCL", "LIM"]));

    assert!(network.remove_edge("MEX", "SCL"));
    assert!(!is_valid_route(&network, &["MEX", "SCL", "LIM"]));
    let error = calculate_route_info(&network, &["MEX", "SCL", "LIM"]).unwrap_err();
    assert!(matches!(
        error,
        Error::InvalidRoute { ref departure, ref destination }
            if departure == "MEX" && destination == "SCL"
    ));
}

#[test]
fn unknown_and_empty_itineraries_are_rejected() {
    let mut network = fixture_network();
    let empty: [&str; 0] = [];

    assert!(!is_valid_route(&network, &empty));
    assert!(matches!(
        calculate_route_info(&network, &empty),
        Err(Error::EmptyItinerary)
    ));
    assert!(matches!(
        calculate_route_info(&network, &["MEX", "CMI"]),
        Err(Error::UnknownVertex { ref code }) if code == "CMI"
    ));

    // Known but unconnected.
    assert!(network.add_vertex(champaign()));
    assert!(!is_valid_route(&network, &["MEX", "CMI"]));
}

#[test]
fn owned_codes_are_accepted() -> Result<()> {
    let network = fixture_network();
    let codes: Vec<String> = ["SCL", "MEX"].iter().map(|code| code.to_string()).collect();
    let info = calculate_route_info(&network, &codes)?;
    assert_eq!(info.cost, 1680.0);
    Ok(())
}
