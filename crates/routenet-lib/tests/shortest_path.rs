mod common;

use routenet_lib::{calculate_shortest_path, calculate_route_info, load_network, Error, Result};

use common::{champaign, fixture_network, fixture_path, supplement_path};

#[test]
fn two_short_hops_beat_one_long_hop() -> Result<()> {
    let network = fixture_network();
    let path = calculate_shortest_path(&network, "MEX", "LIM")?.expect("path exists");

    assert_eq!(path.steps, vec!["MEX", "SCL", "LIM"]);
    assert_eq!(path.distance, 7253.0);
    assert_eq!(path.hop_count(), 2);
    Ok(())
}

#[test]
fn returned_path_is_a_valid_itinerary() -> Result<()> {
    let network = load_network(&[fixture_path(), supplement_path()])?;
    let path = calculate_shortest_path(&network, "CCU", "LIM")?.expect("path exists");

    assert_eq!(path.steps, vec!["CCU", "CMI", "MEX", "SCL", "LIM"]);
    assert_eq!(path.distance, 12600.0 + 3011.0 + 4800.0 + 2453.0);
    assert!(calculate_route_info(&network, &path.steps).is_ok());
    Ok(())
}

#[test]
fn isolated_city_has_no_path() -> Result<()> {
    let mut network = fixture_network();
    assert!(network.add_vertex(champaign()));

    assert_eq!(calculate_shortest_path(&network, "MEX", "CMI")?, None);
    assert_eq!(calculate_shortest_path(&network, "CMI", "MEX")?, None);
    Ok(())
}

#[test]
fn one_way_edge_is_respected() -> Result<()> {
    let mut network = fixture_network();
    assert!(network.add_vertex(champaign()));
    assert!(network.add_edge("CMI", "MEX", 3011.0));

    let path = calculate_shortest_path(&network, "CMI", "SCL")?.expect("path exists");
    assert_eq!(path.steps, vec!["CMI", "MEX", "SCL"]);
    assert_eq!(calculate_shortest_path(&network, "SCL", "CMI")?, None);
    Ok(())
}

#[test]
fn departure_equals_destination() -> Result<()> {
    let network = fixture_network();
    let path = calculate_shortest_path(&network, "SCL", "SCL")?.expect("trivial path");

    assert_eq!(path.steps, vec!["SCL"]);
    assert_eq!(path.distance, 0.0);
    assert_eq!(path.hop_count(), 0);
    Ok(())
}

#[test]
fn unknown_codes_are_errors() {
    let network = fixture_network();
    assert!(matches!(
        calculate_shortest_path(&network, "XXX", "LIM"),
        Err(Error::UnknownVertex { ref code }) if code == "XXX"
    ));
    assert!(matches!(
        calculate_shortest_path(&network, "LIM", "YYY"),
        Err(Error::UnknownVertex { ref code }) if code == "YYY"
    ));
}
