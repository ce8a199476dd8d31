use tripline::{
    estimator::{Error, RouteEstimator},
    shared::{Coordinate, Stop},
};

fn ids(stops: &[Stop]) -> Vec<&str> {
    stops.iter().map(|stop| &*stop.id).collect()
}

fn city_hall() -> Stop {
    Stop::new("A", "Seoul City Hall", Coordinate::from((37.5665, 126.9780)))
}

fn gyeongbokgung() -> Stop {
    Stop::new("B", "Gyeongbokgung", Coordinate::from((37.5796, 126.9770)))
}

fn deoksugung() -> Stop {
    Stop::new("C", "Deoksugung", Coordinate::from((37.5658, 126.9751)))
}

#[test]
fn closer_stop_goes_first() {
    let estimator = RouteEstimator::new();
    let ordered = estimator
        .optimize_stop_order(&[city_hall(), gyeongbokgung(), deoksugung()])
        .unwrap();
    assert_eq!(ids(&ordered), vec!["A", "C", "B"]);
}

#[test]
fn two_or_fewer_stops_are_unchanged() {
    let estimator = RouteEstimator::new();
    let empty: Vec<Stop> = Vec::new();
    assert!(estimator.optimize_stop_order(&empty).unwrap().is_empty());

    let pair = vec![gyeongbokgung(), city_hall()];
    assert_eq!(estimator.optimize_stop_order(&pair).unwrap(), pair);
}

#[test]
fn first_stop_is_anchored() {
    let estimator = RouteEstimator::new();
    let stops = vec![gyeongbokgung(), deoksugung(), city_hall()];
    let ordered = estimator.optimize_stop_order(&stops).unwrap();
    assert_eq!(ordered[0], stops[0]);
    assert_eq!(ids(&ordered), vec!["B", "A", "C"]);
}

#[test]
fn ties_keep_input_order() {
    let estimator = RouteEstimator::new();
    let origin = Stop::new("O", "", Coordinate::from((0.0, 0.0)));
    let east = Stop::new("E", "", Coordinate::from((0.0, 0.01)));
    let west = Stop::new("W", "", Coordinate::from((0.0, -0.01)));

    let ordered = estimator
        .optimize_stop_order(&[origin.clone(), east.clone(), west.clone()])
        .unwrap();
    assert_eq!(ids(&ordered), vec!["O", "E", "W"]);

    let ordered = estimator
        .optimize_stop_order(&[origin, west, east])
        .unwrap();
    assert_eq!(ids(&ordered), vec!["O", "W", "E"]);
}

#[test]
fn greedy_walk_along_a_line() {
    let estimator = RouteEstimator::new();
    let stops: Vec<Stop> = [0.0, 0.04, 0.01, 0.03, 0.02]
        .into_iter()
        .enumerate()
        .map(|(i, lon)| Stop::new(i.to_string(), "", Coordinate::from((35.0, 127.0 + lon))))
        .collect();
    let ordered = estimator.optimize_stop_order(&stops).unwrap();
    assert_eq!(ids(&ordered), vec!["0", "2", "4", "3", "1"]);
}

#[test]
fn invalid_coordinate_fails_reordering() {
    let estimator = RouteEstimator::new();
    let broken = Stop::new("X", "", Coordinate::from((-95.0, 10.0)));
    assert!(matches!(
        estimator.optimize_stop_order(&[city_hall(), broken, deoksugung()]),
        Err(Error::InvalidCoordinate { .. })
    ));
}

#[test]
fn reordered_route_is_not_longer_for_a_detour() {
    let estimator = RouteEstimator::new();
    let stops = vec![city_hall(), gyeongbokgung(), deoksugung()];
    let ordered = estimator.optimize_stop_order(&stops).unwrap();

    let before = estimator.summarize_route(
        &estimator
            .compute_route(&stops, tripline::estimator::TravelMode::Walk)
            .unwrap(),
    );
    let after = estimator.summarize_route(
        &estimator
            .compute_route(&ordered, tripline::estimator::TravelMode::Walk)
            .unwrap(),
    );
    assert!(after.total_distance_meters < before.total_distance_meters);
}
