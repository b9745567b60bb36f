//! Integration tests for the GraphHopper clients (wiremock-based)

use domain::{GeoLocation, RouteRequest, TravelMode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use integration_graphhopper::{
    GeocodingClient, GeocodingError, GraphHopperConfig, GraphHopperGeocodingClient,
    GraphHopperRoutingClient, RoutingClient, RoutingError,
};

fn config_for_mock(base_url: &str) -> GraphHopperConfig {
    GraphHopperConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        ..GraphHopperConfig::default()
    }
}

fn sample_request(mode: TravelMode) -> RouteRequest {
    RouteRequest::new(
        GeoLocation::new(40.4168, -3.7038).unwrap(),
        GeoLocation::new(40.9701, -5.6635).unwrap(),
        mode,
    )
}

const fn sample_geocode_json() -> &'static str {
    r#"{
        "hits": [{
            "point": { "lat": 40.4168, "lng": -3.7038 },
            "name": "Puerta del Sol",
            "country": "España",
            "city": "Madrid",
            "osm_id": 26825446
        }],
        "locale": "es"
    }"#
}

const fn sample_route_json() -> &'static str {
    r#"{
        "paths": [{
            "distance": 212345.6,
            "time": 8100000,
            "points_encoded": false,
            "points": {
                "type": "LineString",
                "coordinates": [[-3.7038, 40.4168], [-5.6635, 40.9701]]
            },
            "instructions": [
                { "text": "Continue onto Calle Mayor", "distance": 350.2, "time": 42000, "sign": 0 },
                { "text": "Turn left onto A-6", "distance": 211995.4, "time": 8058000, "sign": -2 },
                { "text": "Arrive at destination", "distance": 0.0, "time": 0, "sign": 4 }
            ]
        }]
    }"#
}

/// Matches when the `point` parameters appear in the given order
struct PointOrder(&'static str, &'static str);

impl Match for PointOrder {
    fn matches(&self, request: &Request) -> bool {
        let points: Vec<String> = request
            .url
            .query_pairs()
            .filter(|(k, _)| k == "point")
            .map(|(_, v)| v.into_owned())
            .collect();
        points == [self.0, self.1]
    }
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", "Puerta del Sol, Madrid"))
        .and(query_param("limit", "1"))
        .and(query_param("locale", "es"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();

    let place = client.geocode("  Puerta del Sol, Madrid ").await.unwrap();
    assert_eq!(place.name, "Puerta del Sol");
    assert!((-90.0..=90.0).contains(&place.location.latitude()));
    assert!((-180.0..=180.0).contains(&place.location.longitude()));
}

#[tokio::test]
async fn test_geocode_zero_hits_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "hits": [] }"#))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.geocode("Calle Inexistente 999").await.unwrap_err();
    assert!(matches!(err, GeocodingError::AddressNotFound(ref a) if a == "Calle Inexistente 999"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.geocode("Madrid").await.unwrap_err();
    assert!(matches!(err, GeocodingError::RequestFailed(ref m) if m.contains("500")));
}

#[tokio::test]
async fn test_geocode_invalid_key_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"message": "Wrong credentials. Register and get a valid API key"}"#),
        )
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.geocode("Madrid").await.unwrap_err();
    assert!(err.to_string().contains("Wrong credentials"));
}

#[tokio::test]
async fn test_geocode_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client.geocode("Madrid").await.unwrap_err();
    assert!(matches!(
        err,
        GeocodingError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_geocode_connection_refused() {
    // Nothing listens on the discard port
    let client = GraphHopperGeocodingClient::new(&config_for_mock("http://127.0.0.1:9")).unwrap();

    let err = client.geocode("Madrid").await.unwrap_err();
    assert!(err.is_retryable());
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn test_geocode_empty_address_skips_request() {
    let client = GraphHopperGeocodingClient::new(&GraphHopperConfig::for_testing()).unwrap();

    let err = client.geocode("   ").await.unwrap_err();
    assert!(matches!(err, GeocodingError::AddressNotFound(_)));
}

#[tokio::test]
async fn test_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .and(PointOrder("40.4168,-3.7038", "40.9701,-5.6635"))
        .and(query_param("vehicle", "car"))
        .and(query_param("locale", "es"))
        .and(query_param("instructions", "true"))
        .and(query_param("calc_points", "true"))
        .and(query_param("points_encoded", "false"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let route = client.route(&sample_request(TravelMode::Car)).await.unwrap();
    assert!((route.distance_meters - 212_345.6).abs() < 1e-6);
    assert!((route.duration_millis - 8_100_000.0).abs() < f64::EPSILON);
    assert_eq!(route.instructions.len(), 3);
    assert_eq!(route.instructions[1].text, "Turn left onto A-6");
}

#[tokio::test]
async fn test_route_bike_mode_sent_as_vehicle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .and(query_param("vehicle", "bike"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let mode = TravelMode::from_menu_choice("2");
    assert!(client.route(&sample_request(mode)).await.is_ok());
}

#[tokio::test]
async fn test_route_zero_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "paths": [] }"#))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client
        .route(&sample_request(TravelMode::Foot))
        .await
        .unwrap_err();
    assert!(matches!(err, RoutingError::NoRouteAvailable));
}

#[tokio::test]
async fn test_route_api_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"message": "Cannot find point 1: 40.9701,-5.6635", "hints": [{"message": "Cannot find point 1"}]}"#,
        ))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client
        .route(&sample_request(TravelMode::Car))
        .await
        .unwrap_err();
    assert!(matches!(err, RoutingError::ApiError(ref m) if m.starts_with("Cannot find point 1")));
}

#[tokio::test]
async fn test_route_server_error_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client
        .route(&sample_request(TravelMode::Car))
        .await
        .unwrap_err();
    assert!(matches!(err, RoutingError::ApiError(ref m) if m.contains("503")));
}

#[tokio::test]
async fn test_route_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client
        .route(&sample_request(TravelMode::Car))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RoutingError::RateLimitExceeded {
            retry_after_secs: None
        }
    ));
}

#[tokio::test]
async fn test_route_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();

    let err = client
        .route(&sample_request(TravelMode::Car))
        .await
        .unwrap_err();
    assert!(matches!(err, RoutingError::ParseError(_)));
}
