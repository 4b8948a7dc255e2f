//! Integration tests for the forecast client using wiremock
//!
//! These tests run the location lookup and forecast requests against a mock HTTP
//! server and check request parameters, error reporting and the assembled view.

use owm_forecast::{
    ApiConfig, ForecastDataError, ForecastError, LatLon, LocateLocationError, StatusMessage,
    WeatherForecast,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const APP_ID: &str = "test-app-id";

fn create_test_client(mock_server: &MockServer) -> WeatherForecast {
    let config = ApiConfig::builder()
        .origin(mock_server.uri())
        .app_id(APP_ID)
        .build();
    WeatherForecast::new(config).expect("Failed to create client")
}

fn berlin() -> Value {
    json!([{
        "name": "Berlin",
        "local_names": { "de": "Berlin", "en": "Berlin" },
        "lat": 52.517,
        "lon": 13.3889,
        "country": "DE",
        "state": "Berlin"
    }])
}

fn sample(dt: i64, dt_txt: &str, temp_min: f64, temp_max: f64, rain: Option<f64>) -> Value {
    let mut value = json!({
        "dt": dt,
        "main": {
            "temp": (temp_min + temp_max) / 2.0,
            "feels_like": temp_min,
            "temp_min": temp_min,
            "temp_max": temp_max,
            "pressure": 1015,
            "sea_level": 1015,
            "grnd_level": 1010,
            "humidity": 60,
            "temp_kf": 0
        },
        "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
        "clouds": { "all": 75 },
        "wind": { "speed": 3.5, "deg": 250, "gust": 6.0 },
        "visibility": 10000,
        "pop": 0.1,
        "sys": { "pod": "d" },
        "dt_txt": dt_txt
    });
    if let Some(volume) = rain {
        value["rain"] = json!({ "3h": volume });
    }
    value
}

fn forecast_response() -> Value {
    json!({
        "cod": "200",
        "message": 0,
        "cnt": 3,
        "list": [
            sample(1714586400, "2024-05-01 18:00:00", 280.0, 282.0, Some(0.4)),
            sample(1714597200, "2024-05-01 21:00:00", 282.0, 284.0, None),
            sample(1714608000, "2024-05-02 00:00:00", 290.0, 291.0, None)
        ],
        "city": {
            "id": 2950159,
            "name": "Berlin",
            "coord": { "lat": 52.517, "lon": 13.3889 },
            "country": "DE",
            "population": 1000000,
            "timezone": 0,
            "sunrise": 1714534211,
            "sunset": 1714588420
        }
    })
}

async fn mount_geocoding(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

async fn mount_forecast(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Location lookup
// ============================================================================

#[tokio::test]
async fn test_find_location_sends_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("appid", APP_ID))
        .and(query_param("limit", "1"))
        .and(query_param("q", "Berlin,,DE"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(berlin()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let location = client
        .find_location()
        .city("Berlin")
        .country_code("DE")
        .call()
        .await
        .unwrap()
        .expect("Berlin should be found");

    assert_eq!(location.name, "Berlin");
    assert_eq!(location.country, "DE");
    assert_eq!(location.lat_lon(), LatLon(52.517, 13.3889));
}

#[tokio::test]
async fn test_find_location_without_match_is_none() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let client = create_test_client(&mock_server);
    let location = client.find_location().city("Atlantis").call().await.unwrap();

    assert!(location.is_none());
}

#[tokio::test]
async fn test_find_location_reports_status_line() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server, ResponseTemplate::new(401)).await;

    let client = create_test_client(&mock_server);
    let err = client
        .find_location()
        .city("Berlin")
        .call()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::LocateLocation(LocateLocationError::HttpStatus { .. })
    ));
    assert_eq!(err.to_string(), "HTTP 401 Unauthorized");
}

#[tokio::test]
async fn test_find_location_network_failure_includes_cause() {
    // Reserve a free port, then release it so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = ApiConfig::builder().origin(origin).app_id(APP_ID).build();
    let client = WeatherForecast::new(config).unwrap();

    let err = client
        .find_location()
        .city("Berlin")
        .call()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::LocateLocation(LocateLocationError::NetworkRequest(..))
    ));
    let message = StatusMessage::from_result(&Err::<(), _>(err)).text;
    let (prefix, cause) = message
        .split_once(": ")
        .expect("message should carry the underlying cause");
    assert!(prefix.starts_with("Network request failed for http://"));
    assert!(prefix.ends_with("/geo/1.0/direct"));
    assert!(!cause.is_empty());
    assert!(!message.contains(APP_ID));
}

// ============================================================================
// Forecast fetch
// ============================================================================

#[tokio::test]
async fn test_fetch_forecast_sends_coordinates_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("appid", APP_ID))
        .and(query_param("lat", "52.517"))
        .and(query_param("lon", "13.3889"))
        .and(query_param("cnt", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let forecast = client
        .fetch_forecast()
        .location(LatLon(52.517, 13.3889))
        .sample_limit(3)
        .call()
        .await
        .unwrap();

    assert_eq!(forecast.samples.len(), 3);
    assert_eq!(forecast.city.name, "Berlin");
    assert_eq!(forecast.samples[1].rain_3h(), 0.0);
}

#[tokio::test]
async fn test_fetch_forecast_server_error() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    let err = client
        .fetch_forecast()
        .location(LatLon(0.0, 0.0))
        .call()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::ForecastData(ForecastDataError::HttpStatus { .. })
    ));
    assert_eq!(err.to_string(), "HTTP 503 Service Unavailable");
}

#[tokio::test]
async fn test_fetch_forecast_malformed_sample() {
    let mock_server = MockServer::start().await;
    let mut response = forecast_response();
    response["list"][0]
        .as_object_mut()
        .unwrap()
        .remove("main");
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(response)).await;

    let client = create_test_client(&mock_server);
    let err = client
        .fetch_forecast()
        .location(LatLon(0.0, 0.0))
        .call()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ForecastError::ForecastData(ForecastDataError::JsonParse(_))
    ));
    assert!(err.to_string().starts_with("Failed to parse forecast response"));
}

// ============================================================================
// Combined view
// ============================================================================

#[tokio::test]
async fn test_forecast_view_groups_days() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server, ResponseTemplate::new(200).set_body_json(berlin())).await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .forecast_view()
        .city("Berlin")
        .country_code("DE")
        .call()
        .await;
    assert!(StatusMessage::from_result(&result).is_success());

    let view = result.unwrap();
    assert_eq!(view.location.display_name(), "Berlin, Berlin, DE");
    assert_eq!(view.days.len(), 2);

    let first = &view.days[0];
    assert_eq!(first.day.bucket.date_text(), "2024-05-01");
    assert!((first.day.summary.min_temperature - 6.85).abs() < 1e-9);
    assert!((first.day.summary.precipitation - 0.4).abs() < 1e-9);
    assert_eq!(first.overview.temperature, "7° - 11°");
    assert_eq!(first.overview.condition, "broken clouds");
    assert_eq!(first.detail.water.len(), 2);

    let second = &view.days[1];
    assert!((second.day.summary.min_temperature - 16.85).abs() < 1e-9);
    assert_eq!(second.day.summary.precipitation, 0.0);
    // A single sample still maps onto the plot origin column
    let chart = second.detail.temperature_chart.as_ref().unwrap();
    assert_eq!(chart.line.len(), 1);
    assert_eq!(chart.line[0].x, 40);
}

#[tokio::test]
async fn test_forecast_view_missing_location_skips_forecast() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .forecast_view()
        .city("Atlantis")
        .call()
        .await;

    assert!(matches!(
        result,
        Err(ForecastError::LocationNotFound { ref query }) if query == "Atlantis,,"
    ));

    let status = StatusMessage::from_result(&result);
    assert!(!status.is_success());
    assert_eq!(status.text, "No location found for 'Atlantis,,'");
}
