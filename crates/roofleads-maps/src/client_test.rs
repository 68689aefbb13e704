use super::*;

fn test_client(base_url: &str) -> MapsClient {
    MapsClient::with_base_url("test-key", 10, "roofleads-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_joins_geocode_path() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client
        .build_url(GEOCODE_PATH, &[("address", "Richmond Hill")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/geocode/json?address=Richmond+Hill&key=test-key"
    );
}

#[test]
fn build_url_tolerates_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client
        .build_url(
            NEARBY_SEARCH_PATH,
            &[("location", "43.88,-79.44"), ("radius", "800")],
        )
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json?location=43.88%2C-79.44&radius=800&key=test-key"
    );
}

#[test]
fn build_url_escapes_special_characters() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client
        .build_url(GEOCODE_PATH, &[("address", "St. John's & Co #1")])
        .unwrap();
    let query = url.query().unwrap_or_default();
    assert!(!query.contains(" & "), "address should be escaped: {url}");
    assert!(query.contains("%26"), "ampersand should be encoded: {url}");
    assert!(query.contains("%23"), "hash should be encoded: {url}");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = MapsClient::with_base_url("k", 10, "ua", "not a url");
    assert!(matches!(result, Err(MapsError::InvalidBaseUrl(_))));
}
