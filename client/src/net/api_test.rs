use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("http://127.0.0.1:8000", LOGIN_ENDPOINT), "http://127.0.0.1:8000/base/login/");
}

#[test]
fn endpoint_url_strips_trailing_slashes_from_base() {
    assert_eq!(endpoint_url("https://api.example.com//", REGISTER_ENDPOINT), "https://api.example.com/base/register/");
}

#[test]
fn endpoint_url_with_empty_base_is_same_origin() {
    assert_eq!(endpoint_url("", LOGIN_ENDPOINT), "/base/login/");
}

#[test]
fn http_transport_builds_urls_from_its_base() {
    let transport = HttpTransport::new("http://localhost:9000/");
    assert_eq!(transport.base(), "http://localhost:9000/");
    assert_eq!(transport.url_for(REGISTER_ENDPOINT), "http://localhost:9000/base/register/");
}

#[test]
fn default_transport_uses_build_time_base() {
    assert_eq!(HttpTransport::default().base(), api_base());
}

#[test]
fn status_error_names_endpoint_and_status() {
    let err = ApiError::Status { endpoint: LOGIN_ENDPOINT.to_owned(), status: 401 };
    assert_eq!(err.to_string(), "/base/login/ responded with status 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_is_unavailable_outside_the_browser() {
    let body = AuthRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let result = futures::executor::block_on(HttpTransport::default().post_credentials(LOGIN_ENDPOINT, &body));
    assert_eq!(result, Err(ApiError::Unavailable));
}
