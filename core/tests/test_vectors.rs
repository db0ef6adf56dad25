//! Verify `build_request` against JSON test vectors stored in `test-vectors/`.
//!
//! Each case gives the method string, URI and options a caller passes, and
//! the request the transport should receive.

use helper_core::{build_request, Headers, HttpMethod, QueryParams, RequestOptions};
use serde::Deserialize;

#[derive(Deserialize)]
struct Vectors {
    cases: Vec<Case>,
    rejected: Vec<Rejected>,
}

#[derive(Deserialize)]
struct Case {
    name: String,
    method: String,
    uri: String,
    options: VectorOptions,
    expected_request: ExpectedRequest,
}

#[derive(Deserialize)]
struct VectorOptions {
    query: Option<QueryParams>,
    headers: Option<Headers>,
    body: Option<String>,
}

#[derive(Deserialize)]
struct ExpectedRequest {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

#[derive(Deserialize)]
struct Rejected {
    name: String,
    method: String,
    uri: String,
    status: u16,
}

fn load() -> Vectors {
    let raw = include_str!("../../test-vectors/requests.json");
    serde_json::from_str(raw).unwrap()
}

fn options(v: VectorOptions) -> RequestOptions {
    let mut options = RequestOptions::new();
    if let Some(query) = v.query {
        options = options.query(query);
    }
    if let Some(headers) = v.headers {
        options = options.headers(headers);
    }
    if let Some(body) = v.body {
        options = options.body(body);
    }
    options
}

#[test]
fn request_test_vectors() {
    for case in load().cases {
        let name = &case.name;
        let expected = case.expected_request;
        let req = build_request(&case.method, &case.uri, &options(case.options)).unwrap();

        let method: HttpMethod = expected.method.parse().unwrap();
        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(req.url, expected.url, "{name}: url");
        assert_eq!(req.headers, expected.headers, "{name}: headers");
        assert_eq!(
            req.body.as_deref(),
            expected.body.as_deref().map(str::as_bytes),
            "{name}: body"
        );
    }
}

#[test]
fn rejected_test_vectors() {
    for case in load().rejected {
        let err = build_request(&case.method, &case.uri, &RequestOptions::new()).unwrap_err();
        assert_eq!(err.status_code(), case.status, "{}: status", case.name);
    }
}
