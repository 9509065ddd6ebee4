use tinyhttpd::http::parser::{ParseError, parse_request_line, parse_status_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_two_tokens_defaults_version() {
    let parsed = parse_request_line(b"GET /index.html\r\n").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_without_crlf_uses_whole_buffer() {
    let parsed = parse_request_line(b"OPTIONS * HTTP/1.0").unwrap();

    assert_eq!(parsed.method, "OPTIONS");
    assert_eq!(parsed.target, "*");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_extra_tokens_ignored() {
    let parsed = parse_request_line(b"GET /a HTTP/1.1 trailing junk\r\n\r\n").unwrap();

    assert_eq!(parsed.target, "/a");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust%20lang HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    // No decoding of any kind
    assert_eq!(parsed.target, "/search?q=rust%20lang");
}

#[test]
fn test_parse_method_case_preserved() {
    let parsed = parse_request_line(b"gEt / HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "gEt");
}

#[test]
fn test_parse_only_first_line_considered() {
    let req = b"GET /first HTTP/1.1\r\nPOST /second HTTP/1.1\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/first");
}

#[test]
fn test_parse_empty_buffer_is_unparsable() {
    assert_eq!(parse_request_line(b""), Err(ParseError::Empty));
}

#[test]
fn test_parse_no_space_is_unparsable() {
    assert_eq!(parse_request_line(b"GARBAGE"), Err(ParseError::MissingTarget));
    assert_eq!(
        parse_request_line(b"GET\r\nHost: x y z\r\n\r\n"),
        Err(ParseError::MissingTarget)
    );
    assert_eq!(parse_request_line(b"\r\n"), Err(ParseError::MissingTarget));
}

#[test]
fn test_parse_any_space_yields_method_and_target() {
    let inputs: [&[u8]; 4] = [b"A B", b"PUT /x", b"XYZ123 /", b"GET /\x00\xff HTTP/1.1"];

    for input in inputs {
        let parsed = parse_request_line(input).unwrap();
        assert!(!parsed.method.is_empty());
        assert!(!parsed.target.is_empty());
    }
}

#[test]
fn test_parse_status_line() {
    let (code, reason) = parse_status_line(b"HTTP/1.1 501 Not Implemented\r\nServer: x\r\n\r\n").unwrap();

    assert_eq!(code, 501);
    assert_eq!(reason, "Not Implemented");
}

#[test]
fn test_parse_status_line_rejects_garbage() {
    assert_eq!(parse_status_line(b"HELLO 200 OK\r\n"), None);
    assert_eq!(parse_status_line(b"HTTP/1.1 abc OK\r\n"), None);
    assert_eq!(parse_status_line(b""), None);
}
