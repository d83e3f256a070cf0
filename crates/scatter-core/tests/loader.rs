// File: crates/scatter-core/tests/loader.rs
// Purpose: Data loader: payload parsing, file loading and a single HTTP fetch against a local server.

use std::io::Write as _;

use scatter_core::{fetch_records, load, load_file, parse_records, LoadError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const SAMPLE: &str = r#"[
  {"Time":"36:50","Place":1,"Seconds":2210,"Name":"Marco Pantani","Year":1995,"Nationality":"ITA",
   "Doping":"Alleged drug use during 1995 due to high hematocrit levels",
   "URL":"https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"},
  {"Time":"39:22","Place":35,"Seconds":2362,"Name":"Nairo Quintana","Year":"2015","Nationality":"COL",
   "Doping":"","URL":""}
]"#;

/// Serve one HTTP response on an ephemeral port, then close.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        if let Ok((mut sock, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = sock.read(&mut buf).await;
            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = sock.write_all(resp.as_bytes()).await;
            let _ = sock.shutdown().await;
        }
    });
    format!("http://{addr}/cyclist-data.json")
}

/// Talks to 127.0.0.1 directly, whatever proxy the environment configures.
fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().expect("client")
}

#[test]
fn parses_upstream_shape_in_order() {
    let records = parse_records(SAMPLE).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Marco Pantani");
    assert_eq!(records[0].place, Some(1));
    assert_eq!(records[0].seconds, Some(2210));
    // numeric coercion of a string year
    assert_eq!(records[1].year, 2015);
    assert!(!records[1].has_allegation());
}

#[test]
fn invalid_payloads_are_parse_errors() {
    for bad in ["not json", "{\"Time\":\"36:50\"}", r#"[{"Time":"36:50","Year":1995}]"#, r#"[{"Time":"36:50","Year":"nineteen","Name":"A","Nationality":"B","Doping":""}]"#] {
        assert!(matches!(parse_records(bad), Err(LoadError::Parse(_))), "{bad}");
    }
}

#[test]
fn loads_records_from_file() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).expect("dir");
    let path = dir.join("cyclist-sample.json");
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(SAMPLE.as_bytes()))
        .expect("write sample");

    let records = load_file(&path).expect("load");
    assert_eq!(records.len(), 2);

    let missing = load_file(&dir.join("does-not-exist.json"));
    assert!(matches!(missing, Err(LoadError::Io { .. })));
}

#[tokio::test]
async fn fetches_once_over_http() {
    let url = serve_once("200 OK", SAMPLE).await;
    let client = local_client();
    let records = fetch_records(&client, &url).await.expect("fetch");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].nationality, "COL");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let url = serve_once("404 Not Found", "missing").await;
    let client = local_client();
    let err = fetch_records(&client, &url).await.expect_err("404");
    assert!(matches!(err, LoadError::Fetch { .. }));
}

#[tokio::test]
async fn bad_body_is_a_parse_error() {
    let url = serve_once("200 OK", "<html>oops</html>").await;
    let client = local_client();
    let err = load(&client, &url).await.expect_err("html body");
    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn refused_connection_is_a_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = local_client();
    let err = fetch_records(&client, &format!("http://{addr}/")).await.expect_err("refused");
    assert!(matches!(err, LoadError::Fetch { .. }));
}
