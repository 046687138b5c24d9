use botstat::api::{ApiError, ChartRange, RankWindow, StatsClient};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// Minimal in-process responder: accepts one connection per canned body,
/// answers each with a JSON response, and reports the form bodies it saw.
fn spawn_responder(bodies: Vec<&'static str>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for body in bodies {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let request = read_request(&mut stream);
            tx.send(request).expect("report request body");

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write response");
        }
    });

    (format!("http://{}/api/statistics", addr), rx)
}

/// Read one HTTP request and return its body.
fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut buf).expect("read request");
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let content_length: usize = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0);

    while raw.len() < header_end + content_length {
        let n = stream.read(&mut buf).expect("read request body");
        raw.extend_from_slice(&buf[..n]);
    }

    String::from_utf8_lossy(&raw[header_end..header_end + content_length]).to_string()
}

#[test]
fn summary_fetch_sends_type_one_and_decodes_counters() {
    let (url, rx) = spawn_responder(vec![
        r#"{"success": 1, "data": {"statistics_data": {"speak_today_count": 321, "sign_today_count": 12, "point_today_total": 450, "score_today_total": 9000}}}"#,
    ]);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    let counters = client.fetch_summary().unwrap();
    assert_eq!(counters.speak_today_count, 321);
    assert_eq!(counters.sign_today_count, 12);
    assert_eq!(counters.point_today_total, 450);
    assert_eq!(counters.score_today_total, 9000);

    let body = rx.recv().unwrap();
    assert!(body.contains("type=1"), "body was: {}", body);
    assert!(body.contains("botid=10001"), "body was: {}", body);
    assert!(body.contains("target=g%23220100"), "body was: {}", body);
    assert!(body.contains("days=0"), "body was: {}", body);
}

#[test]
fn series_fetch_sends_range_days_and_maps_wire_fields() {
    let (url, rx) = spawn_responder(vec![
        r#"{"success": 1, "data": {"botid": "10001", "target": "g#220100", "max_speaks": 400, "min_speaks": 0, "statistics_data": [{"date": "2017-05-29", "message_count": 388, "vaild_count": 102}]}}"#,
    ]);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    let data = client.fetch_series(ChartRange::Month).unwrap();
    assert_eq!(data.max_speaks, 400);
    assert_eq!(data.min_speaks, 0);
    assert_eq!(data.statistics_data.len(), 1);
    assert_eq!(data.statistics_data[0].message_count, 388);
    assert_eq!(data.statistics_data[0].valid_count, 102);

    let body = rx.recv().unwrap();
    assert!(body.contains("type=2"), "body was: {}", body);
    assert!(body.contains("days=30"), "body was: {}", body);
}

#[test]
fn recompute_sends_type_three_with_days_one() {
    let (url, rx) = spawn_responder(vec![r#"{"success": 1}"#]);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    client.recompute().unwrap();

    let body = rx.recv().unwrap();
    assert!(body.contains("type=3"), "body was: {}", body);
    assert!(body.contains("days=1"), "body was: {}", body);
}

#[test]
fn rank_fetch_preserves_order_and_sends_window_days() {
    let (url, rx) = spawn_responder(vec![
        r#"{"success": 1, "data": {"botid": "10001", "target": "g#220100", "statistics_data": [{"id": 777, "name": "most active", "count": 42}, {"id": 888, "name": "runner up", "count": 17}]}}"#,
    ]);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    let entries = client.fetch_rank(RankWindow::AllTime).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 777);
    assert_eq!(entries[0].count, 42);
    assert_eq!(entries[1].name, "runner up");

    let body = rx.recv().unwrap();
    assert!(body.contains("type=4"), "body was: {}", body);
    assert!(body.contains("days=99999"), "body was: {}", body);
}

#[test]
fn non_success_envelope_maps_to_the_no_op_error() {
    let (url, _rx) = spawn_responder(vec![r#"{"success": 0}"#]);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    let err = client.fetch_series(ChartRange::Week).unwrap_err();
    assert!(err.is_unsuccessful(), "got: {}", err);
}

#[test]
fn garbage_body_maps_to_a_decode_error() {
    let (url, _rx) = spawn_responder(vec!["<html>not json</html>"]);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    let err = client.fetch_summary().unwrap_err();
    assert!(
        matches!(err, ApiError::Decode(_)),
        "expected decode error, got: {}",
        err
    );
}

#[test]
fn unreachable_server_maps_to_a_transport_error() {
    // Bind-then-drop leaves a port nothing is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/api/statistics", port);
    let client = StatsClient::new(&url, "10001", "g#220100").unwrap();

    let err = client.fetch_summary().unwrap_err();
    assert!(
        matches!(err, ApiError::Transport(_)),
        "expected transport error, got: {}",
        err
    );
}
