//! Minimal HTTP stub standing in for the Better BibTeX endpoints
//!
//! Listens on an ephemeral port; tests point the binary at it through the
//! `REFNOTE_BBT_URL` environment variable. Handles just enough HTTP/1.1 for
//! ureq: request line, headers, Content-Length bodies, keep-alive.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

use serde_json::json;

#[derive(Clone)]
pub struct StubBehavior {
    /// Probe endpoint answers "ready" when true
    pub ready: bool,
    /// Body returned by the citation picker endpoint
    pub picker: String,
    /// JSON array returned as the `item.search` result
    pub search_result: serde_json::Value,
    /// When set, `item.search` answers with a JSON-RPC error envelope
    pub search_error: Option<String>,
    /// When set, the json-rpc endpoint answers with this HTTP status
    pub search_status: Option<u16>,
    /// citekey -> rendered bibliography line
    pub bibliographies: HashMap<String, String>,
}

impl Default for StubBehavior {
    fn default() -> Self {
        Self {
            ready: true,
            picker: String::new(),
            search_result: json!([]),
            search_error: None,
            search_status: None,
            bibliographies: HashMap::new(),
        }
    }
}

pub struct BbtStub {
    addr: SocketAddr,
}

impl BbtStub {
    pub fn spawn(behavior: StubBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let behavior = behavior.clone();
                thread::spawn(move || serve_connection(stream, &behavior));
            }
        });

        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/better-bibtex", self.addr)
    }
}

fn serve_connection(stream: TcpStream, behavior: &StubBehavior) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(clone) => clone,
        Err(_) => return,
    });
    let mut writer = stream;

    loop {
        let mut request_line = String::new();
        if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
            return;
        }

        let mut content_length = 0usize;
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap_or(0) == 0 {
                return;
            }
            let header = header.trim();
            if header.is_empty() {
                break;
            }
            if let Some(value) = header
                .to_ascii_lowercase()
                .strip_prefix("content-length:")
                .map(str::trim)
                .and_then(|v| v.parse().ok())
            {
                content_length = value;
            }
        }

        let mut body = vec![0u8; content_length];
        if content_length > 0 && reader.read_exact(&mut body).is_err() {
            return;
        }
        let body = String::from_utf8_lossy(&body).to_string();

        let (status, content_type, response_body) = route(&request_line, &body, behavior);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n{}",
            status,
            content_type,
            response_body.len(),
            response_body
        );
        if writer.write_all(response.as_bytes()).is_err() {
            return;
        }
        let _ = writer.flush();
    }
}

fn route(request_line: &str, body: &str, behavior: &StubBehavior) -> (String, String, String) {
    let ok = "200 OK".to_string();
    let text = "text/plain".to_string();
    let json_type = "application/json".to_string();

    if request_line.starts_with("GET") && request_line.contains("probe=probe") {
        let answer = if behavior.ready { "ready" } else { "starting" };
        return (ok, text, answer.to_string());
    }

    if request_line.starts_with("GET") && request_line.contains("/cayw") {
        return (ok, text, behavior.picker.clone());
    }

    if request_line.starts_with("POST") && request_line.contains("/json-rpc") {
        if let Some(status) = behavior.search_status {
            return (format!("{} Error", status), text, String::new());
        }

        if body.contains("item.bibliography") {
            let line = behavior
                .bibliographies
                .iter()
                .find(|(citekey, _)| body.contains(citekey.as_str()))
                .map(|(_, line)| line.clone())
                .unwrap_or_default();
            let envelope = json!([{ "jsonrpc": "2.0", "result": line }]);
            return (ok, json_type, envelope.to_string());
        }

        let envelope = match &behavior.search_error {
            Some(message) => json!([{
                "jsonrpc": "2.0",
                "error": { "code": -32600, "message": message }
            }]),
            None => json!([{ "jsonrpc": "2.0", "result": behavior.search_result }]),
        };
        return (ok, json_type, envelope.to_string());
    }

    ("404 Not Found".to_string(), text, String::new())
}
