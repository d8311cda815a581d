//! single-shot HTTP server for exercising the reqwest clients against real sockets.

use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::mpsc::{self, Receiver},
    thread,
    time::Duration,
};

/// the request the server received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub head: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    /// header lookup is case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }
}

pub struct OneShotServer {
    pub base_url: String,
    requests: Receiver<RecordedRequest>,
}

impl OneShotServer {
    /// answers the first connection with this status line and body, then stops.
    pub fn respond(status: &str, content_type: &str, body: &str) -> OneShotServer {
        let listener =
            TcpListener::bind("127.0.0.1:0").expect("test invariant failed: bind local port");
        let address = listener
            .local_addr()
            .expect("test invariant failed: local address");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (sender, requests) = mpsc::channel();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut buffer = Vec::new();
            let mut chunk = [0u8; 1024];
            let head_end = loop {
                if let Some(end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                    break end;
                }
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => buffer.extend_from_slice(&chunk[..n]),
                }
            };
            let head = String::from_utf8_lossy(&buffer[..head_end]).to_string();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let body_start = head_end + 4;
            while buffer.len() < body_start + content_length {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buffer.extend_from_slice(&chunk[..n]),
                }
            }
            let body = String::from_utf8_lossy(&buffer[body_start..]).to_string();
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            let _ = sender.send(RecordedRequest { head, body });
        });
        OneShotServer {
            base_url: format!("http://{address}"),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// the request the server answered.
    pub fn received(&self) -> RecordedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("test invariant failed: server saw no request")
    }
}

/// a local address with nothing listening on it.
pub fn closed_base_url() -> String {
    let listener =
        TcpListener::bind("127.0.0.1:0").expect("test invariant failed: bind local port");
    let address = listener
        .local_addr()
        .expect("test invariant failed: local address");
    drop(listener);
    format!("http://{address}")
}
