//! One-shot local HTTP server for exercising providers without the network.

use reqwest::Client;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

pub(crate) struct StubServer {
    pub url: String,
    request: JoinHandle<String>,
}

impl StubServer {
    /// Accept a single connection and answer it with `status` and a JSON `body`.
    pub async fn respond(status: u16, reason: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local address");

        let response = format!(
            "HTTP/1.1 {status} {reason}\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n{body}",
            body.len()
        );

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.expect("read request");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&head).into_owned()
        });

        Self {
            url: format!("http://{addr}/search"),
            request,
        }
    }

    /// The request line and headers as received, lowercased.
    pub async fn received(self) -> String {
        self.request.await.expect("stub task").to_lowercase()
    }
}

/// A URL on a local port nothing listens on.
pub(crate) async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local address");
    drop(listener);

    format!("http://{addr}/search")
}

/// Client that ignores proxy environment variables so tests always hit the stub.
pub(crate) fn client() -> Client {
    Client::builder().no_proxy().build().expect("build test client")
}
