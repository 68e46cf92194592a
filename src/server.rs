use std::io;

use chrono::Local;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tracing::warn;

use crate::response::build_response;

/// Serves connections one at a time: each session is handled to completion
/// before the next accept. A failed session is logged and the loop moves on.
pub async fn run(listener: TcpListener) -> io::Result<()> {
    loop {
        let (socket, address) = listener.accept().await?;
        if let Err(err) = process_session(socket).await {
            warn!("session with {address} failed: {err}");
        }
    }
}

async fn process_session<S>(socket: S) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut socket = BufReader::new(socket);
    let request = read_request_line(&mut socket).await?;
    println!("{request}");
    let response = build_response(Local::now());
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

async fn read_request_line<S>(socket: &mut BufReader<S>) -> io::Result<String>
where
    S: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    socket.read_until(EOL, &mut bytes).await?;
    if bytes.last() == Some(&EOL) {
        bytes.pop();
    }
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

const EOL: u8 = b'\n';

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;

    use super::*;

    #[tokio::test]
    async fn writes_the_response_after_a_single_line() {
        let (mut client, server) = tokio::io::duplex(1024);
        client.write_all(b"GET / HTTP/1.1\r\n").await.unwrap();
        process_session(server).await.unwrap();
        let mut response = String::new();
        client.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200\r\n"));
        assert!(response.contains("\r\n\r\nHello world! The time is "));
    }

    #[tokio::test]
    async fn responds_when_the_client_closes_without_a_newline() {
        let (mut client, server) = tokio::io::duplex(1024);
        client.shutdown().await.unwrap();
        process_session(server).await.unwrap();
        let mut response = String::new();
        client.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200\r\n"));
    }
}
