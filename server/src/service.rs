use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use pokeduel_battle::TypeNameMatching;
use pokeduel_protocol::{ParseError, error_line, handle_line};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Longest request line accepted, excluding the newline
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Source of incoming connections
pub trait Acceptor: Send + 'static {
    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send;
}

impl Acceptor for TcpListener {
    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// Accept connections forever, one task per connection
///
/// A failed accept (for example running out of file descriptors) is logged
/// and retried after a short pause.
pub async fn serve<A: Acceptor>(mut acceptor: A, matching: TypeNameMatching) {
    loop {
        let (stream, peer) = match acceptor.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to accept connection");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };

        tracing::debug!(peer = %peer, "Connection accepted");

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer, matching).await {
                tracing::warn!(peer = %peer, error = %e, "Connection closed with error");
            }
        });
    }
}

/// Answer every request line on `stream` with one response line
pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    matching: TypeNameMatching,
) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    while let Some(line) = read_request_line(&mut reader, &mut buf, MAX_REQUEST_BYTES)
        .await
        .context("Failed to read request")?
    {
        let mut response = match line {
            RequestLine::Text(text) if text.trim().is_empty() => continue,
            RequestLine::Text(text) => handle_line(&text, matching),
            RequestLine::Rejected(e) => {
                tracing::debug!(peer = %peer, error = %e, "Unreadable request line");
                error_line(&e)
            }
        };
        response.push('\n');

        writer
            .write_all(response.as_bytes())
            .await
            .context("Failed to send response")?;
    }

    tracing::debug!(peer = %peer, "Connection closed");
    Ok(())
}

#[derive(Debug)]
enum RequestLine {
    Text(String),
    Rejected(ParseError),
}

/// Read one newline-terminated line, keeping at most `max` bytes of it
///
/// An oversized line is drained up to its newline and reported as
/// [`ParseError::TooLong`], so the next line starts cleanly. Returns `None` at
/// end of stream.
async fn read_request_line<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max: usize,
) -> io::Result<Option<RequestLine>> {
    buf.clear();
    let mut seen = 0usize;

    loop {
        let (used, done) = {
            let available = reader.fill_buf().await?;
            if available.is_empty() {
                if seen == 0 {
                    return Ok(None);
                }
                break;
            }

            let (chunk, done) = match available.iter().position(|b| *b == b'\n') {
                Some(i) => (&available[..i], true),
                None => (available, false),
            };
            if seen + chunk.len() <= max {
                buf.extend_from_slice(chunk);
            }
            seen += chunk.len();
            (chunk.len() + usize::from(done), done)
        };
        reader.consume(used);

        if done {
            break;
        }
    }

    if seen > max {
        return Ok(Some(RequestLine::Rejected(ParseError::TooLong(max))));
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    Ok(Some(match String::from_utf8(std::mem::take(buf)) {
        Ok(text) => RequestLine::Text(text),
        Err(_) => RequestLine::Rejected(ParseError::NotUtf8),
    }))
}
