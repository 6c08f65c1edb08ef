//! A minimal SMTP client for the single purpose of checking whether a
//! mailbox is willing to accept mail, without ever handing over a
//! message: connect, `HELO`, `MAIL FROM`, `RCPT TO`, then drop the
//! connection. No `DATA` is sent, so the recipient is never notified,
//! and the connection is closed without `QUIT` to avoid leaving a
//! trace in the remote server's log.

use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum SmtpProbeError {
    #[error("connect to {0} timed out")]
    ConnectTimeout(String),
    #[error("io error talking to {host}: {source}")]
    Io {
        host: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} did not greet with a 2xx banner")]
    NoBanner(String),
}

/// Probes `host:25` for whether `rcpt_to` looks like a deliverable
/// mailbox. A `5xx` response to `RCPT TO` is a firm "no"; anything
/// else (including a greylisting `4xx`) is treated as "yes", matching
/// how the upstream service behaves: only a hard rejection should lose
/// the existence check, a temporary one should not.
pub async fn probe_existing(
    host: &str,
    helo: &str,
    mail_from: &str,
    rcpt_to: &str,
) -> Result<bool, SmtpProbeError> {
    probe_existing_on_port(host, 25, helo, mail_from, rcpt_to).await
}

/// Same as [`probe_existing`] but against an explicit port, so tests
/// can point it at a loopback stub instead of the fixed SMTP port.
pub async fn probe_existing_on_port(
    host: &str,
    port: u16,
    helo: &str,
    mail_from: &str,
    rcpt_to: &str,
) -> Result<bool, SmtpProbeError> {
    let addr = format!("{host}:{port}");
    let stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(&addr))
        .await
        .map_err(|_| SmtpProbeError::ConnectTimeout(addr.clone()))?
        .map_err(|source| SmtpProbeError::Io {
            host: addr.clone(),
            source,
        })?;

    let mut conn = Connection::new(stream, addr.clone());

    let banner = conn.read_response().await?;
    if !is_success(&banner) {
        return Err(SmtpProbeError::NoBanner(addr));
    }

    conn.command(&format!("HELO {helo}")).await?;
    if !is_success(&conn.read_response().await?) {
        return Ok(false);
    }

    conn.command(&format!("MAIL FROM:<{mail_from}>")).await?;
    if !is_success(&conn.read_response().await?) {
        return Ok(false);
    }

    conn.command(&format!("RCPT TO:<{rcpt_to}>")).await?;
    let rcpt_response = conn.read_response().await?;

    // The connection is simply dropped here rather than sending QUIT.
    Ok(!is_permanent_failure(&rcpt_response))
}

struct Connection {
    reader: BufReader<tokio::net::tcp::OwnedReadHalf>,
    writer: tokio::net::tcp::OwnedWriteHalf,
    host: String,
}

impl Connection {
    fn new(stream: TcpStream, host: String) -> Self {
        let (read_half, writer) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer,
            host,
        }
    }

    async fn command(&mut self, line: &str) -> Result<(), SmtpProbeError> {
        self.writer
            .write_all(format!("{line}\r\n").as_bytes())
            .await
            .map_err(|source| SmtpProbeError::Io {
                host: self.host.clone(),
                source,
            })
    }

    /// Reads one SMTP response, following continuation lines (`250-`)
    /// until the final line (`250 `) is seen.
    async fn read_response(&mut self) -> Result<String, SmtpProbeError> {
        let mut last = String::new();
        loop {
            let mut line = String::new();
            self.reader
                .read_line(&mut line)
                .await
                .map_err(|source| SmtpProbeError::Io {
                    host: self.host.clone(),
                    source,
                })?;
            let continues = line.as_bytes().get(3) == Some(&b'-');
            last = line;
            if !continues {
                break;
            }
        }
        Ok(last)
    }
}

fn status_code(response: &str) -> Option<u32> {
    response.get(..3)?.parse().ok()
}

fn is_success(response: &str) -> bool {
    matches!(status_code(response), Some(code) if (200..300).contains(&code))
}

fn is_permanent_failure(response: &str) -> bool {
    matches!(status_code(response), Some(code) if (500..600).contains(&code))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_code_parsing() {
        assert_eq!(status_code("250 OK\r\n"), Some(250));
        assert_eq!(status_code("550 no such user\r\n"), Some(550));
        assert_eq!(status_code(""), None);
    }

    #[test]
    fn success_vs_permanent_failure() {
        assert!(is_success("250 OK\r\n"));
        assert!(!is_success("450 greylisted\r\n"));
        assert!(!is_permanent_failure("250 OK\r\n"));
        assert!(is_permanent_failure("550 no such user\r\n"));
        assert!(!is_permanent_failure("450 greylisted\r\n"));
    }

    async fn run_stub(
        responses: &'static [&'static str],
    ) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (read_half, mut writer) = stream.into_split();
            let mut reader = BufReader::new(read_half);
            writer.write_all(responses[0].as_bytes()).await.unwrap();
            for response in &responses[1..] {
                let mut line = String::new();
                reader.read_line(&mut line).await.unwrap();
                writer.write_all(response.as_bytes()).await.unwrap();
            }
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn accepted_recipient_is_existing() {
        let (addr, server) = run_stub(&[
            "220 stub.example ESMTP\r\n",
            "250 hello\r\n",
            "250 sender ok\r\n",
            "250 recipient ok\r\n",
        ])
        .await;

        let result = probe_existing_on_port(
            &addr.ip().to_string(),
            addr.port(),
            "prober.example",
            "prober@example.com",
            "target@example.com",
        )
        .await
        .unwrap();

        server.await.unwrap();
        assert!(result);
    }

    #[tokio::test]
    async fn permanent_rcpt_rejection_is_not_existing() {
        let (addr, server) = run_stub(&[
            "220 stub.example ESMTP\r\n",
            "250 hello\r\n",
            "250 sender ok\r\n",
            "550 no such user\r\n",
        ])
        .await;

        let result = probe_existing_on_port(
            &addr.ip().to_string(),
            addr.port(),
            "prober.example",
            "prober@example.com",
            "target@example.com",
        )
        .await
        .unwrap();

        server.await.unwrap();
        assert!(!result);
    }

    #[tokio::test]
    async fn greylisted_rcpt_still_counts_as_existing() {
        let (addr, server) = run_stub(&[
            "220 stub.example ESMTP\r\n",
            "250 hello\r\n",
            "250 sender ok\r\n",
            "450 try again later\r\n",
        ])
        .await;

        let result = probe_existing_on_port(
            &addr.ip().to_string(),
            addr.port(),
            "prober.example",
            "prober@example.com",
            "target@example.com",
        )
        .await
        .unwrap();

        server.await.unwrap();
        assert!(result);
    }
}
