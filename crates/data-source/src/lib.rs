//! Pluggable sources of newline-delimited reputation data: remote
//! lists fetched over HTTP, a directory of local `*.txt` files, an
//! in-memory list (used for tests and small inline overrides), and an
//! always-empty stub. Every variant yields already comment-stripped
//! text lines; interpreting a line as an IP/CIDR or a bare domain is
//! the caller's job, since the same iteration contract backs both.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("fetching {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading {path} failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no *.txt files found under {0}")]
    EmptyDirectory(PathBuf),
}

/// One line read from a source, already stripped of comments and
/// inline trailing annotations. Distinct from "no more data": a
/// malformed line is reported so the loader can count/skip it instead
/// of mistaking it for end-of-stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Data(String),
    Done,
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Rewinds iteration to the start, re-fetching backing content as
    /// needed (e.g. re-downloading a URL, re-globbing a directory).
    async fn reset(&mut self) -> Result<(), DataSourceError>;

    /// Returns the next line, or [`Line::Done`] once the source is
    /// exhausted. Implementations silently skip comment and blank
    /// lines rather than surfacing them.
    async fn next(&mut self) -> Result<Line, DataSourceError>;
}

/// Strips a `#`-prefixed full-line comment and a trailing
/// space/tab-separated annotation some lists append after the address,
/// returning `None` for blank or comment-only lines.
pub(crate) fn normalize_line(raw: &str) -> Option<String> {
    let line = raw.replace('\t', " ");
    let first_token = line.split(' ').next().unwrap_or("").trim();
    if first_token.is_empty() || first_token.starts_with('#') {
        return None;
    }
    Some(first_token.to_string())
}

pub mod directory;
pub mod list;
pub mod url;

pub use directory::DirectoryDataSource;
pub use list::ListDataSource;
pub use url::UrlDataSource;

/// A source with no data; used where a feature is configured off
/// (e.g. no breach-list override supplied).
#[derive(Default)]
pub struct EmptyDataSource;

#[async_trait]
impl DataSource for EmptyDataSource {
    async fn reset(&mut self) -> Result<(), DataSourceError> {
        Ok(())
    }

    async fn next(&mut self) -> Result<Line, DataSourceError> {
        Ok(Line::Done)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_line_strips_comments_and_trailing_annotations() {
        assert_eq!(normalize_line("# a comment"), None);
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line("   "), None);
        assert_eq!(
            normalize_line("10.0.0.1 # seen on 2024-01-01"),
            Some("10.0.0.1".to_string())
        );
        assert_eq!(
            normalize_line("10.0.0.2\tsome-note"),
            Some("10.0.0.2".to_string())
        );
        assert_eq!(
            normalize_line("192.168.1.0/24"),
            Some("192.168.1.0/24".to_string())
        );
    }

    #[tokio::test]
    async fn empty_source_is_immediately_done() {
        let mut source = EmptyDataSource;
        assert_eq!(source.next().await.unwrap(), Line::Done);
        source.reset().await.unwrap();
        assert_eq!(source.next().await.unwrap(), Line::Done);
    }
}
