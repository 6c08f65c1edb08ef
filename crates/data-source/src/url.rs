use crate::{DataSource, DataSourceError, Line};
use async_trait::async_trait;
use std::time::Duration;

/// Downloads newline-delimited text lists from one or more URLs,
/// fetching each lazily (on first `next()` that reaches it) and
/// buffering the whole body in memory before iterating its lines.
pub struct UrlDataSource {
    client: reqwest::Client,
    urls: Vec<String>,
    url_index: usize,
    buffered_lines: Option<std::vec::IntoIter<String>>,
}

impl UrlDataSource {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(60))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("reqwest client configuration is valid");
        Self {
            client,
            urls: urls.into_iter().map(Into::into).collect(),
            url_index: 0,
            buffered_lines: None,
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, DataSourceError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| DataSourceError::Fetch {
                url: url.to_string(),
                source,
            })?
            .text()
            .await
            .map_err(|source| DataSourceError::Fetch {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl DataSource for UrlDataSource {
    async fn reset(&mut self) -> Result<(), DataSourceError> {
        self.url_index = 0;
        self.buffered_lines = None;
        Ok(())
    }

    async fn next(&mut self) -> Result<Line, DataSourceError> {
        loop {
            if self.buffered_lines.is_none() {
                if self.url_index >= self.urls.len() {
                    return Ok(Line::Done);
                }
                let url = self.urls[self.url_index].clone();
                match self.fetch(&url).await {
                    Ok(body) => {
                        let lines: Vec<String> = body.lines().map(str::to_string).collect();
                        self.buffered_lines = Some(lines.into_iter());
                    }
                    Err(err) => {
                        tracing::warn!(url = %url, error = %err, "data source fetch failed, skipping");
                        self.url_index += 1;
                        continue;
                    }
                }
            }

            let iter = self.buffered_lines.as_mut().unwrap();
            match iter.next() {
                Some(raw) => {
                    if let Some(normalized) = crate::normalize_line(&raw) {
                        return Ok(Line::Data(normalized));
                    }
                    // blank/comment line: keep scanning this body
                }
                None => {
                    self.buffered_lines = None;
                    self.url_index += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn fetches_and_filters_lines() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/list.txt")
            .with_status(200)
            .with_body("# header\n1.2.3.4\n5.6.7.0/24 seen-recently\n\n")
            .create_async()
            .await;

        let mut source = UrlDataSource::new([format!("{}/list.txt", server.url())]);
        assert_eq!(source.next().await.unwrap(), Line::Data("1.2.3.4".into()));
        assert_eq!(
            source.next().await.unwrap(),
            Line::Data("5.6.7.0/24".into())
        );
        assert_eq!(source.next().await.unwrap(), Line::Done);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_url_is_skipped_not_fatal() {
        let mut source = UrlDataSource::new(["http://127.0.0.1:1/unreachable.txt"]);
        assert_eq!(source.next().await.unwrap(), Line::Done);
    }
}
