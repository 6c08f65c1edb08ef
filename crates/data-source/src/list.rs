use crate::{DataSource, DataSourceError, Line};
use async_trait::async_trait;

/// A fixed in-memory list, normalized once at construction. Used for
/// small inline overrides and for tests.
pub struct ListDataSource {
    entries: Vec<String>,
    position: usize,
}

impl ListDataSource {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .filter_map(|raw| crate::normalize_line(&raw.into()))
                .collect(),
            position: 0,
        }
    }
}

#[async_trait]
impl DataSource for ListDataSource {
    async fn reset(&mut self) -> Result<(), DataSourceError> {
        self.position = 0;
        Ok(())
    }

    async fn next(&mut self) -> Result<Line, DataSourceError> {
        match self.entries.get(self.position) {
            Some(entry) => {
                self.position += 1;
                Ok(Line::Data(entry.clone()))
            }
            None => Ok(Line::Done),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn iterates_entries_then_restarts_after_reset() {
        let mut source = ListDataSource::new(["1.2.3.4", "# skip me", "5.6.7.0/24"]);
        assert_eq!(source.next().await.unwrap(), Line::Data("1.2.3.4".into()));
        assert_eq!(
            source.next().await.unwrap(),
            Line::Data("5.6.7.0/24".into())
        );
        assert_eq!(source.next().await.unwrap(), Line::Done);

        source.reset().await.unwrap();
        assert_eq!(source.next().await.unwrap(), Line::Data("1.2.3.4".into()));
    }
}
