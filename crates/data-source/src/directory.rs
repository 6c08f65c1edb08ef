use crate::{DataSource, DataSourceError, Line};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;

/// Iterates every `*.txt` file directly under a directory. The glob is
/// evaluated on construction and on every `reset()`, so files added or
/// removed between loads are picked up on the next scheduled refresh.
pub struct DirectoryDataSource {
    directory: PathBuf,
    files: Vec<PathBuf>,
    file_index: usize,
    current: Option<tokio::io::Lines<tokio::io::BufReader<tokio::fs::File>>>,
}

impl DirectoryDataSource {
    pub async fn new(directory: impl Into<PathBuf>) -> Result<Self, DataSourceError> {
        let mut source = Self {
            directory: directory.into(),
            files: Vec::new(),
            file_index: 0,
            current: None,
        };
        source.load_files().await?;
        Ok(source)
    }

    async fn load_files(&mut self) -> Result<(), DataSourceError> {
        let mut entries =
            tokio::fs::read_dir(&self.directory)
                .await
                .map_err(|source| DataSourceError::Read {
                    path: self.directory.clone(),
                    source,
                })?;
        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| DataSourceError::Read {
                path: self.directory.clone(),
                source,
            })?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
                files.push(path);
            }
        }
        files.sort();
        if files.is_empty() {
            return Err(DataSourceError::EmptyDirectory(self.directory.clone()));
        }
        self.files = files;
        self.file_index = 0;
        self.current = None;
        Ok(())
    }

    async fn open_next_file(&mut self) -> Result<bool, DataSourceError> {
        if self.file_index >= self.files.len() {
            return Ok(false);
        }
        let path = self.files[self.file_index].clone();
        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|source| DataSourceError::Read { path, source })?;
        self.current = Some(tokio::io::BufReader::new(file).lines());
        Ok(true)
    }
}

#[async_trait]
impl DataSource for DirectoryDataSource {
    async fn reset(&mut self) -> Result<(), DataSourceError> {
        self.load_files().await
    }

    async fn next(&mut self) -> Result<Line, DataSourceError> {
        loop {
            if self.current.is_none() && !self.open_next_file().await? {
                return Ok(Line::Done);
            }

            let lines = self.current.as_mut().unwrap();
            let path = self.files[self.file_index].clone();
            match lines
                .next_line()
                .await
                .map_err(|source| DataSourceError::Read { path, source })?
            {
                Some(raw) => {
                    if let Some(normalized) = crate::normalize_line(&raw) {
                        return Ok(Line::Data(normalized));
                    }
                }
                None => {
                    self.current = None;
                    self.file_index += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_all_txt_files_sorted_skipping_comments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::File::create(dir.path().join("a.txt"))
            .unwrap()
            .write_all(b"# c\n1.1.1.1\n")
            .unwrap();
        std::fs::File::create(dir.path().join("b.txt"))
            .unwrap()
            .write_all(b"2.2.2.0/24\n")
            .unwrap();
        std::fs::File::create(dir.path().join("ignored.csv"))
            .unwrap()
            .write_all(b"3.3.3.3\n")
            .unwrap();

        let mut source = DirectoryDataSource::new(dir.path()).await.unwrap();
        assert_eq!(source.next().await.unwrap(), Line::Data("1.1.1.1".into()));
        assert_eq!(
            source.next().await.unwrap(),
            Line::Data("2.2.2.0/24".into())
        );
        assert_eq!(source.next().await.unwrap(), Line::Done);
    }

    #[tokio::test]
    async fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DirectoryDataSource::new(dir.path()).await.is_err());
    }
}
