//! MaxMind GeoLite2 country and ASN lookups, with a background
//! `update()` that downloads, verifies, and atomically swaps in fresh
//! databases. Without a license key the adapter is unlicensed: lookups
//! degrade to `"-"` rather than failing, so the caller's scoring logic
//! never has to special-case "no GeoIP configured".

use arc_swap::ArcSwapOption;
use md5::{Digest, Md5};
use std::io::Read;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const UNKNOWN: &str = "-";

#[derive(Debug, Error)]
pub enum GeoIpError {
    #[error("downloading {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("checksum mismatch for {url}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        url: String,
        expected: String,
        actual: String,
    },
    #[error("extracting archive from {url} failed: {source}")]
    Extract {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{file} was not present in the downloaded archive")]
    MissingFile { file: String },
    #[error("opening database {0} failed: {1}")]
    Open(PathBuf, maxminddb::MaxMindDBError),
    #[error("country lookup failed for {0}: {1}")]
    CountryLookup(IpAddr, maxminddb::MaxMindDBError),
}

struct DatabaseSpec {
    edition_id: &'static str,
    file_name: &'static str,
}

const ASN_DB: DatabaseSpec = DatabaseSpec {
    edition_id: "GeoLite2-ASN",
    file_name: "GeoLite2-ASN.mmdb",
};
const COUNTRY_DB: DatabaseSpec = DatabaseSpec {
    edition_id: "GeoLite2-Country",
    file_name: "GeoLite2-Country.mmdb",
};

pub struct GeoIp {
    license_key: Option<String>,
    client: reqwest::Client,
    database_dir: PathBuf,
    country: ArcSwapOption<maxminddb::Reader<Vec<u8>>>,
    asn: ArcSwapOption<maxminddb::Reader<Vec<u8>>>,
}

impl GeoIp {
    pub fn new(license_key: Option<String>, database_dir: impl Into<PathBuf>) -> Self {
        if license_key.is_none() {
            tracing::info!("geoip license key not configured, reputation accuracy is degraded");
        }
        Self {
            license_key,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .connect_timeout(Duration::from_secs(60))
                .build()
                .expect("reqwest client configuration is valid"),
            database_dir: database_dir.into(),
            country: ArcSwapOption::empty(),
            asn: ArcSwapOption::empty(),
        }
    }

    pub fn is_licensed(&self) -> bool {
        self.license_key.is_some()
    }

    /// ISO-3166 alpha-2 country code, or `"-"` if unlicensed, not yet
    /// loaded, or the address has no country entry.
    pub fn country(&self, ip: IpAddr) -> Result<String, GeoIpError> {
        let Some(reader) = self.country.load_full() else {
            return Ok(UNKNOWN.to_string());
        };
        let record: Option<maxminddb::geoip2::Country> = reader
            .lookup(ip)
            .map_err(|err| GeoIpError::CountryLookup(ip, err))?;
        Ok(record
            .and_then(|c| c.country)
            .and_then(|c| c.iso_code)
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN.to_string()))
    }

    /// Autonomous-system organization string, or `"-"` under the same
    /// degraded conditions as [`GeoIp::country`].
    pub fn organization(&self, ip: IpAddr) -> String {
        let Some(reader) = self.asn.load_full() else {
            return UNKNOWN.to_string();
        };
        let record: Option<maxminddb::geoip2::Asn> = reader.lookup(ip).ok().flatten();
        record
            .and_then(|asn| asn.autonomous_system_organization)
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Downloads and verifies both databases, then swaps in the new
    /// readers one at a time. If unlicensed, this is a no-op: lookups
    /// keep returning `"-"`.
    pub async fn update(&self) -> Result<(), GeoIpError> {
        let Some(license_key) = self.license_key.clone() else {
            return Ok(());
        };
        tokio::fs::create_dir_all(&self.database_dir)
            .await
            .map_err(|source| GeoIpError::Extract {
                url: self.database_dir.display().to_string(),
                source,
            })?;

        let country_path = self
            .download_and_extract(&COUNTRY_DB, &license_key)
            .await?;
        let country_reader = open_database(&country_path)?;
        self.country.store(Some(Arc::new(country_reader)));

        let asn_path = self.download_and_extract(&ASN_DB, &license_key).await?;
        let asn_reader = open_database(&asn_path)?;
        self.asn.store(Some(Arc::new(asn_reader)));

        Ok(())
    }

    async fn download_and_extract(
        &self,
        spec: &DatabaseSpec,
        license_key: &str,
    ) -> Result<PathBuf, GeoIpError> {
        let archive_url = format!(
            "https://download.maxmind.com/app/geoip_download?edition_id={}&suffix=tar.gz&license_key={license_key}",
            spec.edition_id
        );
        let md5_url = format!(
            "https://download.maxmind.com/app/geoip_download?edition_id={}&suffix=tar.gz.md5&license_key={license_key}",
            spec.edition_id
        );

        let archive_bytes = self
            .client
            .get(&archive_url)
            .send()
            .await
            .map_err(|source| GeoIpError::Download {
                url: archive_url.clone(),
                source,
            })?
            .bytes()
            .await
            .map_err(|source| GeoIpError::Download {
                url: archive_url.clone(),
                source,
            })?;

        let expected_md5 = self
            .client
            .get(&md5_url)
            .send()
            .await
            .map_err(|source| GeoIpError::Download {
                url: md5_url.clone(),
                source,
            })?
            .text()
            .await
            .map_err(|source| GeoIpError::Download {
                url: md5_url.clone(),
                source,
            })?;

        let mut hasher = Md5::new();
        hasher.update(&archive_bytes);
        let actual_md5 = data_encoding::HEXLOWER.encode(&hasher.finalize());
        if actual_md5 != expected_md5.trim() {
            return Err(GeoIpError::ChecksumMismatch {
                url: archive_url,
                expected: expected_md5.trim().to_string(),
                actual: actual_md5,
            });
        }

        extract_tar_gz(&archive_bytes, &self.database_dir, spec.file_name)
            .map_err(|source| GeoIpError::Extract {
                url: archive_url.clone(),
                source,
            })?
            .ok_or_else(|| GeoIpError::MissingFile {
                file: spec.file_name.to_string(),
            })
    }
}

fn open_database(path: &Path) -> Result<maxminddb::Reader<Vec<u8>>, GeoIpError> {
    maxminddb::Reader::open_readfile(path).map_err(|err| GeoIpError::Open(path.to_path_buf(), err))
}

/// Extracts every regular file from a gzip-compressed tar archive into
/// `dest_dir`, flattening directory structure the way the upstream
/// archives are laid out. Returns the path to `wanted_file` if it was
/// among the extracted entries.
fn extract_tar_gz(
    archive_bytes: &[u8],
    dest_dir: &Path,
    wanted_file: &str,
) -> std::io::Result<Option<PathBuf>> {
    let gz = flate2::read::GzDecoder::new(archive_bytes);
    let mut archive = tar::Archive::new(gz);
    let mut found = None;
    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry
            .path()?
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let target = dest_dir.join(&name);
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf)?;
        std::fs::write(&target, &buf)?;
        if name == wanted_file {
            found = Some(target);
        }
    }
    Ok(found)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unlicensed_lookups_degrade_to_dash() {
        let geoip = GeoIp::new(None, std::env::temp_dir().join("geoip-test"));
        assert!(!geoip.is_licensed());
        assert_eq!(
            geoip.country("8.8.8.8".parse().unwrap()).unwrap(),
            UNKNOWN
        );
        assert_eq!(geoip.organization("8.8.8.8".parse().unwrap()), UNKNOWN);
    }

    #[tokio::test]
    async fn unlicensed_update_is_a_noop() {
        let geoip = GeoIp::new(None, std::env::temp_dir().join("geoip-test-update"));
        geoip.update().await.unwrap();
    }
}
