//! Opening the GeoIP database.

use std::path::Path;

use maxminddb::Reader;

use super::types::GeoIpMetadata;
use crate::error_handling::GeoIpError;

/// An open MaxMind City database.
///
/// Owned by the run that opened it; the database bytes are released when
/// the reader is dropped.
pub struct GeoIpReader {
    pub(super) reader: Reader<Vec<u8>>,
    metadata: GeoIpMetadata,
}

impl GeoIpReader {
    /// Reads the `.mmdb` file at `path` into memory and validates it.
    pub async fn open(path: &Path) -> Result<Self, GeoIpError> {
        log::info!("Loading GeoIP database from: {}", path.display());

        let db_bytes = tokio::fs::read(path)
            .await
            .map_err(|source| GeoIpError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let reader = Reader::from_source(db_bytes).map_err(|source| GeoIpError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = GeoIpMetadata {
            source: path.to_path_buf(),
            database_type: reader.metadata.database_type.clone(),
            build_epoch: reader.metadata.build_epoch,
        };

        Ok(Self { reader, metadata })
    }

    pub fn metadata(&self) -> &GeoIpMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_open_missing_file() {
        let result = GeoIpReader::open(Path::new("nonexistent/GeoLite2-City.mmdb")).await;
        match result {
            Err(GeoIpError::Read { path, .. }) => {
                assert_eq!(path, Path::new("nonexistent/GeoLite2-City.mmdb"))
            }
            Err(other) => panic!("expected read error, got {other}"),
            Ok(_) => panic!("expected read error, got a reader"),
        }
    }

    #[tokio::test]
    async fn test_open_invalid_database() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a maxmind database").unwrap();
        file.flush().unwrap();

        let result = GeoIpReader::open(file.path()).await;
        assert!(matches!(result, Err(GeoIpError::Parse { .. })));
    }
}
