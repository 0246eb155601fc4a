use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Artifact persistence
// ---------------------------------------------------------------------------

/// Writes pipeline artifacts to disk: JSON catalog snapshots under the
/// data directory, CSV tables and the map document under the output
/// directory. Directories are created on demand.
pub struct Exporter {
    data_dir: PathBuf,
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    /// Save a serializable value as pretty-printed JSON in the data dir.
    pub fn save_json<T: Serialize>(&self, value: &T, filename: &str) -> Result<PathBuf> {
        let path = self.prepare(&self.data_dir, filename)?;
        let text = serde_json::to_string_pretty(value)
            .with_context(|| format!("serializing {filename}"))?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        info!("saved {}", path.display());
        Ok(path)
    }

    /// Save a table as CSV in the output dir.
    pub fn save_table_csv(&self, table: &Table, filename: &str) -> Result<PathBuf> {
        let path = self.prepare(&self.output_dir, filename)?;
        let text = table
            .to_csv_string()
            .with_context(|| format!("serializing {filename}"))?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        info!("saved {}", path.display());
        Ok(path)
    }

    /// Save an HTML document in the output dir.
    pub fn save_html(&self, html: &str, filename: &str) -> Result<PathBuf> {
        let path = self.prepare(&self.output_dir, filename)?;
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        info!("saved {}", path.display());
        Ok(path)
    }

    fn prepare(&self, dir: &Path, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        Ok(dir.join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn exporter_in(dir: &Path) -> Exporter {
        let config = Config {
            data_dir: dir.join("data"),
            output_dir: dir.join("output"),
            ..Default::default()
        };
        Exporter::new(&config)
    }

    #[test]
    fn json_artifacts_land_in_the_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let exporter = exporter_in(tmp.path());

        let ids = vec!["incidenti-roma-2020".to_string()];
        let path = exporter.save_json(&ids, "DatiGovIt.json").unwrap();
        assert!(path.starts_with(tmp.path().join("data")));

        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("incidenti-roma-2020"));
    }

    #[test]
    fn csv_and_html_artifacts_land_in_the_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let exporter = exporter_in(tmp.path());

        let table = parse_csv("a,b\n1,2\n").unwrap();
        let csv_path = exporter.save_table_csv(&table, "output.csv").unwrap();
        assert_eq!(fs::read_to_string(csv_path).unwrap(), "a,b\n1,2\n");

        let html_path = exporter.save_html("<html></html>", "mappa.html").unwrap();
        assert!(html_path.starts_with(tmp.path().join("output")));
    }
}
