use crate::core::ScraperResult;
use crate::extract::StateCount;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the collected records as a two-column CSV table with a header
/// row (`state,num_of_restaurants`) and no index column.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn export(&self, records: &[StateCount]) -> ScraperResult<PathBuf> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Header is written explicitly so an empty record set still
        // produces a well-formed table.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(["state", "num_of_restaurants"])?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!("Exported {} rows to {}", records.len(), self.path.display());
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<StateCount> {
        vec![
            StateCount {
                state: "Alabama".to_string(),
                num_of_restaurants: 257,
            },
            StateCount {
                state: "Alaska".to_string(),
                num_of_restaurants: 71,
            },
        ]
    }

    #[test]
    fn test_writes_header_and_rows_without_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("per_state.csv");

        CsvExporter::new(&path).export(&sample_records()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "state,num_of_restaurants\nAlabama,257\nAlaska,71\n"
        );
    }

    #[test]
    fn test_export_is_byte_identical_across_runs() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        let records = sample_records();

        CsvExporter::new(&first).export(&records).unwrap();
        CsvExporter::new(&second).export(&records).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/output/per_state.csv");

        CsvExporter::new(&path).export(&sample_records()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_empty_record_set_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        CsvExporter::new(&path).export(&[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "state,num_of_restaurants\n");
    }
}
