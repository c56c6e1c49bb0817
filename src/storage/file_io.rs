//! File I/O utilities with atomic writes
//!
//! Provides the CSV reader configuration shared by every tabular input and
//! staged (temp file + rename) writers for every output, so a failed run never
//! leaves a partial report behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

use crate::error::ReportError;

/// CSV reader with headers and trimmed fields
pub fn csv_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader)
}

/// Open an input file, mapping failures with the given constructor
pub fn open_input<F>(path: &Path, to_error: F) -> Result<File, ReportError>
where
    F: FnOnce(String) -> ReportError,
{
    if !path.exists() {
        return Err(to_error(format!("File not found: {}", path.display())));
    }

    File::open(path).map_err(|e| to_error(format!("Failed to open {}: {}", path.display(), e)))
}

/// Output written to a temporary sibling file, moved into place on `commit`
///
/// Dropping a staged file without committing removes the temporary file, so
/// a run that fails part-way leaves its targets untouched.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    temp_path: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Write `path`'s future contents to a temporary file in the same directory
    ///
    /// The directory must already exist.
    pub fn create<P, F>(path: P, write: F) -> Result<Self, ReportError>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufWriter<File>) -> Result<(), ReportError>,
    {
        let path = path.as_ref().to_path_buf();
        let temp_path = temp_path_for(&path);

        let file = File::create(&temp_path).map_err(|e| {
            ReportError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let staged = Self {
            path,
            temp_path,
            committed: false,
        };

        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer
            .flush()
            .and_then(|_| writer.get_ref().sync_all())
            .map_err(|e| {
                ReportError::Export(format!("Failed to write {}: {}", staged.path.display(), e))
            })?;

        Ok(staged)
    }

    /// Final location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the temporary file into place
    pub fn commit(mut self) -> Result<PathBuf, ReportError> {
        fs::rename(&self.temp_path, &self.path).map_err(|e| {
            ReportError::Export(format!(
                "Failed to move {} into place: {}",
                self.path.display(),
                e
            ))
        })?;
        self.committed = true;
        Ok(self.path.clone())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

/// `report.txt` stages as `report.txt.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Create the parent directory of `path` if needed
pub fn ensure_parent_dir(path: &Path) -> Result<(), ReportError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                ReportError::Export(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

/// Stage lines for `path`, one '\n'-terminated line each
pub fn stage_lines<P, I, L>(path: P, lines: I) -> Result<StagedFile, ReportError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = L>,
    L: std::fmt::Display,
{
    StagedFile::create(path, |writer| {
        lines
            .into_iter()
            .try_for_each(|line| writeln!(writer, "{}", line))
            .map_err(|e| ReportError::Export(format!("Failed to write line: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        stage_lines(&path, ["1FIRST", " SECOND"]).unwrap().commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1FIRST\n SECOND\n");
        assert!(!temp_dir.path().join("report.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("report.txt");

        ensure_parent_dir(&path).unwrap();
        stage_lines(&path, Vec::<String>::new()).unwrap().commit().unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_uncommitted_stage_leaves_target_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");
        fs::write(&path, "OLD\n").unwrap();

        let staged = stage_lines(&path, ["NEW"]).unwrap();
        assert!(temp_dir.path().join("report.txt.tmp").exists());
        drop(staged);

        assert_eq!(fs::read_to_string(&path).unwrap(), "OLD\n");
        assert!(!temp_dir.path().join("report.txt.tmp").exists());
    }

    #[test]
    fn test_stage_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("rows.csv");

        let err = StagedFile::create(&path, |_| Ok(())).unwrap_err();
        assert!(matches!(err, ReportError::Export(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        let err = StagedFile::create(&path, |_| Err(ReportError::Export("boom".into())))
            .unwrap_err();
        assert_eq!(err.to_string(), "Export error: boom");
        assert!(!temp_dir.path().join("rows.csv.tmp").exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_input_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = open_input(&temp_dir.path().join("none.csv"), ReportError::ReferenceData)
            .unwrap_err();
        assert!(err.is_reference_data());
    }

    #[test]
    fn test_csv_reader_trims() {
        let data = "a , b\n 1 ,  x \n";
        let mut reader = csv_reader(data.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(0), Some("1"));
        assert_eq!(record.get(1), Some("x"));
    }
}
