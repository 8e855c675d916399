//! `identify` command: classify files by their leading bytes

use crate::filetype::{classify, ByteSample};
use crate::models::FileIdentification;
use crate::output;
use crate::utils::progress::create_file_progress;
use crate::utils::{FinderError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read the sample window from the start of a file
pub fn read_sample(path: &Path) -> Result<ByteSample> {
    let file_read = |source| FinderError::FileRead {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(file_read)?;
    ByteSample::from_reader(file).map_err(file_read)
}

/// Classify every file without printing.
///
/// Unreadable files are reported as failed rows instead of ending the run.
pub fn collect_identifications(files: &[PathBuf]) -> Vec<FileIdentification> {
    let progress = create_file_progress(files.len() as u64, "Identifying files");
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match read_sample(path) {
            Ok(sample) => {
                let classification = classify(&sample);
                debug!(
                    path = %path.display(),
                    bytes = sample.len(),
                    format = ?classification.format,
                    "classified"
                );
                results.push(FileIdentification::new(path, classification));
            }
            Err(e) => {
                let message = format!("{:#}", anyhow::Error::from(e));
                warn!(path = %path.display(), error = %message, "failed to read sample");
                results.push(FileIdentification::failed(path, message));
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    results
}

pub fn run_identify(files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let results = collect_identifications(files);

    if json {
        output::print_json(&results)?;
    } else {
        output::print_identifications(&results);
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} files could not be read", failed, files.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filetype::FileFormat;

    #[test]
    fn test_read_sample_missing_file() {
        let err = read_sample(Path::new("/nonexistent/cert-finder/sample.bin")).unwrap_err();
        assert!(matches!(err, FinderError::FileRead { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to read /nonexistent/cert-finder/sample.bin"
        );

        // The io cause is reported once, through the error chain
        let chained = format!("{:#}", anyhow::Error::from(err));
        let cause = "Failed to read /nonexistent/cert-finder/sample.bin: ";
        assert!(chained.starts_with(cause), "{}", chained);
        assert!(!chained[cause.len()..].contains(": "), "{}", chained);
    }

    #[test]
    fn test_collect_identifications_keeps_going_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let jceks = dir.path().join("keys.bin");
        std::fs::write(&jceks, [0xCE, 0xCE, 0xCE, 0xCE, 0x00, 0x00, 0x00, 0x02]).unwrap();
        let missing = dir.path().join("missing.bin");
        let elf = dir.path().join("tool");
        std::fs::write(&elf, [0x7F, 0x45, 0x4C, 0x46, 0x02]).unwrap();

        let results = collect_identifications(&[jceks, missing, elf]);
        assert_eq!(results.len(), 3);

        let first = results[0].classification.as_ref().unwrap();
        assert_eq!(first.format, FileFormat::JceKeyStore);
        assert!(results[0].error.is_none());

        assert!(results[1].classification.is_none());
        assert!(results[1].error.as_deref().unwrap().contains("missing.bin"));

        let last = results[2].classification.as_ref().unwrap();
        assert_eq!(last.format, FileFormat::LinuxExecutable);
    }
}
