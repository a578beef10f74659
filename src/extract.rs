use std::fs::File;
use std::path::Path;

use tracing::info;
use zip::ZipArchive;

use crate::error::Result;

/// Extract every entry of the zip archive at `archive` into `dest`,
/// overwriting existing files.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    info!(archive = %archive.display(), "extracting");
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(file)?;
    zip.extract(dest)?;
    info!(archive = %archive.display(), "extraction complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::{FileOptions, ZipWriter};

    use super::*;

    #[test]
    fn extracts_all_entries_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("data.zip");

        let mut zip = ZipWriter::new(File::create(&archive_path).unwrap());
        zip.start_file::<_, ()>("inner.txt", FileOptions::default())
            .unwrap();
        zip.write_all(b"first").unwrap();
        zip.finish().unwrap();

        extract_archive(&archive_path, dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("inner.txt")).unwrap(),
            "first"
        );

        // A second pass replaces the previous contents silently.
        let mut zip = ZipWriter::new(File::create(&archive_path).unwrap());
        zip.start_file::<_, ()>("inner.txt", FileOptions::default())
            .unwrap();
        zip.write_all(b"second").unwrap();
        zip.finish().unwrap();

        extract_archive(&archive_path, dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("inner.txt")).unwrap(),
            "second"
        );
    }

    #[test]
    fn rejects_non_zip_input() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.zip");
        std::fs::write(&bogus, b"not a zip").unwrap();
        assert!(extract_archive(&bogus, dir.path()).is_err());
    }
}
