use std::path::PathBuf;

use crate::error::{Error, Result};

/// Earliest year with quarterly PNAD Contínua microdata on the server.
pub const FIRST_YEAR: i32 = 2012;

/// A request for one quarter of microdata.
///
/// `year` must lie in `[2012, current_year]`, `quarter` in `[1, 4]`, and
/// `directory` must be an existing local directory. Validation runs before
/// any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub year: i32,
    pub quarter: u8,
    pub directory: PathBuf,
    pub unzip: bool,
}

impl FetchRequest {
    pub fn new(year: i32, quarter: u8, directory: impl Into<PathBuf>) -> Self {
        Self {
            year,
            quarter,
            directory: directory.into(),
            unzip: false,
        }
    }

    /// Request extraction of the three archives after download.
    pub fn unzip(mut self, unzip: bool) -> Self {
        self.unzip = unzip;
        self
    }

    /// Check every parameter, first failure wins. `current_year` is the upper
    /// bound for `year`; the client passes the current calendar year.
    pub(crate) fn validate(&self, current_year: i32) -> Result<()> {
        if self.year < FIRST_YEAR || self.year > current_year {
            return Err(Error::InvalidArgument(format!(
                "'year' must be between {FIRST_YEAR} and {current_year}, got {}",
                self.year
            )));
        }
        if !(1..=4).contains(&self.quarter) {
            return Err(Error::InvalidArgument(format!(
                "'quarter' must be between 1 and 4, got {}",
                self.quarter
            )));
        }
        if !self.directory.exists() {
            return Err(Error::InvalidArgument(format!(
                "directory {} does not exist",
                self.directory.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn accepts_in_range_request() {
        let dir = existing_dir();
        let req = FetchRequest::new(2014, 3, dir.path());
        assert!(req.validate(2025).is_ok());
    }

    #[test]
    fn rejects_year_before_first_release() {
        let dir = existing_dir();
        let req = FetchRequest::new(2011, 1, dir.path());
        let err = req.validate(2025).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("'year'")));
    }

    #[test]
    fn rejects_year_in_the_future() {
        let dir = existing_dir();
        let req = FetchRequest::new(2026, 1, dir.path());
        assert!(matches!(
            req.validate(2025),
            Err(Error::InvalidArgument(ref m)) if m.contains("2025")
        ));
    }

    #[test]
    fn rejects_quarter_out_of_range() {
        let dir = existing_dir();
        for quarter in [0u8, 5] {
            let req = FetchRequest::new(2014, quarter, dir.path());
            let err = req.validate(2025).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("'quarter'")));
        }
    }

    #[test]
    fn rejects_missing_directory() {
        let req = FetchRequest::new(2014, 3, "/definitely/not/here");
        let err = req.validate(2025).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("does not exist")));
    }

    #[test]
    fn unzip_defaults_to_false() {
        let req = FetchRequest::new(2014, 3, "/tmp");
        assert!(!req.unzip);
        assert!(req.unzip(true).unzip);
    }
}
