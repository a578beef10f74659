use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no microdata available for year {year} yet")]
    NoDataAvailable { year: i32 },

    #[error("more than one remote file matches {pattern}: {matches:?}")]
    AmbiguousMatch {
        pattern: String,
        matches: Vec<String>,
    },

    #[error("no remote file matches {pattern}")]
    NotFound { pattern: String },

    #[error("ftp error: {0}")]
    Ftp(#[from] suppaftp::FtpError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
