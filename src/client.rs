use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::extract::extract_archive;
use crate::layout::{quarter_pattern, ServerLayout};
use crate::request::FetchRequest;
use crate::transport::{FtpTransport, Transport};

#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub layout: ServerLayout,
}

/// Local paths produced by a fetch, in download order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub microdata: PathBuf,
    pub deflators: PathBuf,
    pub dictionary: PathBuf,
    pub bytes_written: u64,
    pub extracted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Client {
    layout: ServerLayout,
}

impl Client {
    pub fn new(opts: ClientOptions) -> Self {
        Self {
            layout: opts.layout,
        }
    }

    /// Download the microdata archive for `year`/`quarter` plus the deflators
    /// and dictionary archives into the request's directory, optionally
    /// extracting all three.
    ///
    /// Validation runs before the connection is opened; the connection is
    /// released on every exit path afterwards.
    pub fn fetch_quarter(&self, request: &FetchRequest) -> Result<FetchResult> {
        request.validate(Utc::now().year())?;
        let transport = FtpTransport::connect_anonymous(&self.layout.host)?;
        self.fetch_quarter_with(request, transport)
    }

    /// Same sequence as [`Client::fetch_quarter`] over a caller-supplied
    /// transport. Useful against a mock endpoint.
    pub fn fetch_quarter_with<T: Transport>(
        &self,
        request: &FetchRequest,
        mut transport: T,
    ) -> Result<FetchResult> {
        request.validate(Utc::now().year())?;

        // Quit the connection whether or not the download sequence succeeded;
        // the sequence error takes precedence over a quit error.
        let outcome = self.download_sequence(request, &mut transport);
        let quit = transport.quit();
        let mut result = outcome?;
        quit?;

        if request.unzip {
            extract_archive(&result.microdata, &request.directory)?;
            extract_archive(&result.deflators, &request.directory)?;
            extract_archive(&result.dictionary, &request.directory)?;
            result.extracted = true;
        }

        Ok(result)
    }

    fn download_sequence<T: Transport>(
        &self,
        request: &FetchRequest,
        transport: &mut T,
    ) -> Result<FetchResult> {
        transport.cwd(&self.layout.microdata_dir(request.year))?;

        let listing = transport.list_names()?;
        if listing.is_empty() {
            return Err(Error::NoDataAvailable { year: request.year });
        }

        let pattern = quarter_pattern(request.year, request.quarter);
        let matches: Vec<&String> = listing.iter().filter(|f| f.contains(&pattern)).collect();
        let remote_name = match matches.as_slice() {
            [] => return Err(Error::NotFound { pattern }),
            [one] => (*one).clone(),
            many => {
                return Err(Error::AmbiguousMatch {
                    pattern,
                    matches: many.iter().map(|s| (*s).clone()).collect(),
                });
            }
        };

        let (microdata, n_micro) =
            self.download_into(transport, &remote_name, &request.directory)?;

        transport.cwd(&self.layout.documentation_dir)?;
        let (deflators, n_defl) =
            self.download_into(transport, &self.layout.deflators_archive, &request.directory)?;
        let (dictionary, n_dict) =
            self.download_into(transport, &self.layout.dictionary_archive, &request.directory)?;

        Ok(FetchResult {
            microdata,
            deflators,
            dictionary,
            bytes_written: n_micro + n_defl + n_dict,
            extracted: false,
        })
    }

    fn download_into<T: Transport>(
        &self,
        transport: &mut T,
        remote_name: &str,
        directory: &Path,
    ) -> Result<(PathBuf, u64)> {
        let target = directory.join(remote_name);
        info!(file = remote_name, "downloading");
        let mut file = File::create(&target)?;
        let written = transport.retrieve(remote_name, &mut file)?;
        info!(file = remote_name, bytes = written, "download complete");
        Ok((target, written))
    }
}
