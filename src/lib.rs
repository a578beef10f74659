#![forbid(unsafe_code)]

//! Rust client for IBGE's quarterly PNAD Contínua microdata.
//!
//! This crate is a Rust re-implementation of the quarterly download routine
//! from the `pnadcpy` Python package: given a year and quarter it resolves
//! the release directory on IBGE's public FTP server, selects the single
//! microdata archive matching the quarter pattern, downloads it together
//! with the fixed deflators and dictionary/input archives, and optionally
//! extracts all three into a local directory.
//!
//! **Quick start**
//! ```no_run
//! use ibge_pnadc::{Client, FetchRequest};
//!
//! let client = Client::default();
//! let request = FetchRequest::new(2014, 3, "/tmp/pnadc").unzip(true);
//! let result = client.fetch_quarter(&request)?;
//! println!("{} bytes -> {}", result.bytes_written, result.microdata.display());
//! # Ok::<(), ibge_pnadc::Error>(())
//! ```
//!
//! Notes:
//! - Quarterly releases start at 2012; requesting a future year fails before
//!   any network activity.
//! - The connection is anonymous and blocking; the FTP endpoint's defaults
//!   govern timeouts.
//! - Progress is reported through `tracing` events; install a subscriber to
//!   see them.

mod client;
mod error;
mod extract;
mod layout;
mod request;
mod transport;

pub use crate::client::{Client, ClientOptions, FetchResult};
pub use crate::error::{Error, Result};
pub use crate::extract::extract_archive;
pub use crate::layout::{quarter_pattern, ServerLayout};
pub use crate::request::{FetchRequest, FIRST_YEAR};
pub use crate::transport::{FtpTransport, Transport};
