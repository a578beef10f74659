use std::io::{self, Write};

use suppaftp::FtpStream;
use tracing::debug;

use crate::error::Result;

/// File-transfer operations the fetcher needs from a remote endpoint.
///
/// [`FtpTransport`] is the real implementation; tests drive the client with a
/// recording mock instead of a network connection.
pub trait Transport {
    /// Change the remote working directory.
    fn cwd(&mut self, path: &str) -> Result<()>;

    /// Names of the entries in the current remote directory.
    fn list_names(&mut self) -> Result<Vec<String>>;

    /// Stream the named remote file into `dest`, returning the bytes written.
    fn retrieve(&mut self, remote_name: &str, dest: &mut dyn Write) -> Result<u64>;

    /// Release the connection. Called on every exit path, including failures.
    fn quit(&mut self) -> Result<()>;
}

/// Blocking anonymous FTP transport.
pub struct FtpTransport {
    stream: FtpStream,
}

impl FtpTransport {
    /// Connect to `host` (a `:port` suffix is optional, 21 is assumed) and
    /// log in anonymously.
    pub fn connect_anonymous(host: &str) -> Result<Self> {
        let addr = if host.contains(':') {
            host.to_string()
        } else {
            format!("{host}:21")
        };
        debug!(host = %addr, "connecting");
        let mut stream = FtpStream::connect(&addr)?;
        stream.login("anonymous", "anonymous")?;
        Ok(Self { stream })
    }
}

impl Transport for FtpTransport {
    fn cwd(&mut self, path: &str) -> Result<()> {
        debug!(path, "cwd");
        self.stream.cwd(path)?;
        Ok(())
    }

    fn list_names(&mut self) -> Result<Vec<String>> {
        Ok(self.stream.nlst(None)?)
    }

    fn retrieve(&mut self, remote_name: &str, dest: &mut dyn Write) -> Result<u64> {
        let mut reader = self.stream.retr_as_stream(remote_name)?;
        let written = io::copy(&mut reader, dest)?;
        self.stream.finalize_retr_stream(reader)?;
        Ok(written)
    }

    fn quit(&mut self) -> Result<()> {
        self.stream.quit()?;
        Ok(())
    }
}
