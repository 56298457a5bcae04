use crate::interrupt::Interrupt;
use crate::{Error, Result};

use std::io::ErrorKind;
use std::process::Command;

pub const DEFAULT_PROGRAM: &str = "wget";

pub trait Downloader {
    /// Blocks until `link` has been saved to `file_name`.
    fn download(&self, link: &str, file_name: &str, interrupt: &Interrupt) -> Result<()>;
}

/// Runs a wget-compatible program: `<program> -nv --show-progress -O <file> <link>`.
pub struct Wget {
    program: String,
}

impl Wget {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, link: &str, file_name: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-nv", "--show-progress", "-O"])
            .arg(file_name)
            .arg(link);
        cmd
    }
}

impl Default for Wget {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Downloader for Wget {
    fn download(&self, link: &str, file_name: &str, interrupt: &Interrupt) -> Result<()> {
        log::info!("Downloading {link} to {file_name}");

        let status = match self.command(link, file_name).status() {
            Ok(status) => status,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("Could not find {}, please install it: {err}", self.program);
                return Err(Error::ToolNotFound(self.program.clone()));
            }
            Err(source) => {
                return Err(Error::Spawn {
                    program: self.program.clone(),
                    source,
                })
            }
        };

        if interrupt.is_set() {
            return Err(Error::Interrupted("Download"));
        }

        log::debug!("{} terminated with {status}", self.program);
        if !status.success() {
            return Err(Error::ToolFailed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsStr;

    #[test]
    fn wget_arguments() {
        let wget = Wget::default();
        let cmd = wget.command("https://cdn.example.com/show123.mp3", "show-title.mp3");

        assert_eq!(cmd.get_program(), "wget");
        assert_eq!(
            cmd.get_args().collect::<Vec<_>>(),
            [
                "-nv",
                "--show-progress",
                "-O",
                "show-title.mp3",
                "https://cdn.example.com/show123.mp3"
            ]
            .map(OsStr::new)
        );
    }

    #[test]
    fn missing_program() {
        let wget = Wget::new("francekultur-no-such-downloader");
        let err = wget
            .download("https://cdn.example.com/a.mp3", "a.mp3", &Interrupt::default())
            .unwrap_err();

        assert!(matches!(err, Error::ToolNotFound(program) if program == "francekultur-no-such-downloader"));
    }

    #[cfg(unix)]
    #[test]
    fn successful_run() {
        let wget = Wget::new("true");
        wget.download("https://cdn.example.com/a.mp3", "a.mp3", &Interrupt::default())
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failing_run() {
        let wget = Wget::new("false");
        let err = wget
            .download("https://cdn.example.com/a.mp3", "a.mp3", &Interrupt::default())
            .unwrap_err();

        assert!(matches!(err, Error::ToolFailed { status, .. } if !status.success()));
    }

    #[cfg(unix)]
    #[test]
    fn interrupted_run() {
        let interrupt = Interrupt::default();
        interrupt.trigger();

        let err = Wget::new("true")
            .download("https://cdn.example.com/a.mp3", "a.mp3", &interrupt)
            .unwrap_err();

        assert!(matches!(err, Error::Interrupted(_)));
    }
}
