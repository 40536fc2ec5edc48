//! Best-effort launching of the system's default web browser.
//!
//! One-shot OS command dispatch: no retry, no state. Any failure surfaces
//! as a single fatal [`BrowserError`] carrying the offending URL.

use std::io;
use std::process::Command;

use log::{debug, warn};
use thiserror::Error;

/// Browsers probed on Unix-like systems, in preference order.
const UNIX_BROWSERS: &[&str] = &["firefox", "opera", "konqueror", "epiphany", "mozilla", "netscape"];

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("could not find a web browser to open {url}")]
    NoBrowser { url: String },
    #[error("unable to open external browser for {url}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// OS family for browser dispatch, one strategy per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    /// Platform of the running build.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Classify an OS name string. Accepts both Rust's short constants
    /// ("macos", "windows") and descriptive names ("Mac OS X",
    /// "Windows 11"); anything else is treated as Unix.
    pub fn from_os_name(name: &str) -> Self {
        if name == "macos" || name.starts_with("Mac OS") {
            Platform::MacOs
        } else if name == "windows" || name.starts_with("Windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Open `url` in the system's default browser.
pub fn open_url(url: &str) -> Result<(), BrowserError> {
    open_url_on(Platform::detect(), url)
}

/// Open `url` using the launch strategy for the given platform.
pub fn open_url_on(platform: Platform, url: &str) -> Result<(), BrowserError> {
    match platform {
        Platform::MacOs => spawn("open", &[url], url),
        Platform::Windows => spawn("rundll32", &["url.dll,FileProtocolHandler", url], url),
        Platform::Unix => {
            let browser = UNIX_BROWSERS.iter().find(|name| command_exists(name));
            match browser {
                Some(browser) => {
                    debug!("launching {} for {}", browser, url);
                    spawn(browser, &[url], url)
                }
                None => {
                    warn!("no known browser found on this system");
                    Err(BrowserError::NoBrowser { url: url.to_string() })
                }
            }
        }
    }
}

fn spawn(program: &str, args: &[&str], url: &str) -> Result<(), BrowserError> {
    Command::new(program)
        .args(args)
        .spawn()
        .map(|_| ())
        .map_err(|source| BrowserError::Launch { url: url.to_string(), source })
}

fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
