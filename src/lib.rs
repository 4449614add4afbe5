//! EarlyWrapped CLI Library
//!
//! This library authenticates against the Spotify Web API with the OAuth 2.0
//! PKCE flow and renders a handful of personal listening statistics: top
//! tracks, top artists, top genre, listening minutes and the number of
//! distinct artists in the recent play history.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loaded from the environment and `.env` files
//! - `error` - Error types shared across the crate
//! - `management` - Key-value storage and the authentication session
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `stats` - The four statistics operations
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers and statistics computations
//! - `view` - Output regions, terminal rendering and export
//!
//! # Example
//!
//! ```no_run
//! use earlywrapped::{config, management::{AuthSession, FileStore}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let session = AuthSession::new(config, FileStore::default_location());
//!     println!("{:?}", session.state().await);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod stats;
pub mod types;
pub mod utils;
pub mod view;

/// Prints an informational message with a blue bullet point.
///
/// Writes one line to stdout, prefixed with a blue "o". Used for progress
/// notes and hints that need no action from the user.
///
/// # Arguments
///
/// Takes whatever `format_args!` takes: a format string followed by the
/// values to interpolate.
///
/// # Example
///
/// ```
/// use earlywrapped::info;
///
/// info!("Opening the Spotify login page...");
/// info!("Stats saved to {}", "early-wrapped.txt");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// use earlywrapped::success;
///
/// success!("Authentication successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Writes one line to stdout, prefixed with a red "!", then terminates the
/// process.
///
/// # Arguments
///
/// Takes whatever `format_args!` takes: a format string followed by the
/// values to interpolate.
///
/// # Behavior
///
/// The process exits with code 1 right after printing, so the macro
/// evaluates to `!` and can stand in any match arm. Only the command layer
/// uses it, for setup failures such as an unbindable callback address.
/// Library operations report through [`warning!`] and [`settle`] instead.
///
/// # Example
///
/// ```no_run
/// use earlywrapped::error;
///
/// let port: u16 = match "8888".parse() {
///     Ok(port) => port,
///     Err(e) => error!("Invalid port. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For recoverable failures: the operation is skipped and the program goes
/// on.
///
/// # Example
///
/// ```
/// use earlywrapped::warning;
///
/// warning!("Top tracks Error: {}", "connection refused");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line when `EARLYWRAPPED_DEBUG` is set.
///
/// Used for raw API payloads and other detail that is noise in normal runs.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if std::env::var_os("EARLYWRAPPED_DEBUG").is_some() {
      use colored::Colorize;
      eprintln!("[{}] {}", "~".dimmed(), std::format_args!($($arg)*));
    }
  })
}

/// Settles the outcome of a fire-and-forget operation.
///
/// Failures are logged with [`warning!`] and turned into `None`; nothing is
/// retried and nothing propagates further. Every public stats operation and
/// the callback-driven token exchange end in this boundary.
pub fn settle<T, E: std::fmt::Display>(label: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warning!("{} Error: {}", label, e);
            None
        }
    }
}
