//! # CLI Module
//!
//! User-facing commands of EarlyWrapped. Each command takes an
//! [`crate::management::AuthSession`] built by `main` and reports through
//! the crate's status macros.
//!
//! ## Commands
//!
//! - [`login`] - PKCE login through the browser and the local callback
//!   server, followed by the stats
//! - [`stats`] - Fetches and prints the stats, optionally exporting them
//! - [`status`] - Shows the login state and where credentials are kept
//!
//! ## Usage Patterns
//!
//! ```bash
//! earlywrapped login                       # log in, then show stats
//! earlywrapped stats                       # show stats with the stored token
//! earlywrapped stats --export              # ...and save early-wrapped.txt
//! earlywrapped stats --export ~/wrap.txt   # ...to a chosen path
//! earlywrapped status
//! ```

mod login;
mod stats;
mod status;

pub use login::login;
pub use stats::stats;
pub use status::status;
