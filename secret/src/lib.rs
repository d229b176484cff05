//! Compiled-in secret keys for mobile host runtimes.
//!
//! This crate owns the two placeholder keys shipped inside the native
//! libraries and the seam through which a key is turned into a host
//! runtime's string type:
//!
//! - [`BRIDGE_KEY`] is handed to managed code (the Android runtime) through
//!   [`bridge_secret`] and a [`HostString`] implementation.
//! - [`PLUGIN_KEY`] is handed to a platform plugin as a NUL-terminated
//!   pointer through [`plugin_secret`].
//!
//! The values are literals baked into the binary. They offer no protection
//! against anyone who can read the shipped library.

#![warn(missing_docs)]

mod host;
mod key;

/// Platform-specific implementations.
pub mod sys;

pub use host::HostString;
pub use key::{BRIDGE_KEY, PLUGIN_KEY, SecretKey};

use std::ffi::CStr;

/// Errors that can occur when handing a secret to a host runtime.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// The host runtime could not build its string representation.
    #[error("failed to marshal secret into host runtime: {0}")]
    Marshal(String),
}

/// Marshal the native-bridge secret into the host runtime's string type.
///
/// # Errors
/// Returns [`SecretError::Marshal`] if the host fails to allocate the string.
pub fn bridge_secret<H: HostString>(host: &mut H) -> Result<H::Output, SecretError> {
    log::trace!("handing out {BRIDGE_KEY} secret");
    host.host_string(BRIDGE_KEY.as_str())
}

/// The plain-native secret, valid for the lifetime of the process.
#[must_use]
pub fn plugin_secret() -> &'static CStr {
    log::trace!("handing out {PLUGIN_KEY} secret");
    PLUGIN_KEY.as_c_str()
}
