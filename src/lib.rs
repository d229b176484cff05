//! # Keykit
//!
//! Native accessors that hand a compiled-in secret key to a mobile host
//! application.
//!
//! The accessors themselves ship as separate native libraries:
//!
//! - `keykit-android`: a JNI export called from Kotlin
//!   (`NativeKeyProvider.getSecretKey`).
//! - `keykit-ios`: a C export `getSecretKey` called from the iOS plugin
//!   bridge.
//!
//! This crate re-exports the shared key definitions for Rust callers.
//!
//! ## Features
//!
//! - `secret` (default): the compiled-in keys and the host-string seam.
//!
//! ## Example
//!
//! ```rust
//! use keykit::secret;
//!
//! let key = secret::plugin_secret();
//! assert_eq!(key.to_bytes().len(), secret::PLUGIN_KEY.len());
//! ```

#[cfg(feature = "secret")]
pub use keykit_secret as secret;
