use std::ffi::CStr;
use std::fmt;

/// Secret handed to managed code through the native bridge.
pub static BRIDGE_KEY: SecretKey =
    SecretKey::new("bridge", c"abcdefhijklmnopqrstuvwxyzabcdefghijklmnop");

/// Secret handed to a platform plugin as a C string.
pub static PLUGIN_KEY: SecretKey = SecretKey::new("plugin", c"my32lengthsupersecretnooneknows!!");

/// A secret compiled into the binary.
///
/// The value lives in static storage: it is never mutated, never freed and
/// keeps the same address for the whole process.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecretKey {
    name: &'static str,
    value: &'static CStr,
}

impl SecretKey {
    const fn new(name: &'static str, value: &'static CStr) -> Self {
        Self { name, value }
    }

    /// Label identifying which accessor this key belongs to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The value as a NUL-terminated C string.
    #[must_use]
    pub const fn as_c_str(&self) -> &'static CStr {
        self.value
    }

    /// The value as UTF-8.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        // Both literals are ASCII.
        self.value.to_str().unwrap_or_default()
    }

    /// Length in bytes, excluding the NUL terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.to_bytes().len()
    }

    /// Whether the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(BRIDGE_KEY.len(), 41);
        assert_eq!(PLUGIN_KEY.len(), 33);
        assert!(!BRIDGE_KEY.is_empty());
        assert!(!PLUGIN_KEY.is_empty());
    }

    #[test]
    fn str_and_c_str_agree() {
        for key in [BRIDGE_KEY, PLUGIN_KEY] {
            assert_eq!(key.as_str().as_bytes(), key.as_c_str().to_bytes());
            assert!(key.as_str().is_ascii());
        }
    }

    #[test]
    fn formatting_redacts_value() {
        for key in [BRIDGE_KEY, PLUGIN_KEY] {
            let shown = format!("{key} {key:?}");
            assert!(!shown.contains(key.as_str()));
            assert!(shown.contains(key.name()));
        }
        assert_eq!(BRIDGE_KEY.to_string(), "bridge");
        assert_eq!(
            format!("{PLUGIN_KEY:?}"),
            r#"SecretKey { name: "plugin", len: 33, .. }"#
        );
    }
}
