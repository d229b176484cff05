//! C accessor handing the plugin secret to the iOS plugin bridge.
//!
//! Link `libkeykit_ios.a` into the Runner target and import
//! `include/SecurityUtils.h` from the Swift bridging header.

#![allow(non_snake_case)]

use std::ffi::c_char;

/// `const char* getSecretKey(void)`.
///
/// The returned pointer refers to static storage that lives for the whole
/// process. Callers must not free or modify it.
#[unsafe(no_mangle)]
pub extern "C" fn getSecretKey() -> *const c_char {
    keykit_secret::plugin_secret().as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn read(ptr: *const c_char) -> &'static str {
        assert!(!ptr.is_null());
        // SAFETY: getSecretKey returns a pointer into a 'static C string.
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    #[test]
    fn returns_plugin_secret() {
        let value = read(getSecretKey());
        assert_eq!(value, "my32lengthsupersecretnooneknows!!");
        assert_eq!(value.len(), 33);
    }

    #[test]
    fn pointer_is_stable() {
        let first = getSecretKey();
        for _ in 0..100 {
            assert_eq!(getSecretKey(), first);
        }
    }

    #[test]
    fn concurrent_callers_share_storage() {
        let expected = getSecretKey() as usize;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    s.spawn(|| {
                        let ptr = getSecretKey();
                        (ptr as usize, read(ptr))
                    })
                })
                .collect();
            for handle in handles {
                let (addr, value) = handle.join().unwrap();
                assert_eq!(addr, expected);
                assert_eq!(value, keykit_secret::PLUGIN_KEY.as_str());
            }
        });
    }
}
