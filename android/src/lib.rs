//! JNI accessor handing the bridge secret to Android managed code.
//!
//! This crate is only compiled for Android targets.
//! To build: cargo ndk -t arm64-v8a build -p keykit-android
//!
//! The matching Kotlin declaration lives in `kotlin/NativeKeyProvider.kt`.

#![cfg(target_os = "android")]
#![allow(non_snake_case)]

use std::ffi::c_void;

use jni::objects::JObject;
use jni::sys::{JNI_VERSION_1_6, jint, jstring};
use jni::{JNIEnv, JavaVM};

/// Install the Android logger when the library is loaded.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("keykit"),
    );
    JNI_VERSION_1_6
}

/// `NativeKeyProvider.getSecretKey(): String`.
///
/// Returns null if the string cannot be allocated; the JVM's pending
/// exception is then thrown to the Kotlin caller.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_fluttersampleachitecture_NativeKeyProvider_getSecretKey<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    match keykit_secret::bridge_secret(&mut env) {
        Ok(value) => value.into_raw(),
        Err(e) => {
            log::error!("getSecretKey: {e}");
            std::ptr::null_mut()
        }
    }
}
