cfg_if::cfg_if! {
    if #[cfg(target_os = "android")] {
        pub mod android;
    }
}
