//! Android runtime string marshalling.

use crate::{HostString, SecretError};
use jni::JNIEnv;
use jni::objects::JString;

impl<'local> HostString for JNIEnv<'local> {
    type Output = JString<'local>;

    /// Allocate a `java.lang.String` through `NewStringUTF`.
    ///
    /// On failure the JVM may leave an `OutOfMemoryError` pending; it is
    /// raised in the caller once the native frame returns.
    fn host_string(&mut self, value: &str) -> Result<JString<'local>, SecretError> {
        self.new_string(value)
            .map_err(|e| SecretError::Marshal(e.to_string()))
    }
}
