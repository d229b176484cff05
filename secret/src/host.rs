use crate::SecretError;

/// A host runtime that can build its own string type from native text.
///
/// Managed runtimes own their string objects, so handing a secret across the
/// bridge means asking the runtime to allocate one. Allocation may fail, for
/// example when the runtime is out of memory.
pub trait HostString {
    /// The runtime's string handle.
    type Output;

    /// Build a runtime string holding `value`.
    ///
    /// # Errors
    /// Returns [`SecretError::Marshal`] if the runtime refuses the allocation.
    fn host_string(&mut self, value: &str) -> Result<Self::Output, SecretError>;
}
