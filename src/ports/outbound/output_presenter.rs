use crate::shared::Result;

/// OutputPresenter port for delivering a rendered dashboard
///
/// Keeps the choice between stdout and an output file out of the use case.
pub trait OutputPresenter {
    /// Writes the rendered dashboard to its destination
    ///
    /// # Errors
    /// Returns an error if the destination rejects the write (missing parent
    /// directory, symlinked target, permissions, full disk)
    fn present(&self, content: &str) -> Result<()>;
}
