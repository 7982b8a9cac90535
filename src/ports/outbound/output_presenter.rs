use crate::shared::Result;

/// OutputPresenter port for presenting the generated requirements
///
/// This port abstracts the output destination (file, stdout, etc.).
pub trait OutputPresenter {
    /// Presents the rendered requirements content, replacing prior content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn present(&self, content: &str) -> Result<()>;

    /// Short description of the destination for progress messages
    fn destination(&self) -> String;
}

impl<P: OutputPresenter + ?Sized> OutputPresenter for Box<P> {
    fn present(&self, content: &str) -> Result<()> {
        (**self).present(content)
    }

    fn destination(&self) -> String {
        (**self).destination()
    }
}
