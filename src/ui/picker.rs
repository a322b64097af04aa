use camino::Utf8PathBuf;
use tokio::runtime::Runtime;

/// Asks the user for a folder.
#[cfg_attr(test, mockall::automock)]
pub trait FolderPicker {
    /// Show a folder selection prompt titled `title`.
    ///
    /// # Returns
    /// The selected folder, or None if the user cancelled
    fn pick_folder(&self, title: &str) -> Option<Utf8PathBuf>;
}

/// Native folder dialog using the `rfd` crate.
///
/// Dialogs run inside a tokio runtime context: some portal backends reach
/// for the ambient reactor and panic on a bare thread.
pub struct NativeFolderPicker {
    runtime: Runtime,
}

impl NativeFolderPicker {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self { runtime })
    }

    fn in_dialog_context<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.runtime.enter();
        f()
    }
}

impl FolderPicker for NativeFolderPicker {
    fn pick_folder(&self, title: &str) -> Option<Utf8PathBuf> {
        use rfd::FileDialog;

        let selected = self.in_dialog_context(|| FileDialog::new().set_title(title).pick_folder());

        // Non UTF-8 selections are treated as a cancel
        selected.and_then(|path| {
            Utf8PathBuf::try_from(path)
                .map_err(|e| {
                    tracing::error!("Failed to convert path to UTF-8: {}", e);
                    e
                })
                .ok()
        })
    }
}
