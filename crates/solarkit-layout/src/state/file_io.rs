//! File I/O operations (save, load) for the layout aggregate.

use tracing::info;

use super::LayoutState;
use crate::serialization::ProjectFile;

impl LayoutState {
    /// Saves the aggregate verbatim to the project file format.
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        ProjectFile::from_state(self).save_to_file(&path)?;
        info!(path = %path.as_ref().display(), "saved project");
        Ok(())
    }

    /// Replaces the entire aggregate with the contents of a project
    /// file.
    ///
    /// All-or-nothing: the file is fully parsed before any assignment,
    /// so a malformed file leaves the current state completely
    /// unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let project = ProjectFile::load_from_file(&path)?;
        *self = project.into_state();
        info!(path = %path.as_ref().display(), "loaded project");
        Ok(())
    }

    /// Suggested file name for saving this layout.
    pub fn suggested_file_name(&self) -> String {
        ProjectFile::suggested_file_name(&self.name)
    }
}
