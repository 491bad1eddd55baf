use crate::application::read_models::StatusTableReadModel;
use crate::build_planning::domain::BuildInfo;
use crate::shared::Result;
use std::path::Path;

/// ScriptFormatter port for rendering the build-all shell script
pub trait ScriptFormatter {
    /// Renders one build block per entry, in the given order
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, builds: &[BuildInfo]) -> Result<String>;
}

/// DocumentFormatter port for patching the image status table of a document
pub trait DocumentFormatter {
    /// Replaces the status table of `document` with one rendered from `model`
    ///
    /// Text outside the table region is preserved byte for byte.
    ///
    /// # Errors
    /// Returns a `DocumentFormatError` naming `document_path` if the document
    /// has no table marker
    fn patch(
        &self,
        document_path: &Path,
        document: &str,
        model: &StatusTableReadModel,
    ) -> Result<String>;
}
