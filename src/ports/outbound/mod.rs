/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod document_reader;
pub mod formatter;
pub mod fragment_reader;
pub mod link_checker;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_reader::DocumentReader;
pub use formatter::{DocumentFormatter, ScriptFormatter};
pub use fragment_reader::{FragmentDocument, FragmentReader};
pub use link_checker::LinkChecker;
pub use output_presenter::{GeneratedArtifact, OutputPresenter};
pub use progress_reporter::ProgressReporter;
