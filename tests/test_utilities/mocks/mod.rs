/// Mock implementations for testing
mod mock_fragment_reader;
mod mock_link_checker;
mod mock_progress_reporter;

pub use mock_fragment_reader::MockFragmentReader;
pub use mock_link_checker::MockLinkChecker;
pub use mock_progress_reporter::MockProgressReporter;
