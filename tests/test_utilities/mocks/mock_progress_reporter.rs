use dockerfile_build_helper::prelude::*;
use std::sync::{Arc, Mutex};

/// Captured console output, one vector per kind of line
#[derive(Default)]
struct ReportedLines {
    info: Vec<String>,
    errors: Vec<String>,
    completions: Vec<String>,
    last_progress: Option<(usize, usize)>,
}

/// Mock ProgressReporter recording what the use case would print
///
/// Clones share the same record, so a test keeps one clone to inspect
/// after handing the other to the use case.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    lines: Arc<Mutex<ReportedLines>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> Vec<String> {
        self.lines.lock().unwrap().info.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines.lock().unwrap().errors.clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.lines.lock().unwrap().completions.clone()
    }

    pub fn last_progress(&self) -> Option<(usize, usize)> {
        self.lines.lock().unwrap().last_progress
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.lines.lock().unwrap().info.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.lines.lock().unwrap().last_progress = Some((current, total));
    }

    fn report_error(&self, message: &str) {
        self.lines.lock().unwrap().errors.push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.lines.lock().unwrap().completions.push(message.to_string());
    }
}
