use std::sync::Arc;

use super::output::Console;

/// Where a task list writes its lines. Shared by the list and its tasks.
#[derive(Clone)]
pub(crate) struct Reporter {
    prefix: String,
    console: Arc<dyn Console>,
}

impl Reporter {
    pub(crate) fn new(name: Option<&str>, console: Arc<dyn Console>) -> Self {
        let prefix = name.map(|n| format!("[{n}] ")).unwrap_or_default();
        Self { prefix, console }
    }

    pub(crate) fn message(&self, msg: &str) {
        self.console.message(&format!("{}{}", self.prefix, msg));
    }

    pub(crate) fn error(&self, msg: &str) {
        self.console.error(&format!("{}{}", self.prefix, msg));
    }
}

/// Handle passed to a task handler while it runs.
///
/// It only lets the handler talk to the console through its owning task list;
/// there is no way to reach the list's other tasks from here.
#[derive(Clone)]
pub struct Task {
    name: String,
    reporter: Reporter,
}

impl Task {
    pub(crate) fn new(name: String, reporter: Reporter) -> Self {
        Self { name, reporter }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self, msg: &str) {
        self.reporter.message(msg);
    }

    pub fn error(&self, msg: &str) {
        self.reporter.error(msg);
    }

    /// Reports a sub-step, indented two spaces per `indent` level and optionally
    /// tagged with `[group]`.
    pub fn step(&self, description: impl std::fmt::Display, group: Option<&str>, indent: usize) {
        let mut msg = "  ".repeat(indent);
        if let Some(group) = group {
            msg.push_str(&format!("[{group}] "));
        }
        msg.push_str(&description.to_string());
        self.message(&msg);
    }
}
