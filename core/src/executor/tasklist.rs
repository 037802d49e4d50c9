use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::SuiteError;

use super::output::Console;
use super::task::{Reporter, Task};

type Handler<'a> = Box<dyn FnOnce(Task) -> BoxFuture<'a, Result<(), SuiteError>> + Send + 'a>;

struct Entry<'a> {
    name: String,
    handler: Handler<'a>,
}

/// Ordered list of named units of work, run one at a time.
///
/// `run` consumes the list, so a list that completed or failed cannot be run
/// again; build a fresh one instead.
pub struct TaskList<'a> {
    name: Option<String>,
    console: Arc<dyn Console>,
    tasks: Vec<Entry<'a>>,
}

impl<'a> TaskList<'a> {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            name: None,
            console,
            tasks: Vec::new(),
        }
    }

    pub fn named(console: Arc<dyn Console>, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            console,
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Appends a task. The handler is not called until [`TaskList::run`].
    ///
    /// Arguments are bound by capturing them in the closure.
    pub fn add<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnOnce(Task) -> Fut + Send + 'a,
        Fut: Future<Output = Result<(), SuiteError>> + Send + 'a,
    {
        self.tasks.push(Entry {
            name: name.into(),
            handler: Box::new(move |task| handler(task).boxed()),
        });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Runs every task in insertion order and stops at the first failure.
    ///
    /// The failing task is reported on the error stream and its error is returned
    /// with the task recorded as context (see [`SuiteError::in_step`]); kind,
    /// message and exit code stay those of the original error. Tasks after it
    /// never run.
    pub async fn run(self) -> Result<(), SuiteError> {
        let TaskList {
            name,
            console,
            tasks,
        } = self;
        let reporter = Reporter::new(name.as_deref(), console);
        let total = tasks.len();
        let start = Instant::now();

        for (idx, entry) in tasks.into_iter().enumerate() {
            let Entry {
                name: task_name,
                handler,
            } = entry;
            reporter.message(&format!("[{}/{}] {}", idx + 1, total, task_name));
            tracing::debug!(
                tasklist = name.as_deref().unwrap_or(""),
                task = %task_name,
                index = idx + 1,
                total,
                "task started"
            );

            let task = Task::new(task_name.clone(), reporter.clone());
            if let Err(err) = handler(task).await {
                tracing::debug!(task = %task_name, error = %err, "task failed");
                reporter.error(&format!("Task '{task_name}' failed"));
                reporter.error(&format!("Finished with error {}: {}", err.kind(), err));
                return Err(err.in_step(name.as_deref(), &task_name));
            }
        }

        reporter.message(&format!("Finished in {}", format_duration(start.elapsed())));
        Ok(())
    }
}

/// Formats a duration as `HH:MM:SS`. Hours are not capped at 24.
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
