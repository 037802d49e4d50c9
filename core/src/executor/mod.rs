//! Sequential, fail-fast task execution.
//!
//! ```text
//! TaskList::add(name, handler)    (nothing runs yet)
//!   ↓
//! TaskList::run()
//!   ↓  for each task, in insertion order
//! "[i/N] name"  →  handler(Task).await
//!   ↓ Err                       ↓ all Ok
//! "Finished with error ..."      "Finished in HH:MM:SS"
//! return the same error
//! ```
//!
//! A handler may build and run its own child `TaskList`; the child reports with
//! its own name as prefix.

mod cleanup;
mod output;
mod task;
mod tasklist;

pub use cleanup::run_with_cleanup;
pub use output::{Console, ConsoleLine, ConsoleStream, MemoryConsole, StdConsole};
pub use task::Task;
pub use tasklist::{format_duration, TaskList};
