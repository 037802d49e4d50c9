//! Stable re-exports for consumers (`cli`, `plugins`, and tests).
//!
//! Prefer importing from `sssd_suite_core::api` instead of reaching into internal modules.

pub use crate::backend::{AnsibleBackend, PlaybookRun, VagrantBackend, VagrantInvocation};
pub use crate::config::{
    expand_path, load_default, AppConfig, GuestsConfig, LoggingConfig, PathsConfig, ToolsConfig,
    GUEST_CONFIG_ENV,
};
pub use crate::context::{AppContext, SuitePaths};
pub use crate::error::{ShellError, SuiteError};
pub use crate::executor::{
    format_duration, run_with_cleanup, Console, ConsoleLine, ConsoleStream, MemoryConsole,
    StdConsole, Task, TaskList,
};
pub use crate::guest::{
    DispatchMode, ExitCodePolicy, GuestCatalog, GuestSet, GuestTargeting, ALL_GUESTS,
};
pub use crate::shell::{exit_status, ShellCommand, ShellExecutor};
pub use crate::suite::{SubTest, TestCase, TestSuite, GUEST_ARTIFACTS_DIR, GUEST_SOURCE_DIR};
