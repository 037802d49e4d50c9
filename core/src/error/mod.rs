#[allow(clippy::module_inception)]
pub mod error;
pub mod shell;

pub use error::SuiteError;
pub use shell::ShellError;
