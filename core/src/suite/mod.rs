//! Test-suite declaration: test cases, the guests they need, and the scripts
//! they run on those guests.

mod load;
mod model;

pub use model::{SubTest, TestCase, TestSuite, GUEST_ARTIFACTS_DIR, GUEST_SOURCE_DIR};
