//! Applying one hypervisor operation to a set of named guests.
//!
//! - [`GuestCatalog`]: the known guests, split into Linux and Windows classes.
//! - [`GuestSet`]: a resolved, sorted, de-duplicated selection from the catalog.
//! - [`ExitCodePolicy`]: per-operation table of nonzero exit codes that count as success.
//! - [`GuestTargeting`]: runs an operation in [`DispatchMode::Batched`] or
//!   [`DispatchMode::Sequential`] mode and applies the policy.

mod catalog;
mod policy;
mod selection;
mod targeting;

pub use catalog::{GuestCatalog, ALL_GUESTS, LINUX_GUESTS, WINDOWS_GUESTS};
pub use policy::ExitCodePolicy;
pub use selection::GuestSet;
pub use targeting::{DispatchMode, GuestTargeting};
