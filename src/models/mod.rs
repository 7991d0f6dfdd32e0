//! Scheduling domain models.
//!
//! Provides the data types every policy shares: the process record it
//! reads and annotates, the policy selector, and the dispatch timeline a
//! run produces.
//!
//! # Domain Mappings
//!
//! | cpu-sched | OS textbook | Job shop |
//! |-----------|-------------|----------|
//! | Process | PCB / job | Job |
//! | Slice | CPU burst dispatch | Operation on machine |
//! | Timeline | Gantt chart | Machine schedule |

mod policy;
mod process;
mod timeline;

pub use policy::Policy;
pub use process::Process;
pub(crate) use process::sorted_by_arrival;
pub use timeline::{Slice, Timeline};
