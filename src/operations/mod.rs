//! Operations module
//!
//! The ways a run can present the site: an interactive terminal session,
//! scripted batch execution, or the plain single-page rendering.

pub mod batch;
pub mod interactive;
pub mod plain;
pub mod session;

pub use batch::run_batch;
pub use interactive::run_interactive;
pub use plain::plain_page;
pub use session::{Control, Session};
