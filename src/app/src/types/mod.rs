//! Domain-based type organization
//!
//! Types are organized by the wizard step they belong to:
//! - router: Router credentials and web interface helpers
//! - awg: AWG profile and WireGuard interface listing
//! - route: Route source assignment
//! - view: View tags, last action and schema variants
//! - progress: Step reporting for long-running backend pipelines
//! - binding: Construction of records from backend JSON

pub mod awg;
pub mod binding;
pub mod progress;
pub mod route;
pub mod router;
pub mod view;

pub use awg::*;
pub use binding::*;
pub use progress::*;
pub use route::*;
pub use router::*;
pub use view::*;
