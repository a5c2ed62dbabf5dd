//! Link building: route references to URL strings.

mod error;
mod handle;
mod options;
mod resolve;

pub use error::{LinkIssue, ResolveError};
pub use handle::RouteHandle;
pub use options::{ParamMap, RouteOptions};
pub use resolve::{resolve, try_resolve};
