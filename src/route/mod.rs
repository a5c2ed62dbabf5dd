//! Route discovery.
//!
//! | Module     | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `segment`  | Classify single file names / path segments         |
//! | `page`     | Recognized page extensions, page-file predicate    |
//! | `scan`     | Walk a pages directory into route entries          |
//! | `entry`    | `RouteEntry`                                       |
//! | `table`    | `RouteTable`: lookup and reference checking        |
//! | `conflict` | Route paths claimed by several page files          |

pub mod conflict;
mod entry;
pub mod page;
pub mod scan;
pub mod segment;
mod table;

pub use conflict::{RouteConflict, detect_conflicts, format_conflicts, print_conflicts};
pub use entry::RouteEntry;
pub use page::{PageKind, is_page_file};
pub use scan::scan;
pub use table::RouteTable;
