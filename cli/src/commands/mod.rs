//! CLI Commands
//!
//! All seedkey CLI commands organized as separate modules.

mod check;
mod response;
mod scan;

pub use check::check_key;
pub use response::print_response;
pub use scan::scan_keys;
