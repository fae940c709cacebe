//! Command implementations

mod analyze_file;
mod analyze_numbers;

pub use analyze_file::analyze_file;
pub use analyze_numbers::analyze_numbers;
pub use self_test::self_test;
