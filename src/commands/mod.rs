pub mod context;
pub mod fix;
pub mod init;
pub mod report;
pub mod validate;

pub use context::{ValidationRun, load_settings, run_validation};
pub use fix::{FixSummary, fix_options, run_fix, run_fix_impl};
pub use init::{generate_standards_template, run_init, run_init_impl};
pub use report::{run_report, run_report_impl};
pub use validate::{run_validate, run_validate_impl};
