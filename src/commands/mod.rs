pub mod report;

pub use report::{load_config, run_report, run_report_impl};
