//! Stagehand - deployment sequencer for Django projects
//!
//! Stagehand runs the fixed sequence of management commands a Django
//! deployment needs - migrate, admin bootstrap, collectstatic, deployment
//! checks, server start - as external processes, short-circuiting on fatal
//! failures and warning on advisory ones.

pub mod config;
pub mod error;
pub mod process;
pub mod runner;
pub mod steps;

// Re-exports for convenience
pub use config::{BootstrapPolicy, Config, ConfigWarning};
pub use error::{StagehandError, StagehandResult};
pub use process::{CommandRunner, ExitOutcome, ManagementCommand, SystemRunner};
pub use runner::{run_plan, RunOptions, RunReport, StepEvent, StepReport, StepStatus};
pub use steps::{bootstrap_script, check_step, deploy_plan, FailurePolicy, Step};
