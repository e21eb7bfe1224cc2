//! Ordered step execution
//!
//! Runs a deployment plan one step at a time, fully awaiting each command.
//! A fatal step's non-zero exit short-circuits the rest of the plan; an
//! advisory failure is recorded and execution continues. There are no
//! retries and no rollback of already-completed steps.

use crate::error::StagehandResult;
use crate::process::{CommandRunner, ExitOutcome};
use crate::steps::{FailurePolicy, Step};

/// Options for a deployment run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print commands without executing anything
    pub dry_run: bool,
}

/// Progress events emitted while a plan executes
#[derive(Debug)]
pub enum StepEvent<'a> {
    Started(&'a Step),
    /// Command finished; outcome may still be a failure
    Finished {
        step: &'a Step,
        outcome: ExitOutcome,
    },
    /// Dry run: the command that would have been executed
    WouldRun(&'a Step),
    /// Fatal failure: these steps will not execute
    Aborted {
        remaining: &'a [Step],
    },
}

/// Final status of one executed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    /// Advisory step failed; run continued
    Warned,
    /// Fatal step failed; run stopped
    Failed,
    /// Dry run, not executed
    Skipped,
}

/// Record of one step's execution
#[derive(Debug, Clone)]
pub struct StepReport {
    pub name: &'static str,
    pub status: StepStatus,
    pub code: Option<i32>,
}

/// Result of running a whole plan
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    /// The fatal failure that stopped the run, if any
    pub fn fatal_failure(&self) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.status == StepStatus::Failed)
    }

    pub fn warnings(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Warned)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.fatal_failure().is_none()
    }

    /// Process exit code for this run: the failing step's own code when the
    /// child reported one, else 1, else 0 on success.
    pub fn exit_code(&self) -> i32 {
        match self.fatal_failure() {
            Some(report) => report.code.filter(|c| *c != 0).unwrap_or(1),
            None => 0,
        }
    }
}

/// Execute a plan in order against the given command runner.
pub fn run_plan<R, F>(
    runner: &mut R,
    steps: &[Step],
    options: RunOptions,
    mut on_event: F,
) -> StagehandResult<RunReport>
where
    R: CommandRunner,
    F: FnMut(StepEvent),
{
    let mut report = RunReport::default();

    for (i, step) in steps.iter().enumerate() {
        if options.dry_run {
            on_event(StepEvent::WouldRun(step));
            report.steps.push(StepReport {
                name: step.name,
                status: StepStatus::Skipped,
                code: None,
            });
            continue;
        }

        on_event(StepEvent::Started(step));
        let outcome = runner.run(step.name, &step.command)?;
        on_event(StepEvent::Finished { step, outcome });

        let status = if outcome.is_success() {
            StepStatus::Passed
        } else {
            match step.policy {
                FailurePolicy::Advisory => StepStatus::Warned,
                FailurePolicy::Fatal => StepStatus::Failed,
            }
        };

        report.steps.push(StepReport {
            name: step.name,
            status,
            code: outcome.code,
        });

        if status == StepStatus::Failed {
            on_event(StepEvent::Aborted {
                remaining: &steps[i + 1..],
            });
            break;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::StagehandResult;
    use crate::process::{CommandRunner, ExitOutcome, ManagementCommand};
    use crate::steps::deploy_plan;
    use std::path::Path;

    /// Scripted fake: maps step names to exit codes, records invocations
    struct FakeRunner {
        failures: Vec<(&'static str, i32)>,
        invoked: Vec<String>,
    }

    impl FakeRunner {
        fn new(failures: &[(&'static str, i32)]) -> Self {
            Self {
                failures: failures.to_vec(),
                invoked: Vec::new(),
            }
        }

        fn all_pass() -> Self {
            Self::new(&[])
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(
            &mut self,
            step: &str,
            _command: &ManagementCommand,
        ) -> StagehandResult<ExitOutcome> {
            self.invoked.push(step.to_string());
            match self.failures.iter().find(|(name, _)| *name == step) {
                Some((_, code)) => Ok(ExitOutcome::failure(*code)),
                None => Ok(ExitOutcome::success()),
            }
        }
    }

    fn full_plan() -> Vec<Step> {
        deploy_plan(&Config::default(), Path::new("/srv/app"), true)
    }

    #[test]
    fn all_steps_pass_reaches_server() {
        let mut runner = FakeRunner::all_pass();
        let report = run_plan(&mut runner, &full_plan(), RunOptions::default(), |_| {}).unwrap();

        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            runner.invoked,
            vec![
                "migrate",
                "bootstrap-admin",
                "collectstatic",
                "deploy-check",
                "runserver"
            ]
        );
    }

    #[test]
    fn migrate_failure_halts_everything() {
        let mut runner = FakeRunner::new(&[("migrate", 1)]);
        let report = run_plan(&mut runner, &full_plan(), RunOptions::default(), |_| {}).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(runner.invoked, vec!["migrate"]);
        assert_eq!(report.fatal_failure().unwrap().name, "migrate");
    }

    #[test]
    fn collectstatic_failure_skips_check_and_server() {
        let mut runner = FakeRunner::new(&[("collectstatic", 2)]);
        let report = run_plan(&mut runner, &full_plan(), RunOptions::default(), |_| {}).unwrap();

        assert_eq!(
            runner.invoked,
            vec!["migrate", "bootstrap-admin", "collectstatic"]
        );
        // underlying exit code propagates
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn deploy_check_failure_still_starts_server() {
        let mut runner = FakeRunner::new(&[("deploy-check", 1)]);
        let report = run_plan(&mut runner, &full_plan(), RunOptions::default(), |_| {}).unwrap();

        assert!(report.is_success());
        assert_eq!(report.warnings(), 1);
        assert!(runner.invoked.contains(&"runserver".to_string()));
    }

    #[test]
    fn advisory_bootstrap_failure_continues() {
        let mut runner = FakeRunner::new(&[("bootstrap-admin", 1)]);
        let report = run_plan(&mut runner, &full_plan(), RunOptions::default(), |_| {}).unwrap();

        assert!(report.is_success());
        assert_eq!(report.warnings(), 1);
        assert_eq!(runner.invoked.len(), 5, "run continues past bootstrap");
    }

    #[test]
    fn fatal_bootstrap_policy_halts() {
        let mut config = Config::default();
        config.admin.bootstrap = crate::config::BootstrapPolicy::Fatal;
        let plan = deploy_plan(&config, Path::new("/srv/app"), true);

        let mut runner = FakeRunner::new(&[("bootstrap-admin", 1)]);
        let report = run_plan(&mut runner, &plan, RunOptions::default(), |_| {}).unwrap();

        assert!(!report.is_success());
        assert_eq!(runner.invoked, vec!["migrate", "bootstrap-admin"]);
        assert_eq!(report.fatal_failure().unwrap().name, "bootstrap-admin");
    }

    #[test]
    fn dry_run_invokes_nothing() {
        let mut runner = FakeRunner::all_pass();
        let options = RunOptions { dry_run: true };
        let mut would_run = Vec::new();
        let report = run_plan(&mut runner, &full_plan(), options, |event| {
            if let StepEvent::WouldRun(step) = event {
                would_run.push(step.name);
            }
        })
        .unwrap();

        assert!(runner.invoked.is_empty());
        assert_eq!(would_run.len(), 5);
        assert!(report.is_success());
        assert!(report
            .steps
            .iter()
            .all(|s| s.status == StepStatus::Skipped));
    }

    #[test]
    fn aborted_event_names_remaining_steps() {
        let mut runner = FakeRunner::new(&[("migrate", 1)]);
        let mut remaining_names = Vec::new();
        run_plan(&mut runner, &full_plan(), RunOptions::default(), |event| {
            if let StepEvent::Aborted { remaining } = event {
                remaining_names = remaining.iter().map(|s| s.name).collect();
            }
        })
        .unwrap();

        assert_eq!(
            remaining_names,
            vec!["bootstrap-admin", "collectstatic", "deploy-check", "runserver"]
        );
    }

    #[test]
    fn signal_terminated_fatal_step_exits_one() {
        struct SignalRunner;
        impl CommandRunner for SignalRunner {
            fn run(
                &mut self,
                _step: &str,
                _command: &ManagementCommand,
            ) -> StagehandResult<ExitOutcome> {
                Ok(ExitOutcome { code: None })
            }
        }

        let mut runner = SignalRunner;
        let report = run_plan(&mut runner, &full_plan(), RunOptions::default(), |_| {}).unwrap();
        assert_eq!(report.exit_code(), 1);
    }
}
