//! Deployment step definitions
//!
//! A step is an ordered record: stable name, human-readable title, the
//! management command it invokes, and a failure policy. `deploy_plan` builds
//! the fixed sequence from the configuration; the runner executes it.

use std::path::Path;

use crate::config::{BootstrapPolicy, Config};
use crate::process::ManagementCommand;

/// What a non-zero exit from a step means for the rest of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole deployment with a non-zero exit
    Fatal,
    /// Log a warning and continue
    Advisory,
}

/// One deployment step
#[derive(Debug, Clone)]
pub struct Step {
    /// Stable identifier used in events and reports
    pub name: &'static str,
    /// Human-readable title shown in CLI output
    pub title: &'static str,
    pub policy: FailurePolicy,
    pub command: ManagementCommand,
}

impl Step {
    fn manage(
        name: &'static str,
        title: &'static str,
        policy: FailurePolicy,
        config: &Config,
        project_root: &Path,
        args: &[&str],
    ) -> Self {
        let manage_py = config.manage_py_path(project_root).display().to_string();
        let mut full_args = vec![manage_py.as_str()];
        full_args.extend_from_slice(args);
        Self {
            name,
            title,
            policy,
            command: ManagementCommand::new(&config.django.python, &full_args),
        }
    }
}

/// Build the ordered deployment plan.
///
/// Order mirrors the deployment procedure: migrate, admin bootstrap, static
/// collection, deployment check, then (unless `serve` is false) the foreground
/// server. The server is simply the last step; being last, fatal
/// short-circuiting needs no special case for it.
pub fn deploy_plan(config: &Config, project_root: &Path, serve: bool) -> Vec<Step> {
    let mut steps = vec![Step::manage(
        "migrate",
        "Apply database migrations",
        FailurePolicy::Fatal,
        config,
        project_root,
        &["migrate", "--noinput"],
    )];

    match config.admin.bootstrap {
        BootstrapPolicy::Skip => {}
        policy => {
            let failure = match policy {
                BootstrapPolicy::Fatal => FailurePolicy::Fatal,
                _ => FailurePolicy::Advisory,
            };
            let mut step = Step::manage(
                "bootstrap-admin",
                "Ensure admin account",
                failure,
                config,
                project_root,
                &["shell"],
            );
            step.command = step.command.with_stdin(bootstrap_script(config));
            steps.push(step);
        }
    }

    steps.push(Step::manage(
        "collectstatic",
        "Collect static assets",
        FailurePolicy::Fatal,
        config,
        project_root,
        &["collectstatic", "--noinput"],
    ));

    steps.push(Step::manage(
        "deploy-check",
        "Run deployment checks",
        FailurePolicy::Advisory,
        config,
        project_root,
        &["check", "--deploy"],
    ));

    if serve {
        let bind = format!("{}:{}", config.server.host, config.server.port);
        steps.push(Step::manage(
            "runserver",
            "Start server",
            FailurePolicy::Fatal,
            config,
            project_root,
            &["runserver", &bind],
        ));
    }

    steps
}

/// Standalone deployment diagnostic, used by `stagehand check`.
///
/// Fatal here: when run on its own the diagnostic IS the operation, so its
/// failure is the command's failure. Inside `deploy_plan` the same command is
/// advisory.
pub fn check_step(config: &Config, project_root: &Path) -> Step {
    Step::manage(
        "deploy-check",
        "Run deployment checks",
        FailurePolicy::Fatal,
        config,
        project_root,
        &["check", "--deploy"],
    )
}

/// Python script piped into `manage.py shell`: creates the superuser if it
/// does not exist, otherwise reports that it already exists. Credentials come
/// from configuration.
pub fn bootstrap_script(config: &Config) -> String {
    let username = py_str(&config.admin.username);
    let email = py_str(&config.admin.email);
    let password = py_str(&config.admin.password);
    format!(
        "from django.contrib.auth import get_user_model\n\
         User = get_user_model()\n\
         if User.objects.filter(username={username}).exists():\n\
         \x20   print('Superuser already exists')\n\
         else:\n\
         \x20   User.objects.create_superuser({username}, {email}, {password})\n\
         \x20   print('Superuser created')\n"
    )
}

/// Quote a value as a Python single-quoted string literal
fn py_str(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}
