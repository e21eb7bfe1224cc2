//! Deploy command implementation

use std::path::Path;

use anyhow::Result;

use stagehand::runner::{run_plan, RunOptions, StepEvent};
use stagehand::steps::{deploy_plan, FailurePolicy};
use stagehand::{StagehandError, SystemRunner};

use crate::ui::{json, Icon, UiContext};

pub fn cmd_deploy(
    project_root: &Path,
    port: Option<u16>,
    dry_run: bool,
    no_serve: bool,
    json_mode: bool,
    verbose: u8,
) -> Result<i32> {
    let ui = UiContext::new(json_mode, verbose);

    let mut config = super::load_config(project_root)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    // Dry runs work anywhere; real runs need a Django project to talk to
    if !dry_run {
        let manage_py = config.manage_py_path(project_root);
        if !manage_py.exists() {
            return Err(StagehandError::ManagePyNotFound { path: manage_py }.into());
        }
    }

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "start",
            "command": "deploy",
            "version": env!("CARGO_PKG_VERSION"),
            "project_root": project_root.display().to_string(),
            "port": config.server.port,
            "dry_run": dry_run,
        }));
        let _ = json::emit(serde_json::json!({
            "event": "database",
            "configured": config.database_url.is_some(),
            "message": config.database_notice(),
        }));
    } else {
        println!(
            "{} Stagehand Deploy",
            Icon::Deploy.colored(ui.color, ui.unicode)
        );
        println!("Project root: {}", project_root.display());
        if dry_run {
            println!("Option: Dry run");
        }
        println!();

        let db_icon = if config.database_url.is_some() {
            Icon::Success
        } else {
            Icon::Warning
        };
        println!(
            "{} {}",
            db_icon.colored(ui.color, ui.unicode),
            config.database_notice()
        );
        println!();
    }

    let plan = deploy_plan(&config, project_root, !no_serve);
    let options = RunOptions { dry_run };

    let mut runner = SystemRunner;
    let report = run_plan(&mut runner, &plan, options, |event| {
        print_event(&ui, &event);
    })?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "success": report.is_success(),
            "warnings": report.warnings(),
            "exit_code": report.exit_code(),
        }));
    } else if let Some(failure) = report.fatal_failure() {
        println!();
        println!(
            "{} Deployment failed at step '{}' (exit code {})",
            Icon::Error.colored(ui.color, ui.unicode),
            failure.name,
            failure.code.map_or("none".to_string(), |c| c.to_string()),
        );
    } else if !dry_run && no_serve {
        println!();
        println!(
            "{} Deployment steps complete ({} warnings)",
            Icon::Success.colored(ui.color, ui.unicode),
            report.warnings()
        );
    }

    Ok(report.exit_code())
}

fn print_event(ui: &UiContext, event: &StepEvent) {
    if ui.json {
        match event {
            StepEvent::Started(step) => {
                let _ = json::emit(serde_json::json!({
                    "event": "step",
                    "phase": "started",
                    "name": step.name,
                    "command": step.command.to_string(),
                }));
            }
            StepEvent::Finished { step, outcome } => {
                let _ = json::emit(serde_json::json!({
                    "event": "step",
                    "phase": "finished",
                    "name": step.name,
                    "success": outcome.is_success(),
                    "exit_code": outcome.code,
                }));
            }
            StepEvent::WouldRun(step) => {
                let _ = json::emit(serde_json::json!({
                    "event": "step",
                    "phase": "would-run",
                    "name": step.name,
                    "command": step.command.to_string(),
                }));
            }
            StepEvent::Aborted { remaining } => {
                let names: Vec<_> = remaining.iter().map(|s| s.name).collect();
                let _ = json::emit(serde_json::json!({
                    "event": "aborted",
                    "skipped": names,
                }));
            }
        }
        return;
    }

    match event {
        StepEvent::Started(step) => {
            println!(
                "{} {}...",
                Icon::Pending.colored(ui.color, ui.unicode),
                step.title
            );
            if ui.verbose > 0 {
                println!(
                    "  {} {}",
                    Icon::Arrow.colored(ui.color, ui.unicode),
                    step.command
                );
            }
        }
        StepEvent::Finished { step, outcome } => {
            if outcome.is_success() {
                println!(
                    "{} {}",
                    Icon::Success.colored(ui.color, ui.unicode),
                    step.title
                );
            } else {
                let icon = match step.policy {
                    FailurePolicy::Fatal => Icon::Error,
                    FailurePolicy::Advisory => Icon::Warning,
                };
                println!(
                    "{} {} (exit code {})",
                    icon.colored(ui.color, ui.unicode),
                    step.title,
                    outcome.code.map_or("none".to_string(), |c| c.to_string()),
                );
            }
        }
        StepEvent::WouldRun(step) => {
            println!(
                "{} would run: {}",
                Icon::Pending.colored(ui.color, ui.unicode),
                step.command
            );
        }
        StepEvent::Aborted { remaining } => {
            for step in remaining.iter() {
                println!(
                    "{} skipped: {}",
                    Icon::Error.colored(ui.color, ui.unicode),
                    step.title
                );
            }
        }
    }
}
