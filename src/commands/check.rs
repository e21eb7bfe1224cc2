//! Check command implementation

use std::path::Path;

use anyhow::Result;

use stagehand::runner::{run_plan, RunOptions};
use stagehand::steps::check_step;
use stagehand::{StagehandError, SystemRunner};

use crate::ui::{json, Icon, UiContext};

pub fn cmd_check(project_root: &Path, json_mode: bool, verbose: u8) -> Result<i32> {
    let ui = UiContext::new(json_mode, verbose);

    let config = super::load_config(project_root)?;
    let manage_py = config.manage_py_path(project_root);
    if !manage_py.exists() {
        return Err(StagehandError::ManagePyNotFound { path: manage_py }.into());
    }

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "start",
            "command": "check",
            "version": env!("CARGO_PKG_VERSION"),
            "project_root": project_root.display().to_string(),
        }));
    } else {
        println!(
            "{} Stagehand Check",
            Icon::Check.colored(ui.color, ui.unicode)
        );
        println!("Project root: {}", project_root.display());
        println!();
    }

    let step = check_step(&config, project_root);
    let mut runner = SystemRunner;
    let report = run_plan(
        &mut runner,
        std::slice::from_ref(&step),
        RunOptions::default(),
        |_| {},
    )?;

    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "success": report.is_success(),
            "exit_code": report.exit_code(),
        }));
    } else if report.is_success() {
        println!(
            "{} Deployment checks passed",
            Icon::Success.colored(ui.color, ui.unicode)
        );
    } else {
        println!(
            "{} Deployment checks reported issues",
            Icon::Error.colored(ui.color, ui.unicode)
        );
    }

    Ok(report.exit_code())
}
