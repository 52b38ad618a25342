//! Handler for the `stop` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::file::kill_switch::FileKillSwitch;
use crate::error::Result;

/// Execute the stop command.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = config::load_or_default(&args.config)?;
    let switch = FileKillSwitch::new(&config.kill_switch_path);
    let already_armed = switch.is_armed();
    switch.engage()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stop",
            "path": switch.path(),
            "already_requested": already_armed,
        }));
        return Ok(());
    }

    if already_armed {
        output::warning("Stop was already requested");
    } else {
        output::success("Stop requested");
    }
    output::field("Sentinel", switch.path().display());
    output::note("The scan loop exits at its next kill-switch poll.");
    Ok(())
}
