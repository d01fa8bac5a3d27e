//! Line-based control channel.
//!
//! ```text
//! set <key> <value>   change a rule (value is JSON, bare words are strings)
//! watch on|off        toggle clipboard watching for this session
//! translate <text>    translate text directly
//! read                translate the current clipboard content
//! status              print the dispatch state
//! help
//! quit
//! ```

use ct_app::DispatchController;
use ct_platform::ipc::PlatformCommand;
use ct_platform::runtime::event_bus::PlatformCommandSender;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP: &str = "commands: set <key> <value> | watch on|off | translate <text> | read | status | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    Set { key: String, value: Value },
    Watch(bool),
    Translate(String),
    Read,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub fn parse_line(line: &str) -> Result<ControlCommand, ControlParseError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => Err(ControlParseError::Empty),
        "set" => {
            let Some((key, raw)) = rest.split_once(char::is_whitespace) else {
                return Err(ControlParseError::Usage("set <key> <value>"));
            };
            let raw = raw.trim();
            let value =
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            Ok(ControlCommand::Set {
                key: key.to_string(),
                value,
            })
        }
        "watch" => match rest {
            "on" => Ok(ControlCommand::Watch(true)),
            "off" => Ok(ControlCommand::Watch(false)),
            _ => Err(ControlParseError::Usage("watch on|off")),
        },
        "translate" if !rest.is_empty() => Ok(ControlCommand::Translate(rest.to_string())),
        "translate" => Err(ControlParseError::Usage("translate <text>")),
        "read" => Ok(ControlCommand::Read),
        "status" => Ok(ControlCommand::Status),
        "help" => Ok(ControlCommand::Help),
        "quit" | "exit" => Ok(ControlCommand::Quit),
        other => Err(ControlParseError::Unknown(other.to_string())),
    }
}

/// Read commands until `quit` or end of input.
pub async fn run_control<R>(
    reader: R,
    controller: &DispatchController,
    commands: &PlatformCommandSender,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(ControlCommand::Quit) => break,
            Ok(command) => {
                if let Err(err) = execute(command, controller, commands).await {
                    eprintln!("error: {err:#}");
                }
            }
            Err(ControlParseError::Empty) => {}
            Err(err) => eprintln!("{err}"),
        }
    }
    debug!("Control channel closed");
    Ok(())
}

async fn execute(
    command: ControlCommand,
    controller: &DispatchController,
    commands: &PlatformCommandSender,
) -> anyhow::Result<()> {
    match command {
        ControlCommand::Set { key, value } => {
            controller.apply_rule_change(&key, value).await?;
        }
        ControlCommand::Watch(watching) => controller.set_watch(watching).await?,
        ControlCommand::Translate(text) => {
            let ticket = controller.translate(text);
            debug!(seq = ticket.seq(), "Direct translation issued");
        }
        ControlCommand::Read => commands.send(PlatformCommand::ReadClipboard).await?,
        ControlCommand::Status => {
            println!("{}", serde_json::to_string_pretty(&controller.snapshot())?)
        }
        ControlCommand::Help => println!("{HELP}"),
        ControlCommand::Quit => {}
    }
    Ok(())
}
