use std::io::Write;

use color_eyre::eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::repl::{parse_line, ReplCommand};
use super::{Cli, Command, DEFAULT_URL};
use crate::client::{render_list, ClientError, ClientShell, GrpcTransport};
use crate::user_config::UserConfig;

/// Pick the daemon URL: flag or env first, then user config, then the default.
#[must_use]
pub fn resolve_url(flag: Option<String>, config: &UserConfig) -> String {
    flag.or_else(|| config.client.url.clone())
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

/// `None` when no words were given, so the current value is kept.
fn joined(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

pub async fn run(cli: Cli, config: &UserConfig) -> Result<()> {
    let url = resolve_url(cli.url, config);
    debug!("Using daemon at {url}");
    let transport = GrpcTransport::connect_lazy(url)?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => interactive(ClientShell::new(transport)).await,
        Command::Info => {
            let mut transport = transport;
            let info = transport.daemon_info().await?;
            println!("version:    {}", info.version);
            println!("binary:     {}", info.binary_path);
            println!("item count: {}", info.item_count);
            Ok(())
        }
        Command::Shutdown { delay } => {
            let mut transport = transport;
            let seconds = u32::try_from(delay.as_secs()).unwrap_or(u32::MAX);
            let response = transport.shutdown(seconds).await?;
            println!("{}", response.message);
            Ok(())
        }
        command => one_shot(ClientShell::new(transport), command).await,
    }
}

/// Load, apply a single command, print the resulting list.
async fn one_shot(mut shell: ClientShell<GrpcTransport>, command: Command) -> Result<()> {
    shell.load().await?;
    let result = match command {
        Command::Add {
            text,
            description,
            due,
        } => shell.add_item(&text.join(" "), &description, &due).await,
        Command::Edit {
            id,
            text,
            description,
            due,
        } => {
            let text = joined(&text);
            shell
                .edit_item(id, text.as_deref(), description.as_deref(), due.as_deref())
                .await
        }
        Command::Delete { id } => shell.delete_item(id).await,
        Command::Done { id } => shell.complete_item(id).await,
        Command::List | Command::Shell | Command::Info | Command::Shutdown { .. } => Ok(()),
    };
    if result.is_err() {
        // The error itself is reported by the caller
        shell.state_mut().dismiss_notification();
    }
    print!("{}", render_list(shell.state()));
    result.map_err(Into::into)
}

async fn apply(shell: &mut ClientShell<GrpcTransport>, command: ReplCommand) -> Result<(), ClientError> {
    match command {
        ReplCommand::List => shell.refresh().await,
        ReplCommand::Add {
            text,
            description,
            due,
        } => shell.add_item(&text.join(" "), &description, &due).await,
        ReplCommand::Edit {
            id,
            text,
            description,
            due,
        } => {
            let text = joined(&text);
            shell
                .edit_item(id, text.as_deref(), description.as_deref(), due.as_deref())
                .await
        }
        ReplCommand::Delete { id } => shell.delete_item(id).await,
        ReplCommand::Done { id } => shell.complete_item(id).await,
        ReplCommand::Dismiss => {
            shell.state_mut().dismiss_notification();
            Ok(())
        }
        ReplCommand::Quit => Ok(()),
    }
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

/// Read commands from stdin until `quit` or end of input.
///
/// Failed actions are shown as notifications and never end the loop.
async fn interactive(mut shell: ClientShell<GrpcTransport>) -> Result<()> {
    // Load failures are already recorded as a notification
    let _ = shell.load().await;
    print!("{}", render_list(shell.state()));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                print!("{usage}");
                continue;
            }
        };
        if command == ReplCommand::Quit {
            break;
        }
        if let Err(e) = apply(&mut shell, command).await {
            debug!("Action failed: {e}");
        }
        print!("{}", render_list(shell.state()));
    }
    Ok(())
}
