mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod output;

pub(crate) use cli_commands::*;
pub(crate) use cli_runtime::CliContext;

fn main() {
    if let Err(err) = cli_runtime::run() {
        if let Some(kind) = capturoo::error::classify(&err) {
            tracing::debug!(%kind, "command failed");
        }
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
