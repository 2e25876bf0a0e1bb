use super::account::{handle_account_command, handle_login_command, handle_logout_command};
use super::bucket::handle_bucket_command;
use super::lead::handle_lead_command;
use super::token::handle_token_command;
use super::webhook::handle_webhook_command;
use super::*;

/// Login, logout and version run without a session; everything else
/// bootstraps one first.
pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Version => {
            println!("{}", capturoo::config::version_string());
            Ok(())
        }
        Commands::Account {
            command: AccountCommands::Login { email },
        } => handle_login_command(ctx, email),
        Commands::Account {
            command: AccountCommands::Logout,
        } => handle_logout_command(ctx),
        Commands::Account { command } => handle_account_command(&ctx.session()?, command),
        Commands::Bucket { command } => handle_bucket_command(&ctx.session()?, command),
        Commands::Lead { command } => handle_lead_command(&ctx.session()?, command),
        Commands::Webhook { command } => handle_webhook_command(&ctx.session()?, command),
        Commands::Token { command } => handle_token_command(&ctx.session()?, command),
    }
}
