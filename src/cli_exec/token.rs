use super::account::print_identity;
use super::*;

pub(super) fn handle_token_command(session: &Session, command: TokenCommands) -> Result<()> {
    match command {
        TokenCommands::Show => {
            print_identity(&session.claims);
            println!("export JWT='{}'", session.tokens.id_token);
        }
    }
    Ok(())
}
