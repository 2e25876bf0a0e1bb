use std::io::BufRead;

use capturoo::credentials::{self, SessionClaims, TokenPair};

use super::*;

pub(super) fn handle_login_command(ctx: &CliContext, use_email: bool) -> Result<()> {
    let autoconf = ctx
        .client
        .autoconf()
        .context("failed to fetch identity configuration")?;
    let api_key = autoconf.api_key();

    let tokens: TokenPair = if use_email {
        let (email, password) = prompt_email_password()?;
        ctx.identity
            .sign_in_with_password(api_key, &email, &password)
            .context("failed to sign in with email and password")?
            .token_pair()
    } else {
        let developer_key = rpassword::prompt_password("Developer key: ")
            .context("failed to read developer key")?;
        let signin = ctx
            .client
            .sign_in_with_developer_key(developer_key.trim())
            .context("failed to sign in using developer key")?;
        tracing::debug!(account = %signin.account.account_id, "developer key accepted");
        ctx.identity
            .exchange_custom_token(api_key, &signin.custom_token)
            .context("failed to exchange custom token")?
    };

    ctx.store
        .save(&ctx.config.token_filename, &tokens)
        .context("failed to save tokens")?;
    let claims = credentials::decode_claims(&tokens.id_token).context("failed to parse token")?;

    println!("Command line tool setup for the following user:");
    print_identity(&claims);
    Ok(())
}

pub(super) fn handle_logout_command(ctx: &CliContext) -> Result<()> {
    let removed = ctx.store.remove(&ctx.config.token_filename)?;
    if removed {
        println!("Logged out of {}", ctx.config.endpoint);
    } else {
        println!("Not logged in to {}", ctx.config.endpoint);
    }
    Ok(())
}

pub(super) fn handle_account_command(session: &Session, command: AccountCommands) -> Result<()> {
    match command {
        AccountCommands::Info { json } => {
            if json {
                return output::print_json(&session.claims, "account");
            }
            let c = &session.claims;
            output::print_fields(&[
                ("Name:", c.name.clone()),
                ("Email:", c.email.clone()),
                ("Account ID:", c.account_id.clone()),
                ("Role:", c.role.clone()),
                ("User ID:", c.user_id.clone()),
                ("Issued:", output::unix_timestamp(c.issued_at)),
                ("Expires:", output::unix_timestamp(c.expires_at)),
            ])
        }
        AccountCommands::Login { .. } | AccountCommands::Logout => {
            anyhow::bail!("account login and logout run without a session")
        }
    }
}

pub(super) fn print_identity(claims: &SessionClaims) {
    println!("Name: {}", claims.name);
    println!("Email: {}", claims.email);
    println!("Account ID: {}", claims.account_id);
    println!("Role: {}", claims.role);
}

fn prompt_email_password() -> Result<(String, String)> {
    eprint!("Email: ");
    let mut email = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut email)
        .context("failed to read email")?;
    let email = email.trim().to_string();
    if email.is_empty() {
        anyhow::bail!("email is required");
    }
    let password = rpassword::prompt_password("Password: ").context("failed to read password")?;
    Ok((email, password))
}
