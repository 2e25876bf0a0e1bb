use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AccountCommands {
    /// Log in with a developer key (default) or email and password
    Login {
        /// Use email address and password instead of a developer key
        #[arg(short = 'e', long)]
        email: bool,
    },

    /// Show the logged-in account
    Info {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the stored tokens for this endpoint
    Logout,
}
