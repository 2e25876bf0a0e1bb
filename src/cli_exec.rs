use anyhow::{Context, Result};

use capturoo::remote::ApiError;
use capturoo::session::Session;

use crate::output;
use crate::{
    AccountCommands, BucketCommands, CliContext, Commands, LeadCommands, TokenCommands,
    WebhookCommands,
};

mod account;
mod bucket;
mod dispatch;
mod lead;
mod token;
mod webhook;

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    dispatch::handle_command(ctx, command)
}
