use clap::{Args, Subcommand};

mod create;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Debug, Subcommand)]
enum SessionSubcommand {
    Create(create::CreateSessionArgs),
    Revoke(revoke::RevokeSessionArgs),
}

pub(crate) async fn run(command: SessionCommand) -> Result<(), String> {
    match command.command {
        SessionSubcommand::Create(args) => create::run(args).await,
        SessionSubcommand::Revoke(args) => revoke::run(args).await,
    }
}
