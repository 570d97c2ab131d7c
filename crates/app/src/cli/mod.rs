use clap::{Parser, Subcommand};

mod db;
mod session;
mod user;

#[derive(Debug, Parser)]
#[command(name = "platter-app", about = "Platter CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Session(session::SessionCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Session(command) => session::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
