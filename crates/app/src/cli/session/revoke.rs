use clap::Args;
use platter_app::{
    auth::{PgAuthService, SessionUuid},
    database,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RevokeSessionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Session UUID to revoke
    #[arg(long)]
    session_uuid: Uuid,
}

pub(crate) async fn run(args: RevokeSessionArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let revoked = PgAuthService::new(pool)
        .revoke_session(SessionUuid::from_uuid(args.session_uuid))
        .await
        .map(|session| session.is_some())
        .map_err(|error| format!("failed to revoke session: {error}"))?;

    if revoked {
        println!("revoked session {}", args.session_uuid);
    } else {
        println!("session {} was not active", args.session_uuid);
    }

    Ok(())
}
