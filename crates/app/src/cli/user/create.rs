use clap::Args;
use platter_app::{
    auth::PgAuthService,
    database::{self, Db},
    domain::users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Email address, unique regardless of case
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional user UUID; generated when omitted
    #[arg(long)]
    user_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let users = PgUsersService::new(Db::new(pool.clone()));
    let auth = PgAuthService::new(pool);

    let user = users
        .create_user(NewUser {
            uuid: args
                .user_uuid
                .map_or_else(UserUuid::new, UserUuid::from_uuid),
            name: args.name,
            email: args.email,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    let issued = auth
        .issue_session(user.uuid, None)
        .await
        .map_err(|error| format!("failed to issue session: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_name: {}", user.name);
    println!("user_email: {}", user.email);
    println!("session_uuid: {}", issued.metadata.uuid);
    println!("session_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
