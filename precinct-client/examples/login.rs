//! Sign in against a running identity service and print what the session grants
//!
//! ```text
//! PRECINCT_API_BASE_URL=http://localhost:8000/api \
//!     cargo run -p precinct-client --example login -- <identifier> <password>
//! ```
//!
//! Re-running without arguments resumes the stored session.

use precinct_client::logger::init_logger_with_filter;
use precinct_client::{
    AuthGateway, ClientConfig, FileCredentialStore, NetworkIdentityService, Permissions,
    RouteGuard, RouteRequirement, SessionStore, routes,
};
use shared::RoleName;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = ClientConfig::from_env();
    init_logger_with_filter(Some(&config.log_filter), false);

    let gateway = AuthGateway::new(
        NetworkIdentityService::new(&config)?,
        FileCredentialStore::new(&config.storage_dir),
        SessionStore::new(),
    );

    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(identifier), Some(password)) => {
            gateway.login(&identifier, &password).await?;
        }
        _ => {
            if !gateway.hydrate() {
                anyhow::bail!("no stored session; pass <identifier> <password>");
            }
            gateway.refresh_current_user().await?;
        }
    }

    let session = gateway.session().snapshot();
    let permissions = Permissions::new(&session);
    if let Some(user) = session.identity() {
        println!("Signed in as {} (#{})", user.display_name(), user.id);
        for role in &user.roles {
            println!("  role: {}", role.name);
        }
    }
    println!("Capabilities: {:?}", permissions.capabilities());

    let guard = RouteGuard::default();
    let board = RouteRequirement::any_of([RoleName::Detective]);
    println!(
        "{} -> {:?}",
        routes::DETECTIVE_BOARD,
        guard.evaluate(&session, routes::DETECTIVE_BOARD, &board)
    );

    Ok(())
}
