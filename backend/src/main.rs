use poll_server::{build_rocket, config::PollConfig};
use rocket::{launch, Build, Rocket};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("poll_server=info,poll_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[launch]
fn rocket() -> Rocket<Build> {
    init_tracing();
    info!("🚀 Starting poll server");

    let rocket = rocket::build();
    let config = PollConfig::from_figment(rocket.figment());
    build_rocket(rocket, config)
}
