use label_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    label_server::setup_environment();

    label_server::print_banner();

    tracing::info!("QiCha label server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Build service state
    let state = ServerState::initialize(&config);

    // 4. Run the webhook listener
    let server = Server::with_state(config, state);
    server.run().await
}
