use user_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let state = AppState::new(config.clone(), MemoryStore::new());
    let app = routes(state);

    Server::new(config).serve(app).await
}
