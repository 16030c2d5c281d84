use std::sync::Arc;

use registro_bot::{
    bot::{self, state::BotState},
    config::Config,
    error::AppError,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_if_configured(&config).await;
    let state = Arc::new(BotState::new(&config, db));

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
