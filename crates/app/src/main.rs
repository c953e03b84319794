use engine::Engine;

mod error;
mod settings;

#[tokio::main]
async fn main() -> error::Result<()> {
    let settings = settings::Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pocketbook={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = Engine::builder().build();
    tracing::info!(currency = %engine.currency(), "engine ready with default budgets");

    let addr = settings.address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    if let Err(err) = server::run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
