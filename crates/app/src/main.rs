use clap::Parser;

mod settings;

/// Personal budget tracker HTTP server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Settings file, without extension.
    #[arg(long, env = "BUDGET_CONFIG", default_value = "settings")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let settings = settings::Settings::new(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "budget_tracker={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let options = settings.server;
    let engine = match engine::Engine::builder()
        .data_dir(&options.data_dir)
        .capacity(options.history_capacity)
        .build()
        .await
    {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to open budget history: {err}");
            return Err(err.into());
        }
    };

    let addr = format!("{}:{}", options.bind, options.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    let state = server::ServerState::new(engine).recent_limit(options.recent_limit);
    server::run_with_listener(state, listener).await?;

    Ok(())
}
