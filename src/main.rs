use anyhow::Context;
use unlocker::{app, cli::options_from_args, config::Config, logging::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let options = options_from_args()?;
    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "failed to load config from {}",
            options.config_path.display()
        )
    })?;
    let _logging_guard = init_tracing(&config.logging)?;

    app::run(config, &options).await
}
