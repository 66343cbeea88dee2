use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod book;
mod config;
mod detail;
mod home;
mod icons;

use crate::app::App;

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estante=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config();
    tracing::info!(
        api_base_url = %config.api_base_url,
        variant = ?config.variant,
        "starting estante"
    );

    iced::application("Estante", App::update, App::view)
        .theme(App::theme)
        .window_size((420.0, 780.0))
        .run_with(move || App::new(config))
}
