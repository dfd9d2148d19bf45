//! Character builder client - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charbuild_player::infrastructure::HttpCharacterStore;
use charbuild_player::ports::outbound::CharacterStorePort;
use charbuild_player::presentation::Services;
use charbuild_player::PlayerConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        charbuild_player::config::load_dotenv_from_repo_root();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "charbuild_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Character Builder");

    let config = PlayerConfig::from_env();
    tracing::info!(
        api_base_url = %config.api_base_url,
        owner = %config.owner,
        "Using character store"
    );

    let store: Arc<dyn CharacterStorePort> = Arc::new(HttpCharacterStore::from_config(&config));

    dioxus::LaunchBuilder::new()
        .with_context(Services::new(store))
        .launch(charbuild_player::ui::app);
}
