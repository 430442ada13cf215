//! Character sheet player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charsheet_player::config::PlayerConfig;
use charsheet_player::ports::outbound::PlatformPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "charsheet_player=debug,charsheet_domain=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting character sheet");

    let config = PlayerConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    // Platform
    let platform = charsheet_player::infrastructure::platform::create_platform(&config);
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Shell kind (desktop vs mobile layout)
    let shell = config.shell.unwrap_or_else(|| {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                charsheet_player::ShellKind::Mobile
            } else {
                charsheet_player::ShellKind::Desktop
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            charsheet_player::ShellKind::default()
        }
    });

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_sheet_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(config)
        .launch(charsheet_player::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_sheet_css() -> String {
    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/sheet.css");
    std::fs::read_to_string(&css_path).unwrap_or_else(|e| {
        tracing::warn!("Failed to read {}: {}", css_path.display(), e);
        String::new()
    })
}
