use dioxus::prelude::*;
use darkmode::views::DarkMode;
use darkmode::theme::platform_theme;
use darkmode::ThemeConfig;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger setup failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    // Resolved while the hook is created, so the first render already has it.
    let (handle, theme) = use_hook(|| platform_theme(&config));
    use_context_provider(|| handle.clone());
    use_context_provider(|| theme);

    use_drop(move || handle.teardown());

    rsx! {
        div {
            class: theme().root_class(&config.dark_class).to_string(),
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            DarkMode {}
        }
    }
}

fn load_config() -> ThemeConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemeConfig::from_env()
    }

    #[cfg(target_arch = "wasm32")]
    {
        ThemeConfig::default()
    }
}
