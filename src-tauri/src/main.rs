// CraftStash - desktop inventory manager for craft supplies
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "craftstash=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CraftStash application");

    use craftstash::commands;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            craftstash::app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::login,
            commands::logout,
            commands::current_user,
            commands::create_supply,
            commands::get_supply,
            commands::update_supply,
            commands::delete_supply,
            commands::get_form_options,
            commands::get_view_state,
            commands::query_supplies,
            commands::set_search,
            commands::apply_sort_filter,
            commands::clear_filters,
            commands::set_page,
            commands::next_page,
            commands::prev_page,
            commands::set_page_size,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("The CraftStash desktop binary requires the 'tauri' feature.");
    eprintln!("Build with: cargo build --features tauri");
    std::process::exit(1);
}
