fn main() {
    // The Tauri context is only generated for desktop builds; headless
    // library/test builds skip it entirely.
    if std::env::var_os("CARGO_FEATURE_TAURI").is_some() {
        tauri_build::build();
    }
}
