fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::warn!("console logger already set: {e}");
        }
        leptos::mount::mount_to_body(cercle_site::app::App);
    }
}
