//! Browser entry point. Build with `--features csr` (e.g. `trunk serve`).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();

        // Ignore the error if a logger was already installed.
        drop(console_log::init_with_level(log::Level::Debug));

        log::info!("kheti client starting");
        leptos::mount::mount_to_body(kheti::app::App);
    }
}
