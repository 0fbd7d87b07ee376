//! CSR entry point: mounts the app into the document body.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("rosterdesk starting");
        leptos::mount::mount_to_body(rosterdesk::app::App);
    }
}
