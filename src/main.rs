//! Browser entry point: installs the panic hook, wires console logging, and
//! mounts the root [`App`](jobtrack_ui::app::App) component.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(jobtrack_ui::app::App);
    }
}
