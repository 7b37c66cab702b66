use expense_tracker_frontend::config::load_settings;
use expense_tracker_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(load_settings().log_level());
    yew::Renderer::<App>::new().render();
}
