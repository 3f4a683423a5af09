#![windows_subsystem = "windows"]
use dioxus::prelude::*;
use env_logger::Env;
use log::{info, SetLoggerError};
use thinlens_gui::components::app::App;

const MAIN_CSS: &str = include_str!("../assets/main.css");

/// Route the `log` records of the thinlens library to stderr (filter via `RUST_LOG`).
fn init_logger() -> Result<(), SetLoggerError> {
    env_logger::try_init_from_env(Env::default().default_filter_or("info"))
}

fn main() {
    if let Err(e) = init_logger() {
        eprintln!("logging disabled: {e}");
    }
    info!("starting thinlens GUI");
    #[cfg(feature = "desktop")]
    fn launch_app() {
        let window = dioxus::desktop::WindowBuilder::new()
            .with_title("Thin Lens Imaging")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1040.0, 900.0))
            .with_resizable(true);
        dioxus::LaunchBuilder::new()
            .with_cfg(dioxus::desktop::Config::new().with_window(window))
            .launch(app);
    }
    #[cfg(not(feature = "desktop"))]
    fn launch_app() {
        dioxus::launch(app);
    }
    launch_app();
}

#[component]
fn app() -> Element {
    rsx! {
        style { "{MAIN_CSS}" }
        App {}
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn logger_installed_once() {
        assert!(init_logger().is_ok());
        assert!(init_logger().is_err());
    }
}
