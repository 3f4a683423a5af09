use std::time::Duration;

use components::logger::Logs;
use dioxus::signals::{GlobalSignal, Signal};

pub mod components;

/// Period of the simulation loop (60 Hz)
pub const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

static THINLENS_UI_LOGS: GlobalSignal<Logs> = Signal::global(Logs::new);
