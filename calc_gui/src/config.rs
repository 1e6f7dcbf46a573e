//! Application configuration
//!
//! Window geometry, layout constants, and logging setup. Nothing is read from
//! disk; the only runtime knob is `RUST_LOG`.

use iced::{window, Size};

use calc_core::keypad::DEFAULT_COLUMNS;

/// Window and heading title
pub const WINDOW_TITLE: &str = "Calculator";

/// Initial window size (width, height)
pub const WINDOW_SIZE: (f32, f32) = (400.0, 600.0);

/// Smallest window that still fits the full keypad
pub const MIN_WINDOW_SIZE: (f32, f32) = (300.0, 480.0);

/// Maximum width of the calculator card
pub const CONTENT_MAX_WIDTH: f32 = 448.0;

/// Number of keypad columns
pub const GRID_COLUMNS: usize = DEFAULT_COLUMNS;

/// Log filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "calc_gui=info,calc_core=info";

/// Build the main window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
        min_size: Some(Size::new(MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1)),
        ..window::Settings::default()
    }
}

/// Install the global tracing subscriber
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be set (e.g. by a test harness)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Route panics to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
}
