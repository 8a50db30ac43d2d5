//! UI-Komponenten: Menü, Assistent, Karten-Canvas, Input-Handling, Dialoge.

mod booking_panel;
pub mod input;
mod keyboard;
pub mod map_canvas;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod tracking_page;
pub mod wizard;

pub use input::InputState;
pub use map_canvas::render_map_canvas;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use tracking_page::render_tracking_panel;
pub use wizard::render_wizard_panel;
