mod toolbar;
mod map_panel;
mod legend;
mod subplot;
mod help_dialog;
mod screens;

pub use toolbar::{render_status_bar, render_toolbar};
pub use map_panel::render_map;
pub use legend::render_legend;
pub use subplot::render_subplot;
pub use help_dialog::render_help_dialog;
pub use screens::{render_fatal_error, render_loading};
