mod error_alert;
mod fortune_button;
mod fortune_display;
mod history_download;
mod loading_icon;
mod nickname_input;
mod option_select;
mod recent_fortunes;
pub mod notice;

pub use error_alert::*;
pub use fortune_button::*;
pub use fortune_display::*;
pub use history_download::*;
pub use loading_icon::*;
pub use nickname_input::*;
pub use option_select::*;
pub use recent_fortunes::*;
