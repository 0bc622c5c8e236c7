pub mod format;
pub mod html;

pub use format::{format_megabytes, format_percentage, Locale};
pub use html::{render_report, RenderOptions};
