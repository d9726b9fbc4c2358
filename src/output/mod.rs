//! HTML output formatting
//!
//! - `escape` - HTML entity escaping for display names
//! - `html` - Heading-plus-list renderer for directory groups

mod escape;
mod html;

pub use escape::escape_html;
pub use html::{HtmlRenderer, render_html};
