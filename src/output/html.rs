//! HTML fragment rendering
//!
//! Each group becomes an `<h3>` heading followed by a `<ul>` block. The
//! layout is byte-exact because the result is pasted as-is into a CMS.

use tracing::debug;

use crate::tree::DirectoryGroup;

use super::escape::escape_html;

/// Prefix before every `<li>` line: one space, one tab.
const ITEM_INDENT: &str = " \t";

/// Accumulates the HTML fragment for a sequence of groups.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one heading and its file list.
    pub fn render_group(&mut self, group: &DirectoryGroup) {
        self.output.push_str("<h3>");
        self.output.push_str(&escape_html(&group.name));
        self.output.push_str("</h3>\n");

        self.output.push_str("<ul>\n");
        for file in &group.files {
            self.output.push_str(ITEM_INDENT);
            self.output.push_str("<li>");
            self.output.push_str(&escape_html(file));
            self.output.push_str("</li>\n");
        }
        self.output.push_str("</ul>\n");
    }

    /// Get the rendered text so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take ownership of the rendered text.
    pub fn into_output(self) -> String {
        self.output
    }
}

/// Render all groups in order into one fragment.
pub fn render_html(groups: &[DirectoryGroup]) -> String {
    let mut renderer = HtmlRenderer::new();
    for group in groups {
        renderer.render_group(group);
    }
    debug!(
        groups = groups.len(),
        bytes = renderer.output().len(),
        "rendered html"
    );
    renderer.into_output()
}
