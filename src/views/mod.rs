//! HTML templates. Every element tests or callers need to find carries a
//! `data-testid` attribute.

pub mod bills;
pub mod layout;
pub mod login;
pub mod new_bill;
#[cfg(test)]
pub mod screen;

pub use bills::bills_ui;
pub use layout::{vertical_layout, Icon};
pub use login::login_ui;
pub use new_bill::{new_bill_ui, render_new_bill};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the employee layout with `active` highlighted.
pub fn with_layout(active: Icon, title: &str, body: &str) -> String {
    format!(
        "<div class=\"layout\">\n{}\n<div class=\"content\">\n\
         <div class=\"content-header\"><div class=\"content-title\">{}</div></div>\n{}\n</div>\n</div>",
        vertical_layout(Some(active)),
        escape_html(title),
        body
    )
}
