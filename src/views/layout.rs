pub const ACTIVE_CLASS: &str = "active-icon";

/// Navigation icons in the employee's vertical bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Bills list.
    Window,
    /// New bill.
    Mail,
}

impl Icon {
    pub const ALL: [Icon; 2] = [Icon::Window, Icon::Mail];

    pub fn test_id(self) -> &'static str {
        match self {
            Icon::Window => "icon-window",
            Icon::Mail => "icon-mail",
        }
    }

    fn element_id(self) -> &'static str {
        match self {
            Icon::Window => "layout-icon1",
            Icon::Mail => "layout-icon2",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Icon::Window => "<svg viewBox=\"0 0 24 24\" aria-hidden=\"true\"><rect x=\"3\" y=\"4\" width=\"18\" height=\"16\" rx=\"2\"/></svg>",
            Icon::Mail => "<svg viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path d=\"M3 6h18v12H3z M3 6l9 7 9-7\"/></svg>",
        }
    }
}

/// Vertical navigation bar. At most one icon carries the active class.
pub fn vertical_layout(active: Option<Icon>) -> String {
    let icons: Vec<String> = Icon::ALL
        .into_iter()
        .map(|icon| {
            let class = if Some(icon) == active {
                format!("layout-icon {ACTIVE_CLASS}")
            } else {
                "layout-icon".to_string()
            };
            format!(
                "<div id=\"{}\" class=\"{}\" data-testid=\"{}\">{}</div>",
                icon.element_id(),
                class,
                icon.test_id(),
                icon.glyph()
            )
        })
        .collect();
    format!(
        "<div class=\"vertical-navbar\">\n<div class=\"layout-title\"><span>Billed</span></div>\n{}\n\
         <div class=\"layout-disconnect\" id=\"layout-disconnect\" data-testid=\"layout-disconnect\">Se déconnecter</div>\n</div>",
        icons.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::screen;

    #[test]
    fn test_only_requested_icon_is_active() {
        let html = vertical_layout(Some(Icon::Mail));
        assert!(screen::get_by_test_id(&html, "icon-mail").has_class(ACTIVE_CLASS));
        assert!(!screen::get_by_test_id(&html, "icon-window").has_class(ACTIVE_CLASS));
        assert_eq!(html.matches(ACTIVE_CLASS).count(), 1);
    }

    #[test]
    fn test_no_active_icon() {
        let html = vertical_layout(None);
        assert!(!html.contains(ACTIVE_CLASS));
    }
}
