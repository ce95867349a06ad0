use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names used by the renderer.
pub mod names {
    pub const HEADER: &str = "header";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const AVAILABLE: &str = "available";
    pub const CHECKED_OUT: &str = "checked_out";
    pub const RESERVED: &str = "reserved";
    pub const MAINTENANCE: &str = "maintenance";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Applies the named style. `use_color: None` follows terminal detection.
    pub fn apply(&self, name: &str, text: &str, use_color: Option<bool>) -> String {
        let style = self.styles.get(name).cloned().unwrap_or_else(Style::new);
        let style = match use_color {
            Some(force) => style.force_styling(force),
            None => style.for_stdout(),
        };
        style.apply_to(text).to_string()
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::ID, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::MUTED, Style::new().dim())
        .add(names::AVAILABLE, Style::new().green())
        .add(names::CHECKED_OUT, Style::new().red())
        .add(names::RESERVED, Style::new().yellow())
        .add(names::MAINTENANCE, Style::new().magenta())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
