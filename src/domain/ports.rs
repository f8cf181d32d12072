/// Attribute the dashboard templates put on elements holding a raw timestamp.
pub const TIMESTAMP_ATTRIBUTE: &str = "data-timestamp";

/// Settings a `Formatter` is built from (CLI flags, a TOML file, or the host app).
pub trait FormatSettings: Send + Sync {
    /// Locale tag such as `de-DE`; `None` means detect from the environment.
    fn locale_tag(&self) -> Option<&str>;
    /// `local`, `utc` or `±HH:MM`; `None` means `local`.
    fn timezone(&self) -> Option<&str>;
    fn byte_decimals(&self) -> i32;
}

/// A page element whose text shows a timestamp.
///
/// The host application implements this over whatever element handle it has;
/// the formatter only reads the raw attribute and writes text back.
pub trait TimestampElement {
    fn timestamp_attribute(&self) -> Option<&str>;
    fn set_text(&mut self, text: String);
}

/// Plain in-memory element, handy for server-side rendering and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampCell {
    pub timestamp: Option<String>,
    pub text: String,
}

impl TimestampCell {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            text: String::new(),
        }
    }
}

impl TimestampElement for TimestampCell {
    fn timestamp_attribute(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
