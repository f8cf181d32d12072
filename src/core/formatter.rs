use crate::core::bytes::{format_bytes, DEFAULT_BYTE_DECIMALS};
use crate::core::currency::format_currency;
use crate::core::duration::format_duration;
use crate::core::locale::Locale;
use crate::core::number::format_number;
use crate::core::timestamp::format_timestamp;
use crate::domain::model::{FormatOutcome, FormatRequest, RenderSummary, TimeZoneSetting};
use crate::domain::ports::{FormatSettings, TimestampElement};
use crate::utils::error::Result;

/// The display formatter bound to one locale, zone and byte precision.
///
/// Built once by the hosting application (after its page or view is ready)
/// and shared freely afterwards; every method is a pure function of its input.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatter {
    locale: Locale,
    zone: TimeZoneSetting,
    byte_decimals: i32,
}

impl Formatter {
    pub fn new<S: FormatSettings + ?Sized>(settings: &S) -> Result<Self> {
        let locale = match settings.locale_tag() {
            Some(tag) => Locale::from_tag(tag),
            None => Locale::detect(),
        };
        let zone = match settings.timezone() {
            Some(raw) => raw.parse()?,
            None => TimeZoneSetting::Local,
        };

        tracing::debug!(
            "Formatter initialized: locale={}, timezone={}, byte_decimals={}",
            locale,
            zone,
            settings.byte_decimals()
        );

        Ok(Self {
            locale,
            zone,
            byte_decimals: settings.byte_decimals(),
        })
    }

    pub fn with_locale(locale: Locale, zone: TimeZoneSetting) -> Self {
        Self {
            locale,
            zone,
            byte_decimals: DEFAULT_BYTE_DECIMALS,
        }
    }

    pub fn byte_decimals(mut self, decimals: i32) -> Self {
        self.byte_decimals = decimals;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn zone(&self) -> &TimeZoneSetting {
        &self.zone
    }

    pub fn bytes(&self, bytes: f64) -> Result<String> {
        format_bytes(bytes, self.byte_decimals)
    }

    pub fn bytes_with(&self, bytes: f64, decimals: i32) -> Result<String> {
        format_bytes(bytes, decimals)
    }

    pub fn duration(&self, seconds: f64) -> Result<String> {
        format_duration(seconds)
    }

    pub fn currency(&self, value: f64) -> Result<String> {
        format_currency(value)
    }

    pub fn number(&self, value: f64) -> Result<String> {
        format_number(value, &self.locale)
    }

    pub fn timestamp(&self, raw: &str) -> Result<String> {
        format_timestamp(raw, &self.locale, &self.zone)
    }

    pub fn apply(&self, request: &FormatRequest) -> Result<String> {
        match request {
            FormatRequest::Bytes { value, decimals } => {
                self.bytes_with(*value, decimals.unwrap_or(self.byte_decimals))
            }
            FormatRequest::Duration { value } => self.duration(*value),
            FormatRequest::Currency { value } => self.currency(*value),
            FormatRequest::Number { value } => self.number(*value),
            FormatRequest::Timestamp { value } => self.timestamp(value),
        }
    }

    /// Formats every request; one bad entry does not stop the rest.
    pub fn apply_all(&self, requests: &[FormatRequest]) -> Vec<FormatOutcome> {
        requests
            .iter()
            .map(|request| {
                let result = self.apply(request);
                if let Err(e) = &result {
                    tracing::debug!("Batch entry ({}) failed: {}", request.kind(), e);
                }
                FormatOutcome::from_result(request.clone(), result)
            })
            .collect()
    }

    /// Rewrites the text of every element carrying a timestamp attribute.
    ///
    /// Elements without the attribute (or with an empty one) are skipped.
    /// Unparseable values are logged and left as they were.
    pub fn render_timestamps<E: TimestampElement>(&self, elements: &mut [E]) -> RenderSummary {
        let mut summary = RenderSummary::default();

        for element in elements.iter_mut() {
            let raw = match element.timestamp_attribute() {
                Some(raw) if !raw.trim().is_empty() => raw.to_string(),
                _ => {
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.timestamp(&raw) {
                Ok(text) => {
                    element.set_text(text);
                    summary.rendered += 1;
                }
                Err(e) => {
                    tracing::warn!("Leaving timestamp '{}' unformatted: {}", raw, e);
                    summary.failed += 1;
                }
            }
        }

        tracing::debug!(
            "Timestamps rendered: {}, skipped: {}, failed: {}",
            summary.rendered,
            summary.skipped,
            summary.failed
        );
        summary
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::with_locale(Locale::default(), TimeZoneSetting::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::EN_US;
    use crate::domain::ports::TimestampCell;

    struct FixedSettings {
        locale: Option<&'static str>,
        timezone: Option<&'static str>,
        decimals: i32,
    }

    impl FormatSettings for FixedSettings {
        fn locale_tag(&self) -> Option<&str> {
            self.locale
        }

        fn timezone(&self) -> Option<&str> {
            self.timezone
        }

        fn byte_decimals(&self) -> i32 {
            self.decimals
        }
    }

    fn utc_formatter() -> Formatter {
        Formatter::with_locale(EN_US, TimeZoneSetting::Utc)
    }

    #[test]
    fn test_new_from_settings() {
        let settings = FixedSettings {
            locale: Some("de_DE.UTF-8"),
            timezone: Some("utc"),
            decimals: 1,
        };
        let formatter = Formatter::new(&settings).unwrap();

        assert_eq!(formatter.locale().tag, "de-DE");
        assert_eq!(formatter.zone(), &TimeZoneSetting::Utc);
        assert_eq!(formatter.bytes(1234.0).unwrap(), "1.2 KB");
        assert_eq!(formatter.number(1234.5).unwrap(), "1.234,5");
    }

    #[test]
    fn test_new_rejects_bad_timezone() {
        let settings = FixedSettings {
            locale: Some("en-US"),
            timezone: Some("somewhere"),
            decimals: 2,
        };
        assert!(Formatter::new(&settings).is_err());
    }

    #[test]
    fn test_apply_dispatches_by_kind() {
        let formatter = utc_formatter();
        let cases = [
            (FormatRequest::Bytes { value: 1536.0, decimals: None }, "1.5 KB"),
            (FormatRequest::Bytes { value: 1536.0, decimals: Some(0) }, "2 KB"),
            (FormatRequest::Duration { value: 3661.0 }, "1h 1m 1s"),
            (FormatRequest::Currency { value: 1_000_000.0 }, "$1.00M"),
            (FormatRequest::Number { value: 1234567.0 }, "1,234,567"),
            (
                FormatRequest::Timestamp { value: "2024-01-02T15:04:05Z".to_string() },
                "1/2/2024, 3:04:05 PM",
            ),
        ];

        for (request, expected) in cases {
            assert_eq!(formatter.apply(&request).unwrap(), expected, "{:?}", request);
        }
    }

    #[test]
    fn test_byte_decimals_builder() {
        let formatter = utc_formatter().byte_decimals(0);
        assert_eq!(formatter.bytes(1234.0).unwrap(), "1 KB");
        assert_eq!(formatter.bytes_with(1234.0, 3).unwrap(), "1.205 KB");
    }

    #[test]
    fn test_apply_all_keeps_going_after_errors() {
        let formatter = utc_formatter();
        let requests = vec![
            FormatRequest::Bytes { value: -5.0, decimals: None },
            FormatRequest::Currency { value: 999.0 },
        ];

        let outcomes = formatter.apply_all(&requests);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_ok());
        assert!(outcomes[0].error.as_ref().unwrap().contains("bytes"));
        assert_eq!(outcomes[1].output.as_deref(), Some("$999.00"));
    }

    #[test]
    fn test_apply_all_isolates_oversized_decimals() {
        let formatter = utc_formatter();
        let requests = vec![
            FormatRequest::Bytes { value: 1536.0, decimals: Some(70_000) },
            FormatRequest::Number { value: 1234.5 },
        ];

        let outcomes = formatter.apply_all(&requests);
        assert!(outcomes[0].error.as_ref().unwrap().contains("decimals"));
        assert_eq!(outcomes[1].output.as_deref(), Some("1,234.5"));
    }

    #[test]
    fn test_render_timestamps() {
        let formatter = utc_formatter();
        let mut cells = vec![
            TimestampCell::new("2024-01-02T15:04:05Z"),
            TimestampCell::default(),
            TimestampCell {
                timestamp: Some("not a date".to_string()),
                text: "not a date".to_string(),
            },
            TimestampCell::new("  "),
        ];

        let summary = formatter.render_timestamps(&mut cells);

        assert_eq!(
            summary,
            RenderSummary {
                rendered: 1,
                skipped: 2,
                failed: 1
            }
        );
        assert_eq!(cells[0].text, "1/2/2024, 3:04:05 PM");
        assert_eq!(cells[1].text, "");
        assert_eq!(cells[2].text, "not a date");
    }
}
