//! Locale conventions used by number and timestamp rendering.
//!
//! Only the pieces the dashboard needs are modelled: the grouping and decimal
//! separators, the grouping shape and a `chrono` pattern that mirrors what a
//! browser prints for `Date::toLocaleString` in that locale.

/// How the integer part of a number is split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Standard,
    /// 12,34,567: the last three digits, then pairs.
    Indian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub grouping: Grouping,
    /// Grouping starts once the leading group would hold at least this many digits.
    pub min_grouping_digits: usize,
    pub date_time_pattern: &'static str,
}

const fn locale(
    tag: &'static str,
    group_separator: &'static str,
    decimal_separator: &'static str,
    date_time_pattern: &'static str,
) -> Locale {
    Locale {
        tag,
        group_separator,
        decimal_separator,
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        date_time_pattern,
    }
}

pub const EN_US: Locale = locale("en-US", ",", ".", "%-m/%-d/%Y, %-I:%M:%S %p");

// 第一個同語言的條目即為該語言的預設地區
const BUILTIN: &[Locale] = &[
    EN_US,
    locale("en-GB", ",", ".", "%d/%m/%Y, %H:%M:%S"),
    Locale {
        grouping: Grouping::Indian,
        ..locale("en-IN", ",", ".", "%-d/%-m/%Y, %-I:%M:%S %P")
    },
    locale("de-DE", ".", ",", "%-d.%-m.%Y, %H:%M:%S"),
    locale("de-CH", "\u{2019}", ".", "%-d.%-m.%Y, %H:%M:%S"),
    locale("fr-FR", "\u{202f}", ",", "%d/%m/%Y %H:%M:%S"),
    Locale {
        min_grouping_digits: 2,
        ..locale("es-ES", ".", ",", "%-d/%-m/%Y, %-H:%M:%S")
    },
    locale("it-IT", ".", ",", "%-d/%-m/%Y, %H:%M:%S"),
    locale("pt-BR", ".", ",", "%d/%m/%Y, %H:%M:%S"),
    locale("nl-NL", ".", ",", "%-d-%-m-%Y, %H:%M:%S"),
    locale("ru-RU", "\u{a0}", ",", "%d.%m.%Y, %H:%M:%S"),
    Locale {
        min_grouping_digits: 2,
        ..locale("pl-PL", "\u{a0}", ",", "%-d.%m.%Y, %H:%M:%S")
    },
    locale("sv-SE", "\u{a0}", ",", "%Y-%m-%d %H:%M:%S"),
    locale("ja-JP", ",", ".", "%Y/%-m/%-d %-H:%M:%S"),
    locale("zh-CN", ",", ".", "%Y/%-m/%-d %H:%M:%S"),
];

/// Environment variables consulted by [`Locale::detect`], highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

impl Locale {
    pub fn builtin() -> &'static [Locale] {
        BUILTIN
    }

    /// Exact tag match first, then the first locale sharing the language.
    pub fn lookup(tag: &str) -> Option<Locale> {
        let normalized = normalize_tag(tag)?;
        if let Some(found) = BUILTIN.iter().find(|l| l.tag == normalized) {
            return Some(*found);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        BUILTIN
            .iter()
            .find(|l| l.language() == language)
            .copied()
    }

    /// Like [`Locale::lookup`] but never fails: unknown tags resolve to `en-US`.
    pub fn from_tag(tag: &str) -> Locale {
        Self::lookup(tag).unwrap_or_else(|| {
            tracing::debug!("Unknown locale '{}', falling back to {}", tag, EN_US.tag);
            EN_US
        })
    }

    /// Reads the host locale from `LC_ALL`, `LC_NUMERIC`, then `LANG`.
    pub fn detect() -> Locale {
        Self::detect_from(|name| std::env::var(name).ok())
    }

    pub fn detect_from<F>(mut read_var: F) -> Locale
    where
        F: FnMut(&str) -> Option<String>,
    {
        for name in LOCALE_ENV_VARS {
            if let Some(value) = read_var(name).filter(|v| !v.trim().is_empty()) {
                let resolved = Self::from_tag(&value);
                tracing::debug!("Locale {} resolved from {}={}", resolved.tag, name, value);
                return resolved;
            }
        }
        EN_US
    }

    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}

impl Default for Locale {
    fn default() -> Self {
        EN_US
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag)
    }
}

/// `de_DE.UTF-8@euro` → `de-DE`; `C` and `POSIX` → `en-US`.
/// Returns `None` for an empty or non-alphabetic tag.
fn normalize_tag(raw: &str) -> Option<String> {
    let base = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return Some(EN_US.tag.to_string());
    }

    let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());
    let language = parts.next()?;
    if !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut normalized = language.to_ascii_lowercase();
    if let Some(region) = parts.next() {
        normalized.push('-');
        normalized.push_str(&region.to_ascii_uppercase());
    }
    Some(normalized)
}
