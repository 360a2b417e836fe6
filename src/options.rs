use serde::{Deserialize, Serialize};

use crate::locale::{FractionDigits, LocaleSpec};

/// Fixed formatting flags a [`Formatter`](crate::Formatter) is built from.
///
/// The default is decimal bytes with a capitalized thousand prefix ("KB").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Preset {
    /// Format as bits instead of bytes. Useful for bit rates.
    pub bits: bool,
    /// Use base-1024 binary prefixes (Ki, Mi, ...) instead of base-1000.
    pub binary: bool,
    /// Append a per-second suffix (B/s, bps).
    pub speed: bool,
    /// Capitalize the thousand-scale decimal prefix ("KB" vs "kB").
    /// Binary prefixes are always capitalized and ignore this flag.
    pub large_k: bool,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            bits: false,
            binary: false,
            speed: false,
            large_k: true,
        }
    }
}

/// Per-call formatting options. No state persists across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatOptions {
    /// Prefix positive numbers with "+". Exact zero gets a leading space
    /// instead, so columns of signed values stay aligned.
    pub signed: bool,
    /// Locale conventions for the rendered number.
    pub locale: LocaleSpec,
    /// Minimum rendered fraction digits. When neither bound is set the
    /// number is rounded to 3 significant digits instead.
    pub minimum_fraction_digits: Option<usize>,
    /// Maximum rendered fraction digits.
    pub maximum_fraction_digits: Option<usize>,
    /// Put a space between the number and the unit.
    pub space: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            signed: false,
            locale: LocaleSpec::Disabled,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            space: true,
        }
    }
}

impl FormatOptions {
    pub(crate) fn fraction_digits(&self) -> Option<FractionDigits> {
        FractionDigits::resolve(self.minimum_fraction_digits, self.maximum_fraction_digits)
    }

    pub(crate) fn separator(&self) -> &'static str {
        if self.space { " " } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_defaults() {
        let preset = Preset::default();
        assert!(!preset.bits);
        assert!(!preset.binary);
        assert!(!preset.speed);
        assert!(preset.large_k);
    }

    #[test]
    fn test_options_default_to_spaced_unsigned_plain() {
        let options = FormatOptions::default();
        assert!(!options.signed);
        assert_eq!(options.locale, LocaleSpec::Disabled);
        assert_eq!(options.fraction_digits(), None);
        assert_eq!(options.separator(), " ");
    }

    #[test]
    fn test_preset_deserializes_with_field_defaults() {
        let preset: Preset = serde_json::from_str(r#"{"bits": true, "speed": true}"#).unwrap();
        assert!(preset.bits);
        assert!(preset.speed);
        assert!(!preset.binary);
        assert!(preset.large_k);
    }

    #[test]
    fn test_options_deserialize_from_config_json() {
        let options: FormatOptions = serde_json::from_str(
            r#"{"signed": true, "locale": {"tag": "de"}, "maximum-fraction-digits": 1}"#,
        )
        .unwrap();
        assert!(options.signed);
        assert_eq!(options.locale, LocaleSpec::Tag("de".to_string()));
        assert_eq!(options.maximum_fraction_digits, Some(1));
        assert!(options.space);
    }
}
