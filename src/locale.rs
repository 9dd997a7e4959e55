//! Localization table
//!
//! Two hardcoded locales loaded once at startup from an embedded JSON table.
//! The table is validated on load: every locale must define every label,
//! so lookups afterwards are infallible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Embedded string table
const LOCALE_TABLE_JSON: &str = include_str!("locales.json");

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, WheelError> {
        match code.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(WheelError::Configuration(format!(
                "unsupported locale code '{}'",
                other
            ))),
        }
    }

    /// The other locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    fn index(&self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ar => 1,
        }
    }
}

/// Text direction for the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the html `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Stub notifications shown in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Wallet,
    Referral,
    Leaderboard,
    Ad,
}

/// Every display string for one locale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Strings {
    pub dir: Direction,
    pub spin: String,
    pub wallet: String,
    pub referral: String,
    pub leaderboard: String,
    pub game: String,
    pub ads: String,
    /// Balance unit label
    pub balance: String,
    pub ready: String,
    pub spinning: String,
    pub winner: String,
    /// Short code shown on the language button
    pub lang_code: String,
    pub wallet_notice: String,
    pub referral_notice: String,
    pub leaderboard_notice: String,
    pub ad_notice: String,
    /// Loader messages, cycled in order
    pub loading: Vec<String>,
    /// Thousands separator
    pub group_separator: String,
    /// Ten digit glyphs, zero first
    pub digits: String,
}

impl Strings {
    pub fn notice(&self, notice: Notice) -> &str {
        match notice {
            Notice::Wallet => &self.wallet_notice,
            Notice::Referral => &self.referral_notice,
            Notice::Leaderboard => &self.leaderboard_notice,
            Notice::Ad => &self.ad_notice,
        }
    }

    /// Loader message for a cycle index (wraps)
    pub fn loading_message(&self, index: usize) -> &str {
        &self.loading[index % self.loading.len()]
    }

    /// Format an amount with this locale's digits and thousands grouping
    pub fn format_amount(&self, amount: u64) -> String {
        let digits: Vec<char> = self.digits.chars().collect();
        let raw = amount.to_string();
        let len = raw.len();
        let mut out = String::with_capacity(len * 2);

        for (i, c) in raw.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            let d = c.to_digit(10).unwrap_or(0) as usize;
            out.push(digits[d]);
        }
        out
    }

    fn validate(&self, code: &str) -> Result<(), WheelError> {
        let labels = [
            ("spin", &self.spin),
            ("wallet", &self.wallet),
            ("referral", &self.referral),
            ("leaderboard", &self.leaderboard),
            ("game", &self.game),
            ("ads", &self.ads),
            ("balance", &self.balance),
            ("ready", &self.ready),
            ("spinning", &self.spinning),
            ("winner", &self.winner),
            ("lang_code", &self.lang_code),
            ("wallet_notice", &self.wallet_notice),
            ("referral_notice", &self.referral_notice),
            ("leaderboard_notice", &self.leaderboard_notice),
            ("ad_notice", &self.ad_notice),
            ("group_separator", &self.group_separator),
        ];
        for (key, value) in labels {
            if value.trim().is_empty() {
                return Err(WheelError::Configuration(format!(
                    "locale '{}' has an empty '{}' label",
                    code, key
                )));
            }
        }
        if self.loading.is_empty() {
            return Err(WheelError::Configuration(format!(
                "locale '{}' has no loading messages",
                code
            )));
        }
        if self.digits.chars().count() != 10 {
            return Err(WheelError::Configuration(format!(
                "locale '{}' must define exactly 10 digits",
                code
            )));
        }
        Ok(())
    }
}

/// Validated lookup from locale to its strings
#[derive(Debug, Clone)]
pub struct LocaleTable {
    entries: [Strings; 2],
}

impl LocaleTable {
    /// Load the embedded table
    pub fn load() -> Result<Self, WheelError> {
        Self::from_json(LOCALE_TABLE_JSON)
    }

    /// Parse and validate a table keyed by locale code
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let mut raw: BTreeMap<String, Strings> = serde_json::from_str(json)?;

        for code in raw.keys() {
            Locale::from_code(code)?;
        }

        let mut take = |locale: Locale| -> Result<Strings, WheelError> {
            let strings = raw.remove(locale.code()).ok_or_else(|| {
                WheelError::Configuration(format!("missing locale '{}'", locale.code()))
            })?;
            strings.validate(locale.code())?;
            Ok(strings)
        };
        let en = take(Locale::En)?;
        let ar = take(Locale::Ar)?;

        log::debug!("Locale table loaded ({} locales)", Locale::ALL.len());
        Ok(Self { entries: [en, ar] })
    }

    pub fn get(&self, locale: Locale) -> &Strings {
        &self.entries[locale.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_loads() {
        let table = LocaleTable::load().unwrap();
        assert_eq!(table.get(Locale::En).lang_code, "EN");
        assert_eq!(table.get(Locale::Ar).lang_code, "AR");
        assert_eq!(table.get(Locale::En).dir, Direction::Ltr);
        assert_eq!(table.get(Locale::Ar).dir, Direction::Rtl);
    }

    #[test]
    fn test_missing_key_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(LOCALE_TABLE_JSON).unwrap();
        value["ar"].as_object_mut().unwrap().remove("winner");
        let err = LocaleTable::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, WheelError::Configuration(_)));
    }

    #[test]
    fn test_missing_locale_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(LOCALE_TABLE_JSON).unwrap();
        value.as_object_mut().unwrap().remove("ar");
        assert!(LocaleTable::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(LOCALE_TABLE_JSON).unwrap();
        let fr = value["en"].clone();
        value.as_object_mut().unwrap().insert("fr".into(), fr);
        assert!(LocaleTable::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_empty_label_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(LOCALE_TABLE_JSON).unwrap();
        value["en"]["spin"] = serde_json::Value::String("  ".into());
        assert!(LocaleTable::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("EN").unwrap(), Locale::En);
        assert_eq!(Locale::from_code("ar").unwrap(), Locale::Ar);
        assert!(matches!(
            Locale::from_code("de"),
            Err(WheelError::Configuration(_))
        ));
    }

    #[test]
    fn test_toggled_is_involution() {
        for locale in Locale::ALL {
            assert_eq!(locale.toggled().toggled(), locale);
            assert_ne!(locale.toggled(), locale);
        }
    }

    #[test]
    fn test_format_amount_grouping() {
        let table = LocaleTable::load().unwrap();
        let en = table.get(Locale::En);
        assert_eq!(en.format_amount(0), "0");
        assert_eq!(en.format_amount(999), "999");
        assert_eq!(en.format_amount(1550), "1,550");
        assert_eq!(en.format_amount(1_234_567), "1,234,567");

        let ar = table.get(Locale::Ar);
        assert_eq!(ar.format_amount(1550), "١٬٥٥٠");
    }

    #[test]
    fn test_loading_message_wraps() {
        let table = LocaleTable::load().unwrap();
        let en = table.get(Locale::En);
        assert_eq!(en.loading_message(0), "Loading...");
        assert_eq!(en.loading_message(4), "Loading...");
        assert_eq!(en.loading_message(3), "Get ready to spin!");
    }
}
