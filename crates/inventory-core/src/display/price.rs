//! Currency formatting for item prices.
//!
//! [`format_price`] renders an item's price using the currency conventions of
//! the process locale. The locale is taken from `LC_ALL`, `LC_MONETARY` and
//! `LANG`, in that order, and falls back to `en_US` when none of them names a
//! locale with a known currency format.

use std::env;

use crate::models::Item;

/// Environment variables consulted for the current locale, highest priority
/// first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

/// Currency conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Placed between the symbol and the digits
    pub symbol_spacing: &'static str,
    pub decimal_separator: char,
    pub group_separator: Option<char>,
    pub fraction_digits: usize,
}

impl CurrencyFormat {
    pub const EN_US: CurrencyFormat = CurrencyFormat {
        symbol: "$",
        position: SymbolPosition::Before,
        symbol_spacing: "",
        decimal_separator: '.',
        group_separator: Some(','),
        fraction_digits: 2,
    };

    pub const EN_GB: CurrencyFormat = CurrencyFormat {
        symbol: "£",
        ..Self::EN_US
    };

    pub const DE_DE: CurrencyFormat = CurrencyFormat {
        symbol: "€",
        position: SymbolPosition::After,
        symbol_spacing: "\u{a0}",
        decimal_separator: ',',
        group_separator: Some('.'),
        fraction_digits: 2,
    };

    pub const FR_FR: CurrencyFormat = CurrencyFormat {
        group_separator: Some('\u{202f}'),
        ..Self::DE_DE
    };

    pub const JA_JP: CurrencyFormat = CurrencyFormat {
        symbol: "￥",
        fraction_digits: 0,
        ..Self::EN_US
    };

    /// Returns the format for a POSIX-style locale tag such as `de_DE.UTF-8`,
    /// or `None` when the locale is not known.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let tag = locale
            .split(|c: char| c == '.' || c == '@')
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        match tag.as_str() {
            "en_US" => Some(Self::EN_US),
            "en_GB" => Some(Self::EN_GB),
            "de_DE" => Some(Self::DE_DE),
            "fr_FR" => Some(Self::FR_FR),
            "ja_JP" => Some(Self::JA_JP),
            // Bare language codes map to the language's home region.
            "en" => Some(Self::EN_US),
            "de" => Some(Self::DE_DE),
            "fr" => Some(Self::FR_FR),
            "ja" => Some(Self::JA_JP),
            _ => None,
        }
    }

    /// Returns the format of the process locale.
    pub fn current() -> Self {
        resolve_locale(|name| env::var(name).ok())
            .and_then(|locale| Self::for_locale(&locale))
            .unwrap_or(Self::EN_US)
    }

    /// Formats an amount with these conventions.
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_string();
        }
        if amount.is_infinite() {
            let infinity = if amount < 0.0 { "-∞" } else { "∞" };
            return infinity.to_string();
        }

        let fixed = format!("{:.*}", self.fraction_digits, amount.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut digits = self.group(whole);
        if let Some(fraction) = fraction {
            digits.push(self.decimal_separator);
            digits.push_str(fraction);
        }

        // Amounts that round to zero never carry a sign.
        let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let sign = if negative { "-" } else { "" };

        match self.position {
            SymbolPosition::Before => {
                format!("{sign}{}{}{digits}", self.symbol, self.symbol_spacing)
            }
            SymbolPosition::After => {
                format!("{sign}{digits}{}{}", self.symbol_spacing, self.symbol)
            }
        }
    }

    fn group(&self, whole: &str) -> String {
        let Some(separator) = self.group_separator else {
            return whole.to_string();
        };

        let len = whole.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Picks the effective locale from the POSIX locale variables.
///
/// Empty values are skipped, as are `C` and `POSIX`, which carry no
/// currency conventions.
pub fn resolve_locale<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .filter(|value| !matches!(value.split('.').next(), Some("C" | "POSIX")))
}

/// Returns the item's price as a currency string in the current locale.
pub fn format_price(item: &Item) -> String {
    format_price_with(item, &CurrencyFormat::current())
}

/// Returns the item's price as a currency string using the given format.
pub fn format_price_with(item: &Item, format: &CurrencyFormat) -> String {
    format.format(item.item_price)
}
