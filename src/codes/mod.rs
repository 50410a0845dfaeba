//! METAR code tables.
//!
//! Every selection on an observation (cloud cover, the four present-weather
//! parts, the minimum-visibility sector) is a closed enum implementing
//! [`CodeTable`]. The encoder only ever sees enum values, so an unknown
//! selection can not reach it; text is converted at the boundary through
//! `FromStr` / serde, where an unknown key is a [`LookupError`].
//!
//! Each variant carries three strings:
//! - `key`: snake_case name used in observation files (`"rain"`)
//! - `code`: the METAR abbreviation written into reports (`"RA"`)
//! - `label`: the selection label shown to operators (`"RA rain"`)
//!
//! [`CodeTable::lookup`] accepts any of the three, case-insensitively.

// ---------------------------------------------------------------------------
// Lookup errors
// ---------------------------------------------------------------------------

/// A text selection did not match any entry of its code table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown {table} selection: '{key}'")]
    UnknownKey { table: &'static str, key: String },
}

// ---------------------------------------------------------------------------
// Code table trait
// ---------------------------------------------------------------------------

pub trait CodeTable: Copy + Sized + 'static {
    /// Table name used in lookup errors.
    const TABLE: &'static str;

    /// Every entry, in selection order.
    fn all() -> &'static [Self];

    fn key(self) -> &'static str;

    /// METAR abbreviation; empty for "no selection" entries.
    fn code(self) -> &'static str;

    fn label(self) -> &'static str;

    /// Finds the entry whose key, code, or label matches `text`.
    ///
    /// Surrounding whitespace is ignored, so a blank selection (`"  "`)
    /// resolves to the entry with an empty code.
    fn lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::all().iter().copied().find(|entry| {
            entry.key().eq_ignore_ascii_case(text)
                || entry.code().eq_ignore_ascii_case(text)
                || entry.label().eq_ignore_ascii_case(text)
        })
    }

    /// Like [`CodeTable::lookup`], but reports the miss as a [`LookupError`].
    fn parse_selection(text: &str) -> Result<Self, LookupError> {
        Self::lookup(text).ok_or_else(|| LookupError::UnknownKey {
            table: Self::TABLE,
            key: text.to_string(),
        })
    }
}

/// Declares a code table enum together with its [`CodeTable`], `FromStr`,
/// `Display` (the METAR code) and serde impls (by key).
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($table:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($key:literal, $code:literal, $label:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::codes::CodeTable for $name {
            const TABLE: &'static str = $table;

            fn all() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }

            fn key(self) -> &'static str {
                match self { $( $name::$variant => $key ),+ }
            }

            fn code(self) -> &'static str {
                match self { $( $name::$variant => $code ),+ }
            }

            fn label(self) -> &'static str {
                match self { $( $name::$variant => $label ),+ }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::codes::LookupError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::codes::CodeTable>::parse_selection(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::codes::LookupError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(entry: $name) -> Self {
                <$name as $crate::codes::CodeTable>::key(entry)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<$name as $crate::codes::CodeTable>::code(*self))
            }
        }
    };
}

mod cloud;
mod direction;
mod weather;

pub use cloud::CloudCover;
pub use direction::CompassDirection;
pub use weather::{Descriptor, Intensity, Obscuration, Precipitation};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
