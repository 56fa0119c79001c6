//! Long shadow enumerations
//!
//! Both the composite filter and the primitive long shadow declare these,
//! so a value chosen on one side is always accepted on the other.

use std::fmt;
use std::str::FromStr;

use super::EnumOption;
use crate::error::GraphError;

/// How the long shadow is rendered along its length
///
/// Nicks are the primitive long shadow's own, without per-filter suffixes,
/// so a selected style is forwarded to the primitive as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowStyle {
    #[default]
    Finite,
    Infinite,
    Fading,
    FadingFixedLength,
    #[cfg(feature = "fading-fixed-rate")]
    FadingFixedRate,
}

impl ShadowStyle {
    /// Every selectable style, in declaration order
    pub const ALL: &'static [ShadowStyle] = &[
        ShadowStyle::Finite,
        ShadowStyle::Infinite,
        ShadowStyle::Fading,
        ShadowStyle::FadingFixedLength,
        #[cfg(feature = "fading-fixed-rate")]
        ShadowStyle::FadingFixedRate,
    ];

    pub fn nick(self) -> &'static str {
        match self {
            ShadowStyle::Finite => "finite",
            ShadowStyle::Infinite => "infinite",
            ShadowStyle::Fading => "fading",
            ShadowStyle::FadingFixedLength => "fading-fixed-length",
            #[cfg(feature = "fading-fixed-rate")]
            ShadowStyle::FadingFixedRate => "fading-fixed-rate",
        }
    }

    /// Display label; infinite and fading are hidden in this filter's UI
    pub fn label(self) -> &'static str {
        match self {
            ShadowStyle::Finite => "Finite",
            ShadowStyle::Infinite => "",
            ShadowStyle::Fading => "",
            ShadowStyle::FadingFixedLength => "Fading (fixed length)",
            #[cfg(feature = "fading-fixed-rate")]
            ShadowStyle::FadingFixedRate => "Fading (fixed rate)",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|s| EnumOption::new(s.nick(), s.label()))
            .collect()
    }
}

impl fmt::Display for ShadowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick())
    }
}

impl FromStr for ShadowStyle {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.nick() == s)
            .ok_or_else(|| GraphError::UnknownEnumValue {
                name: "style".to_string(),
                nick: s.to_string(),
            })
    }
}

/// How the shadow is combined with the source image
///
/// Uses the primitive's nicks (`shadow-only`, not a suffixed alias).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    #[default]
    ShadowPlusImage,
    ShadowOnly,
    ShadowMinusImage,
}

impl Composition {
    pub const ALL: &'static [Composition] = &[
        Composition::ShadowPlusImage,
        Composition::ShadowOnly,
        Composition::ShadowMinusImage,
    ];

    pub fn nick(self) -> &'static str {
        match self {
            Composition::ShadowPlusImage => "shadow-plus-image",
            Composition::ShadowOnly => "shadow-only",
            Composition::ShadowMinusImage => "shadow-minus-image",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Composition::ShadowPlusImage => "Shadow plus image mode",
            Composition::ShadowOnly => "Shadow only mode",
            Composition::ShadowMinusImage => "Shadow minus image mode",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|c| EnumOption::new(c.nick(), c.label()))
            .collect()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nick())
    }
}

impl FromStr for Composition {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.nick() == s)
            .ok_or_else(|| GraphError::UnknownEnumValue {
                name: "composition".to_string(),
                nick: s.to_string(),
            })
    }
}
