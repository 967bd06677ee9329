//! Parsed locale identifier structures
//!
//! These are the outputs of the parser. They are plain owned data: a result
//! only exists if the whole input was structurally valid, so every invariant
//! below holds for any value the parser hands out.
//!
//! - `language` is never empty.
//! - `variants` is strictly ascending (no duplicates).
//! - every keyword, field and other-extension entry has at least one value.
//!
//! `Display` writes the canonical form of a tag. It re-applies the casing
//! rules (lower language, title script, upper region, lower everything else)
//! so a result parsed with casing disabled still prints canonically.

use crate::subtags::to_ascii_titlecase;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `language[-script][-region][-variant]*`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLanguageIdentifier {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl ParsedLanguageIdentifier {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    fn write_canonical(&self, f: &mut fmt::Formatter<'_>, title_and_upper: bool) -> fmt::Result {
        f.write_str(&self.language.to_ascii_lowercase())?;
        if let Some(script) = &self.script {
            let script = if title_and_upper {
                to_ascii_titlecase(script)
            } else {
                script.to_ascii_lowercase()
            };
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            let region = if title_and_upper {
                region.to_ascii_uppercase()
            } else {
                region.to_ascii_lowercase()
            };
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{}", variant.to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl fmt::Display for ParsedLanguageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, true)
    }
}

/// A structurally valid locale identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLocaleIdentifier {
    pub language_identifier: ParsedLanguageIdentifier,

    /// `u` extension attributes, sorted, duplicates kept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unicode_extension_attributes: Vec<String>,

    /// `u` extension keywords in the order their keys first appeared
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub unicode_extension_keywords: IndexMap<String, Vec<String>>,

    /// The `tlang` embedded in a `t` extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformed_language_identifier: Option<ParsedLanguageIdentifier>,

    /// `t` extension fields in the order their keys first appeared
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub transformed_extension_fields: IndexMap<String, Vec<String>>,

    /// Extensions introduced by any singleton other than `t`, `u` and `x`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub other_extensions: BTreeMap<char, Vec<String>>,

    /// `x` extension payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_use: Vec<String>,
}

impl ParsedLocaleIdentifier {
    pub fn has_unicode_extension(&self) -> bool {
        !self.unicode_extension_attributes.is_empty() || !self.unicode_extension_keywords.is_empty()
    }

    pub fn has_transformed_extension(&self) -> bool {
        self.transformed_language_identifier.is_some() || !self.transformed_extension_fields.is_empty()
    }

    pub fn has_extensions(&self) -> bool {
        self.has_unicode_extension()
            || self.has_transformed_extension()
            || !self.other_extensions.is_empty()
            || !self.private_use.is_empty()
    }

    /// Type list recorded for a `u` extension key
    pub fn keyword(&self, key: &str) -> Option<&[String]> {
        self.unicode_extension_keywords.get(key).map(Vec::as_slice)
    }

    /// Value list recorded for a `t` extension field key
    pub fn field(&self, key: &str) -> Option<&[String]> {
        self.transformed_extension_fields.get(key).map(Vec::as_slice)
    }
}

fn write_entries(
    f: &mut fmt::Formatter<'_>,
    entries: &IndexMap<String, Vec<String>>,
) -> fmt::Result {
    let mut sorted: Vec<_> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    for (key, values) in sorted {
        write!(f, "-{}", key.to_ascii_lowercase())?;
        write_list(f, values)?;
    }
    Ok(())
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[String]) -> fmt::Result {
    for value in values {
        write!(f, "-{}", value.to_ascii_lowercase())?;
    }
    Ok(())
}

impl fmt::Display for ParsedLocaleIdentifier {
    /// language-script-region-variants, then `u`, `t`, other extensions
    /// sorted by singleton, and `x` last
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language_identifier)?;

        if self.has_unicode_extension() {
            f.write_str("-u")?;
            write_list(f, &self.unicode_extension_attributes)?;
            write_entries(f, &self.unicode_extension_keywords)?;
        }

        if self.has_transformed_extension() {
            f.write_str("-t")?;
            if let Some(tlang) = &self.transformed_language_identifier {
                f.write_str("-")?;
                tlang.write_canonical(f, false)?;
            }
            write_entries(f, &self.transformed_extension_fields)?;
        }

        for (singleton, values) in &self.other_extensions {
            write!(f, "-{}", singleton.to_ascii_lowercase())?;
            write_list(f, values)?;
        }

        if !self.private_use.is_empty() {
            f.write_str("-x")?;
            write_list(f, &self.private_use)?;
        }

        Ok(())
    }
}
