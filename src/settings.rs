// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, File, FileFormat};
use serde::{Deserialize, Deserializer, de};
use wildcard::MatchOptions;

// local imports
use crate::error::Result;
use crate::filtering::{Disposition, PatternSetBuilder, Precedence};
use crate::matcher::Matcher;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

/// Filter configuration layered from the built-in defaults and configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub case_sensitive: bool,
    pub escape: EscapeSetting,
    pub precedence: Precedence,
    pub rules: Vec<Rule>,
}

impl Settings {
    /// Loads the defaults and then each of `files` in order, later files overriding earlier ones.
    ///
    /// The format of each file is derived from its extension (`.yaml`, `.toml`, `.json`).
    pub fn load<I, P>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for file in files {
            log::debug!("loading configuration from {}", file.as_ref().display());
            builder = builder.add_source(File::from(file.as_ref()));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Parses settings from a string layered over the defaults.
    pub fn parse(text: &str, format: FileFormat) -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .add_source(File::from_str(text, format))
            .build()?
            .try_deserialize()?)
    }

    pub fn options(&self) -> MatchOptions {
        MatchOptions::new()
            .case_sensitive(self.case_sensitive)
            .escape(self.escape.0)
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.options()).with_precedence(self.precedence)
    }

    /// Returns a builder preloaded with the configured options, precedence and rules.
    pub fn pattern_set_builder(&self) -> PatternSetBuilder {
        PatternSetBuilder::new()
            .options(self.options())
            .precedence(self.precedence)
            .extend(self.rules.iter().map(|rule| (rule.pattern(), rule.disposition())))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            escape: EscapeSetting::default(),
            precedence: Precedence::default(),
            rules: Vec::new(),
        }
    }
}

// ---

/// Escape character, configured as a one-character string or an empty string for none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeSetting(pub Option<char>);

impl Default for EscapeSetting {
    fn default() -> Self {
        Self(Some(MatchOptions::DEFAULT_ESCAPE))
    }
}

impl<'de> Deserialize<'de> for EscapeSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self(None)),
            (Some(ch), None) => Ok(Self(Some(ch))),
            _ => Err(de::Error::custom(format!(
                "escape must be a single character or an empty string, got {:?}",
                value
            ))),
        }
    }
}

// ---

/// A single configured rule, written as `include: <pattern>` or `exclude: <pattern>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Include(String),
    Exclude(String),
}

impl Rule {
    pub fn pattern(&self) -> &str {
        match self {
            Self::Include(pattern) | Self::Exclude(pattern) => pattern,
        }
    }

    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Include(_) => Disposition::Include,
            Self::Exclude(_) => Disposition::Exclude,
        }
    }
}
