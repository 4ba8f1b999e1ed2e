// std imports
use std::ffi::OsString;
use std::path::PathBuf;

// third-party imports
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

// local imports
use crate::{
    filtering::{Disposition, Precedence},
    settings::{EscapeSetting, Settings},
};

// ---

/// Filters texts with ordered include/exclude wildcard patterns.
///
/// Each text is accepted if the deciding rule is an include rule. By default the last
/// matching rule decides; texts matching no rule are rejected.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file with options and rules, may be repeated.
    #[arg(short, long, env = "WILDFILTER_CONFIG", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Accept texts matching the pattern, may be repeated.
    #[arg(short, long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Reject texts matching the pattern, may be repeated.
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Match case-insensitively.
    #[arg(long)]
    pub ignore_case: bool,

    /// Escape character for patterns.
    #[arg(long, value_name = "CHAR", conflicts_with = "no_escape")]
    pub escape: Option<char>,

    /// Disable escaping in patterns.
    #[arg(long)]
    pub no_escape: bool,

    /// Let the first matching rule decide instead of the last one.
    #[arg(long)]
    pub first_match: bool,

    /// Print the deciding rule after each printed text.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print rejected texts instead of accepted ones.
    #[arg(long)]
    pub invert: bool,

    /// Texts to filter, lines of stdin are used if none are given.
    pub texts: Vec<String>,

    /// Include and exclude patterns in command line order.
    #[arg(skip)]
    pub rules: Vec<(String, Disposition)>,
}

impl Opt {
    /// Parses arguments, keeping the relative order of `--include` and `--exclude` patterns.
    pub fn parse_ordered_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut opt = Self::from_arg_matches(&matches)?;

        let mut rules: Vec<_> = indexed(&matches, "include", &opt.include, Disposition::Include)
            .chain(indexed(&matches, "exclude", &opt.exclude, Disposition::Exclude))
            .collect();
        rules.sort_by_key(|&(index, _, _)| index);
        opt.rules = rules
            .into_iter()
            .map(|(_, pattern, disposition)| (pattern, disposition))
            .collect();

        Ok(opt)
    }

    /// Overrides configured settings with the command line options that were given.
    pub fn apply(&self, settings: &mut Settings) {
        if self.ignore_case {
            settings.case_sensitive = false;
        }
        if self.no_escape {
            settings.escape = EscapeSetting(None);
        } else if let Some(escape) = self.escape {
            settings.escape = EscapeSetting(Some(escape));
        }
        if self.first_match {
            settings.precedence = Precedence::FirstMatch;
        }
    }
}

fn indexed<'a>(
    matches: &'a ArgMatches,
    id: &str,
    values: &'a [String],
    disposition: Disposition,
) -> impl Iterator<Item = (usize, String, Disposition)> + 'a {
    matches
        .indices_of(id)
        .into_iter()
        .flatten()
        .zip(values)
        .map(move |(index, value)| (index, value.clone(), disposition))
}
