// std imports
use std::io::{BufRead, Write};

// local imports
use crate::{error::*, filtering::PatternSet};

// ---

pub struct Options {
    pub set: PatternSet,
    /// Print the source of the deciding rule after each printed text.
    pub verbose: bool,
    /// Print rejected texts instead of accepted ones.
    pub invert: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Filters each line of `input`, returning the number of lines printed.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<usize> {
        let mut printed = 0;
        for line in input.lines() {
            if self.process(&line?, output)? {
                printed += 1;
            }
        }
        Ok(printed)
    }

    /// Filters the given texts, returning the number of texts printed.
    pub fn run_texts<I, S, W>(&self, texts: I, output: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut printed = 0;
        for text in texts {
            if self.process(text.as_ref(), output)? {
                printed += 1;
            }
        }
        Ok(printed)
    }

    fn process<W: Write>(&self, text: &str, output: &mut W) -> Result<bool> {
        let set = &self.options.set;
        let decided = set.decide(text);
        let accepted = decided.is_some_and(|entry| entry.disposition.is_include());
        log::trace!("{:?}: accepted={} rule={:?}", text, accepted, decided.map(|e| &e.source));

        if accepted == self.options.invert {
            return Ok(false);
        }

        match decided {
            Some(entry) if self.options.verbose => writeln!(output, "{}\t{}", text, entry.source)?,
            _ => writeln!(output, "{}", text)?,
        }
        Ok(true)
    }
}
