//! The full load pipeline: lex, parse, resolve.
//!
//! One load runs to completion synchronously. If configured, existing rules
//! are cleared first; then the source is tokenized, parsed, and resolved
//! against a fresh group table. Diagnostics are logged as they occur. The
//! returned [`LoadReport`] only counts them.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};

use collider_foundation::{Error, Result};
use collider_language::{Lexer, Parser, Token, Truncated};
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::registry::{AbilityRegistry, CollisionRegistry};
use crate::resolver::Resolver;

/// Counters for one load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-empty statements resolved.
    pub statements: usize,
    /// Lines rejected by the parser.
    pub syntax_errors: usize,
    /// Unknown abilities, unknown groups, and nameless groups.
    pub warnings: usize,
    /// Group bindings made, including rebindings.
    pub groups_bound: usize,
    /// Register operations issued.
    pub registrations: usize,
    /// Remove operations issued.
    pub removals: usize,
    /// The source could not be read to the end.
    pub truncated: bool,
}

impl LoadReport {
    /// Returns the number of rule operations issued.
    #[must_use]
    pub const fn operations(&self) -> usize {
        self.registrations + self.removals
    }

    /// Returns true if nothing was logged at warning level.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.syntax_errors == 0 && self.warnings == 0 && !self.truncated
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} statements, {} groups, {} registered, {} removed, {} syntax errors, {} warnings",
            self.statements,
            self.groups_bound,
            self.registrations,
            self.removals,
            self.syntax_errors,
            self.warnings
        )?;
        if self.truncated {
            f.write_str(" (source truncated)")?;
        }
        Ok(())
    }
}

/// Runs loads against a pair of registries.
pub struct Loader<'a, A, C> {
    abilities: &'a A,
    collisions: &'a mut C,
    config: LoaderConfig,
}

impl<'a, A, C> Loader<'a, A, C>
where
    A: AbilityRegistry,
    C: CollisionRegistry<A::Handle>,
{
    /// Creates a loader.
    #[must_use]
    pub fn new(abilities: &'a A, collisions: &'a mut C, config: LoaderConfig) -> Self {
        Self {
            abilities,
            collisions,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the configured source file.
    ///
    /// # Errors
    /// Returns an I/O error if the source file cannot be opened. A failure
    /// part way through reading is not an error: the load proceeds with
    /// what was read and the report is marked truncated.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.begin();
        let path = self.config.source.clone();
        let file = File::open(&path).map_err(|source| {
            let err = Error::io(&path, source);
            warn!("{err}");
            err
        })?;
        Ok(self.finish(Lexer::from_reader(BufReader::new(file)).read_tokens()))
    }

    /// Loads in-memory source.
    pub fn load_str(&mut self, source: &str) -> LoadReport {
        self.begin();
        self.finish(Lexer::new(source).read_tokens())
    }

    /// Loads source from a reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> LoadReport {
        self.begin();
        self.finish(Lexer::from_reader(reader).read_tokens())
    }

    fn begin(&mut self) {
        if self.config.clear_existing {
            info!("Clearing out core collisions...");
            self.collisions.clear();
        }
        info!("Initializing Collisions...");
    }

    fn finish(&mut self, lexed: std::result::Result<Vec<Token>, Truncated>) -> LoadReport {
        let (tokens, truncated) = match lexed {
            Ok(tokens) => (tokens, false),
            Err(truncated) => (truncated.tokens, true),
        };

        let parsed = Parser::new(&tokens).parse_statements();
        let mut resolver = Resolver::new(self.abilities, &mut *self.collisions)
            .with_verbose(self.config.verbose);
        resolver.apply_all(&parsed.statements);

        let mut report = resolver.finish();
        report.syntax_errors = parsed.errors.len();
        report.truncated = truncated;

        info!(
            statements = report.statements,
            registered = report.registrations,
            removed = report.removals,
            syntax_errors = report.syntax_errors,
            warnings = report.warnings,
            "Finished Initializing Collisions"
        );
        report
    }
}
