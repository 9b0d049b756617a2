// src/config.rs
use std::path::PathBuf;

use pom_version_shared_kernel::{ErrorContext, Result, VersionValue};

use crate::args::Args;

/// Diagnostic level selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose(u8),
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, n) => Self::Verbose(n),
        }
    }

    /// Filter directive handed to the tracing subscriber.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose(1) => "info",
            Self::Verbose(2) => "debug",
            Self::Verbose(_) => "trace",
        }
    }
}

/// Everything a run needs, assembled from the command line only.
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub version: VersionValue,
    pub indent: usize,
    pub verbosity: Verbosity,
}

impl Config {
    /// Fails with a missing-argument error when no (or an empty) version was given.
    pub fn from_args(args: Args) -> Result<Self> {
        let verbosity = Verbosity::from_flags(args.verbose, args.quiet);
        let version = VersionValue::new(args.new_version.unwrap_or_default()).context("parsing arguments")?;
        Ok(Self { file: args.file, version, indent: args.indent, verbosity })
    }
}

impl TryFrom<Args> for Config {
    type Error = pom_version_shared_kernel::PomVersionError;

    fn try_from(args: Args) -> Result<Self> {
        Self::from_args(args)
    }
}
