//! Command implementations for the `strict-semver` binary
//!
//! Commands write to any [`Write`] so they can be exercised without
//! spawning a process.

use std::io::Write;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;
use crate::version::Version;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a version and print its components
    Parse {
        version: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check whether each argument is a valid version
    Validate {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Compare two versions by precedence and print `<`, `=` or `>`
    Compare { left: String, right: String },
    /// Print the next major, minor or patch version
    Bump { part: BumpPart, version: String },
    /// Print versions in precedence order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
        #[arg(long)]
        reverse: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpPart {
    Major,
    Minor,
    Patch,
}

/// Components of a parsed version as printed by `parse`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionReport<'a> {
    major: i64,
    minor: i64,
    patch: i64,
    pre_release: Option<&'a str>,
    build_metadata: Option<&'a str>,
    initial_development: bool,
}

impl<'a> From<&'a Version> for VersionReport<'a> {
    fn from(version: &'a Version) -> Self {
        Self {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release(),
            build_metadata: version.build_metadata(),
            initial_development: version.is_initial_development_phase(),
        }
    }
}

/// Run a command, returning whether it succeeded
pub fn execute<W: Write>(command: &Command, out: &mut W) -> anyhow::Result<bool> {
    match command {
        Command::Parse { version, format } => {
            let version = parse_arg(version)?;
            print_report(&version, *format, out)?;
            Ok(true)
        }
        Command::Validate { versions } => validate(versions, out),
        Command::Compare { left, right } => {
            let (left, right) = (parse_arg(left)?, parse_arg(right)?);
            let ordering = left.cmp_precedence(&right);
            debug!("Compared {} with {}: {:?}", left, right, ordering);
            let symbol = match ordering {
                std::cmp::Ordering::Less => "<",
                std::cmp::Ordering::Equal => "=",
                std::cmp::Ordering::Greater => ">",
            };
            writeln!(out, "{symbol}")?;
            Ok(true)
        }
        Command::Bump { part, version } => {
            let version = parse_arg(version)?;
            let next = match part {
                BumpPart::Major => version.next_major(),
                BumpPart::Minor => version.next_minor(),
                BumpPart::Patch => version.next_patch(),
            }
            .with_context(|| format!("Cannot bump {version}"))?;
            writeln!(out, "{next}")?;
            Ok(true)
        }
        Command::Sort { versions, reverse } => {
            let mut parsed = versions
                .iter()
                .map(|v| parse_arg(v))
                .collect::<anyhow::Result<Vec<_>>>()?;
            // Stable sorts keep precedence-equal inputs in argument order
            if *reverse {
                parsed.sort_by(|a, b| b.cmp(a));
            } else {
                parsed.sort();
            }
            for version in parsed {
                writeln!(out, "{version}")?;
            }
            Ok(true)
        }
    }
}

fn parse_arg(input: &str) -> anyhow::Result<Version> {
    Version::parse(input).with_context(|| format!("Cannot parse '{input}'"))
}

fn validate<W: Write>(versions: &[String], out: &mut W) -> anyhow::Result<bool> {
    let mut all_valid = true;
    for input in versions {
        match Version::parse(input) {
            Ok(_) => writeln!(out, "{input}: valid")?,
            Err(e) => {
                debug!("Rejected '{}': {:?}", input, e);
                all_valid = false;
                writeln!(out, "{input}: invalid: {e}")?;
            }
        }
    }
    Ok(all_valid)
}

fn print_report<W: Write>(
    version: &Version,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let report = VersionReport::from(version);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "major: {}", report.major)?;
            writeln!(out, "minor: {}", report.minor)?;
            writeln!(out, "patch: {}", report.patch)?;
            if let Some(pre) = report.pre_release {
                writeln!(out, "pre-release: {pre}")?;
            }
            if let Some(build) = report.build_metadata {
                writeln!(out, "build metadata: {build}")?;
            }
            writeln!(out, "initial development: {}", report.initial_development)?;
        }
    }
    Ok(())
}
