//! Table-driven suites of validation cases.
//!
//! A suite is a TOML document with an array of `[[case]]` tables:
//!
//! ```toml
//! [[case]]
//! name = "colon-separated"
//! raw = "11:45:23"
//! expected = "11:45:23"
//!
//! [[case]]
//! name = "dash-separated"
//! raw = "14-30-00"
//! expected = "14:30:00"
//! outcome = "format-error"
//! ```
use crate::{
    datetime::Time, error::Error, extension::TomlTableExt, model::ValidationCase,
    state::State, validation::Validation,
};
use std::{fs, path::Path};
use toml::Table;

mod outcome;

pub use outcome::Outcome;

/// A validation case with a name and a declared outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteCase {
    /// Case name.
    name: String,
    /// The case to validate.
    case: ValidationCase,
    /// Declared outcome.
    outcome: Outcome,
}

impl SuiteCase {
    /// Creates a new instance.
    #[inline]
    pub fn new(name: impl Into<String>, case: ValidationCase, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            case,
            outcome,
        }
    }

    /// Returns the case name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the validation case.
    #[inline]
    pub fn case(&self) -> &ValidationCase {
        &self.case
    }

    /// Returns the declared outcome.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Parses a `[[case]]` table.
    fn from_table(index: usize, table: &Table) -> Result<Self, Error> {
        let name = table
            .get_str("name")
            .map(|name| name.to_owned())
            .unwrap_or_else(|| format!("case-{index}"));
        let invalid_case =
            |message: String| Error::new(format!("invalid case #{index} `{name}`: {message}"));
        let raw = table
            .get_str("raw")
            .ok_or_else(|| invalid_case("`raw` should be a string".to_owned()))?;
        let expected = table
            .get_str("expected")
            .ok_or_else(|| invalid_case("`expected` should be a string".to_owned()))?
            .parse::<Time>()
            .map_err(|err| invalid_case(format!("`expected` is not a valid time: {err}")))?;
        let outcome = match table.get_str("outcome") {
            Some(outcome) => outcome
                .parse::<Outcome>()
                .map_err(|err| invalid_case(err.to_string()))?,
            None => Outcome::default(),
        };
        Ok(Self::new(name, ValidationCase::new(raw, expected), outcome))
    }
}

/// A list of validation cases.
#[derive(Debug, Clone, Default)]
pub struct CaseSuite {
    cases: Vec<SuiteCase>,
}

impl CaseSuite {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Parses a suite from a TOML document.
    pub fn parse(document: &str) -> Result<Self, Error> {
        let table = document
            .parse::<Table>()
            .map_err(|err| Error::with_source("fail to parse the case suite", err))?;
        let mut suite = Self::new();
        if let Some(cases) = table.get_array("case") {
            for (index, value) in cases.iter().enumerate() {
                let case = value
                    .as_table()
                    .ok_or_else(|| Error::new(format!("invalid case #{index}: should be a table")))?;
                suite.push(SuiteCase::from_table(index, case)?);
            }
        }
        Ok(suite)
    }

    /// Loads a suite from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|err| {
            let path = path.display();
            Error::with_source(format!("fail to read the case suite `{path}`"), err)
        })?;
        Self::parse(&document).map_err(|err| err.wrap(format!("in `{}`", path.display())))
    }

    /// Loads the suite named by the `[suite] path` entry of the config.
    pub fn load_from(state: &State) -> Result<Self, Error> {
        let path = state
            .suite_path()
            .ok_or_else(|| Error::new("the `suite.path` field should be specified"))?;
        Self::load(path)
    }

    /// Appends a case.
    #[inline]
    pub fn push(&mut self, case: SuiteCase) {
        self.cases.push(case);
    }

    /// Returns the number of cases.
    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if the suite has no cases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns an iterator over the cases.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &SuiteCase> {
        self.cases.iter()
    }

    /// Validates every case and compares the outcome with the declared one.
    pub fn run(&self) -> SuiteReport {
        let mut report = SuiteReport::default();
        for suite_case in &self.cases {
            let name = suite_case.name();
            let declared = suite_case.outcome();
            let result = suite_case.case().check();
            let observed = Outcome::of(&result);
            if observed == declared {
                tracing::debug!(name, %observed, "case passed");
                report.passed += 1;
            } else {
                let message = match result {
                    Ok(()) => format!("expected `{declared}` but the case passed"),
                    Err(err) => format!("expected `{declared}` but got `{observed}`: {err}"),
                };
                tracing::warn!(name, %declared, %observed, "case failed");
                report.validation.record(name.to_owned(), message);
            }
        }
        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            "finished the case suite"
        );
        report
    }
}

/// The result of running a [`CaseSuite`].
#[derive(Debug, Default)]
pub struct SuiteReport {
    /// Number of cases with the declared outcome.
    passed: usize,
    /// Failed cases keyed by name.
    validation: Validation,
}

impl SuiteReport {
    /// Returns the number of cases with the declared outcome.
    #[inline]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Returns the number of cases with another outcome.
    #[inline]
    pub fn failed(&self) -> usize {
        self.validation.invalid_params().len()
    }

    /// Returns `true` if every case had the declared outcome.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.validation.is_success()
    }

    /// Returns a reference to the failed cases.
    #[inline]
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Consumes the report and returns an error if any case has failed.
    #[inline]
    pub fn into_result(self) -> Result<(), Error> {
        self.validation.into_result()
    }
}
