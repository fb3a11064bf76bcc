//! Check translations against tests defined in YAML files

use std::{fs::File, path::Path};

use log::{debug, warn};

use crate::{
    translator::{Direction, TranslationError, translate, translate_with},
    yaml::{self, YAMLParser},
};

/// Prefix of an expected value that names the kind of error the translation
/// has to fail with, i.e. `error: DanglingCapital`
const ERROR_PREFIX: &str = "error: ";

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error("Cannot read test file")]
    IoError(#[from] std::io::Error),
    #[error("Invalid test file: {0}")]
    ParseError(#[from] yaml::ParseError),
}

/// The direction(s) in which the tests of a [`TestSuite`] are run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TestMode {
    /// Let the translator detect the direction
    #[default]
    Auto,
    Forward,
    Backward,
    /// Translate forward, then translate the expected braille back
    BothDirections,
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
        direction: Option<Direction>,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
        direction: Option<Direction>,
    },
    UnexpectedSuccess {
        input: String,
        direction: Option<Direction>,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

/// Render the outcome of a translation the way expected values are written
fn outcome(result: Result<String, TranslationError>) -> String {
    match result {
        Ok(output) => output,
        Err(e) => format!("{}{}", ERROR_PREFIX, e.kind()),
    }
}

#[derive(Debug, PartialEq)]
pub struct Test {
    description: Option<String>,
    input: String,
    expected: String,
    xfail: bool,
}

impl Test {
    pub fn new(description: Option<String>, input: &str, expected: &str, xfail: bool) -> Self {
        Self {
            description,
            input: input.to_string(),
            expected: expected.to_string(),
            xfail,
        }
    }

    fn check_one(&self, input: &str, expected: &str, direction: Option<Direction>) -> TestResult {
        let actual = match direction {
            Some(direction) => outcome(translate_with(direction, input)),
            None => outcome(translate(input)),
        };
        match (actual == expected, self.xfail) {
            (true, false) => TestResult::Success,
            (true, true) => TestResult::UnexpectedSuccess {
                input: input.to_string(),
                direction,
            },
            (false, true) => TestResult::ExpectedFailure {
                input: input.to_string(),
                expected: expected.to_string(),
                actual,
                direction,
            },
            (false, false) => TestResult::Failure {
                input: input.to_string(),
                expected: expected.to_string(),
                actual,
                direction,
            },
        }
    }

    pub fn check(&self, mode: TestMode) -> Vec<TestResult> {
        if let Some(description) = &self.description {
            debug!("checking {}", description);
        }
        match mode {
            TestMode::Auto => vec![self.check_one(&self.input, &self.expected, None)],
            TestMode::Forward => vec![self.check_one(
                &self.input,
                &self.expected,
                Some(Direction::Forward),
            )],
            TestMode::Backward => vec![self.check_one(
                &self.input,
                &self.expected,
                Some(Direction::Backward),
            )],
            TestMode::BothDirections => vec![
                self.check_one(&self.input, &self.expected, Some(Direction::Forward)),
                self.check_one(&self.expected, &self.input, Some(Direction::Backward)),
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct TestSuite {
    mode: TestMode,
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new(mode: TestMode, tests: Vec<Test>) -> Self {
        Self { mode, tests }
    }

    pub fn from_path(path: &Path) -> Result<Self, TestError> {
        let file = File::open(path)?;
        let suite = YAMLParser::new(file)?.yaml()?;
        Ok(suite)
    }

    pub fn check(&self) -> Vec<TestResult> {
        let results: Vec<TestResult> = self
            .tests
            .iter()
            .flat_map(|t| t.check(self.mode))
            .collect();
        for result in results.iter().filter(|r| r.is_failure()) {
            warn!("{:?}", result);
        }
        results
    }
}

/// Run all tests in the YAML file at `path`
pub fn check_yaml(path: &Path) -> Result<Vec<TestResult>, TestError> {
    Ok(TestSuite::from_path(path)?.check())
}
