//! Parser for translation tests defined in YAML files
//!
//! The format is a simplified version of the liblouis YAML test format:
//!
//! ```yaml
//! flags: {testmode: forward}
//! tests:
//!   - [input, expected]
//!   - [description, input, expected]
//!   - [input, expected, {xfail: true}]
//! ```

use std::{fs::File, iter::Peekable};

use libyaml::{Encoding, Event, Parser, ParserIter};

use crate::check::{Test, TestMode, TestSuite};

type YAMLEventError = Option<Result<Event, libyaml::ParserError>>;

/// The nested YAML structures a test file is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Stream,
    Document,
    Mapping,
    Sequence,
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Structure::Stream => write!(f, "stream"),
            Structure::Document => write!(f, "document"),
            Structure::Mapping => write!(f, "mapping"),
            Structure::Sequence => write!(f, "sequence"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Scalar expected, got {0:?}")]
    ScalarExpected(YAMLEventError),
    #[error("YAML parse error")]
    YAMLError(#[from] libyaml::ParserError),
    #[error("Start of {expected} expected, got {got:?}")]
    StartExpected {
        expected: Structure,
        got: YAMLEventError,
    },
    #[error("End of {expected} expected, got {got:?}")]
    EndExpected {
        expected: Structure,
        got: YAMLEventError,
    },
    #[error("Invalid test mode {0:?}")]
    InvalidTestMode(String),
    #[error("Encoding {0:?} not supported")]
    InvalidEncoding(Encoding),
    #[error("Invalid token {0:?}")]
    InvalidToken(String),
}

pub struct YAMLParser<'a> {
    events: Peekable<ParserIter<'a>>,
}

impl<'a> YAMLParser<'a> {
    pub fn new(reader: File) -> Result<Self, ParseError> {
        let parser = Parser::new(reader)?;
        Ok(Self {
            events: parser.into_iter().peekable(),
        })
    }

    fn scalar(&mut self) -> Result<String, ParseError> {
        match self.events.next() {
            Some(Ok(Event::Scalar { value, .. })) => Ok(value),
            e => Err(ParseError::ScalarExpected(e)),
        }
    }

    /// Consume the event that opens `structure`. Streams have to be UTF-8.
    fn start(&mut self, structure: Structure) -> Result<(), ParseError> {
        let event = self.events.next();
        match (structure, &event) {
            (Structure::Stream, Some(Ok(Event::StreamStart { encoding }))) => match encoding {
                Some(Encoding::Utf8) | None => Ok(()),
                Some(encoding) => Err(ParseError::InvalidEncoding(*encoding)),
            },
            (Structure::Document, Some(Ok(Event::DocumentStart { .. })))
            | (Structure::Mapping, Some(Ok(Event::MappingStart { .. })))
            | (Structure::Sequence, Some(Ok(Event::SequenceStart { .. }))) => Ok(()),
            _ => Err(ParseError::StartExpected {
                expected: structure,
                got: event,
            }),
        }
    }

    /// Consume the event that closes `structure`
    fn end(&mut self, structure: Structure) -> Result<(), ParseError> {
        let event = self.events.next();
        match (structure, &event) {
            (Structure::Stream, Some(Ok(Event::StreamEnd)))
            | (Structure::Document, Some(Ok(Event::DocumentEnd { .. })))
            | (Structure::Mapping, Some(Ok(Event::MappingEnd)))
            | (Structure::Sequence, Some(Ok(Event::SequenceEnd))) => Ok(()),
            _ => Err(ParseError::EndExpected {
                expected: structure,
                got: event,
            }),
        }
    }

    fn flags(&mut self) -> Result<TestMode, ParseError> {
        let mut mode = TestMode::default();
        self.start(Structure::Mapping)?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let key = self.scalar()?;
            if key != "testmode" {
                return Err(ParseError::InvalidToken(key));
            }
            let value = self.scalar()?;
            mode = match &*value {
                "auto" => TestMode::Auto,
                "forward" => TestMode::Forward,
                "backward" => TestMode::Backward,
                "bothDirections" => TestMode::BothDirections,
                _ => {
                    return Err(ParseError::InvalidTestMode(value));
                }
            };
        }
        self.end(Structure::Mapping)?;
        Ok(mode)
    }

    fn xfail_value(&mut self) -> Result<bool, ParseError> {
        let value = self.scalar()?;
        if value == "off" || value == "false" {
            Ok(false)
        } else {
            // anything else, including a reason, marks the test as failing
            Ok(true)
        }
    }

    fn test(&mut self) -> Result<Test, ParseError> {
        self.start(Structure::Sequence)?;
        let mut description = None;
        let mut input = self.scalar()?;
        let mut expected = self.scalar()?;
        // two scalars are (input, expected), three are (description, input, expected)
        if let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            description = Some(input);
            input = expected;
            expected = self.scalar()?;
        }
        let mut xfail = false;
        if let Some(Ok(Event::MappingStart { .. })) = self.events.peek() {
            self.start(Structure::Mapping)?;
            while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
                let value = self.scalar()?;
                match &*value {
                    "xfail" => {
                        xfail = self.xfail_value()?;
                    }
                    _ => {
                        return Err(ParseError::InvalidToken(value));
                    }
                }
            }
            self.end(Structure::Mapping)?;
        };
        self.end(Structure::Sequence)?;
        Ok(Test::new(description, &input, &expected, xfail))
    }

    fn tests(&mut self) -> Result<Vec<Test>, ParseError> {
        let mut tests: Vec<Test> = Vec::new();
        self.start(Structure::Sequence)?;
        while let Some(Ok(Event::SequenceStart { .. })) = self.events.peek() {
            tests.push(self.test()?);
        }
        self.end(Structure::Sequence)?;
        Ok(tests)
    }

    pub fn yaml(&mut self) -> Result<TestSuite, ParseError> {
        let mut mode = TestMode::default();
        let mut tests: Vec<Test> = Vec::new();

        self.start(Structure::Stream)?;
        self.start(Structure::Document)?;
        self.start(Structure::Mapping)?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let value = self.scalar()?;
            match &*value {
                "flags" => {
                    mode = self.flags()?;
                }
                "tests" => {
                    tests = self.tests()?;
                }
                _ => {
                    return Err(ParseError::InvalidToken(value));
                }
            }
        }
        self.end(Structure::Mapping)?;
        self.end(Structure::Document)?;
        self.end(Structure::Stream)?;
        Ok(TestSuite::new(mode, tests))
    }
}
