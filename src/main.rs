use std::{path::PathBuf, process::ExitCode};

use braille::{
    Direction, ResolvedTranslation, TranslationError, prepare_input,
    check::{TestResult, check_yaml},
    translator::{self, CellTable, table},
};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum DirectionArg {
    /// Detect the direction from the input
    Auto,
    /// English to braille
    Forward,
    /// Braille to English
    Backward,
}

impl DirectionArg {
    fn direction(self) -> Option<Direction> {
        match self {
            DirectionArg::Auto => None,
            DirectionArg::Forward => Some(Direction::Forward),
            DirectionArg::Backward => Some(Direction::Backward),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the tests defined in the <YAML_TEST_FILE>. Return 0 if all
    /// tests pass or 1 if any of the tests fail.
    CheckYaml {
        /// YAML file listing all the tests
        #[arg(value_name = "YAML_TEST_FILE")]
        yaml: PathBuf,
    },
    /// print the letter, digit and indicator cells
    ShowTable,
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "braille")]
#[command(about = "A command line tool to translate to and from Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Text to translate, either English or braille written with `O` and `.`.
    /// Multiple words are joined with a single space
    text: Vec<String>,
    /// Direction of the translation
    #[arg(short, long, value_enum, default_value_t = DirectionArg::Auto)]
    direction: DirectionArg,
    /// Print each step of the translation instead of the result
    #[arg(long)]
    trace: bool,
}

#[derive(Tabled)]
struct TraceRow {
    input: String,
    output: String,
}

impl From<&ResolvedTranslation> for TraceRow {
    fn from(translation: &ResolvedTranslation) -> Self {
        TraceRow {
            input: translation.input().to_string(),
            output: translation.output().to_string(),
        }
    }
}

#[derive(Tabled)]
struct CellRow {
    character: String,
    cell: String,
    dots: String,
}

impl CellRow {
    fn new(character: &str, cell: &braille::cell::Cell) -> Self {
        CellRow {
            character: character.to_string(),
            cell: cell.to_string(),
            dots: cell.dot_numbers(),
        }
    }
}

fn show_table() {
    let table = CellTable::standard();
    let mut rows: Vec<CellRow> = table
        .letters()
        .iter()
        .map(|(c, cell)| CellRow::new(&c.to_string(), cell))
        .collect();
    rows.extend(
        table
            .digits()
            .iter()
            .map(|(c, cell)| CellRow::new(&c.to_string(), cell)),
    );
    rows.push(CellRow::new("space", &table::SPACE));
    rows.push(CellRow::new("capital follows", &table::CAPITAL_FOLLOWS));
    rows.push(CellRow::new("number follows", &table::NUMBER_FOLLOWS));
    println!("{}", Table::new(rows).with(Style::modern()));
}

fn run_checks(yaml: PathBuf) -> ExitCode {
    println!("Testing with {:?}", yaml);
    let results = match check_yaml(&yaml) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let failures: Vec<&TestResult> = results.iter().filter(|r| r.is_failure()).collect();
    println!("Pass: {}", results.iter().filter(|r| r.is_success()).count());
    println!("Fail: {}", failures.len());
    for failure in &failures {
        println!("{:?}", failure);
    }
    if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn translate(input: &str, direction: Option<Direction>, trace: bool) -> Result<(), TranslationError> {
    if trace {
        let steps = match direction {
            Some(direction) => translator::trace_with(direction, input)?,
            None => translator::trace(input)?,
        };
        let rows: Vec<TraceRow> = steps.iter().map(TraceRow::from).collect();
        println!("{}", Table::new(rows).with(Style::modern()));
    } else {
        let output = match direction {
            Some(direction) => translator::translate_with(direction, input)?,
            None => translator::translate(input)?,
        };
        println!("{}", output);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Some(Commands::ShowTable) => {
            show_table();
            return ExitCode::SUCCESS;
        }
        Some(Commands::CheckYaml { yaml }) => return run_checks(yaml),
        None => (),
    }

    let result = prepare_input(&args.text).and_then(|input| {
        debug!("input {:?}", input);
        translate(&input, args.direction.direction(), args.trace)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
