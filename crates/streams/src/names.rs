use crate::prelude::{eprintln, print, println, *};
use colored::Colorize;
use serde::Serialize;
use streams_core::names::NameOperations;

#[derive(Debug, clap::Parser)]
#[command(name = "names")]
#[command(about = "Run a name operation locally and print the result")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Uppercase every name (map)
    #[clap(name = "map")]
    Map(OutputOptions),

    /// Keep the names starting with a letter (filter)
    #[clap(name = "filter")]
    Filter(FilterOptions),

    /// Keep the names longer than a length (predicate)
    #[clap(name = "predicate")]
    Predicate(PredicateOptions),

    /// Generate a random UUID (supplier)
    #[clap(name = "supplier")]
    Supplier(OutputOptions),

    /// Prefix every name with "Name: " (consumer)
    #[clap(name = "consumer")]
    Consumer(OutputOptions),

    /// Double a number (unary operator)
    #[clap(name = "unary")]
    Unary(UnaryOptions),

    /// Sum a list of numbers (binary operator)
    #[clap(name = "binary")]
    Binary(BinaryOptions),
}

#[derive(Debug, Clone, clap::Args)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FilterOptions {
    /// Starting letter (case-sensitive)
    #[arg(short, long, default_value = "A")]
    pub letter: String,

    #[clap(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PredicateOptions {
    /// Keep names strictly longer than this
    #[arg(short, long, default_value = "5", allow_negative_numbers = true)]
    pub length: i32,

    #[clap(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UnaryOptions {
    /// Value to double
    #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
    pub value: i32,

    #[clap(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BinaryOptions {
    /// Numbers to sum
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub numbers: Vec<i32>,

    #[clap(flatten)]
    pub output: OutputOptions,
}

/// Result of a name operation, serialized the same way the HTTP endpoint does
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Output {
    Names(Vec<String>),
    Number(i32),
    Text(String),
}

impl Commands {
    fn output(&self) -> &OutputOptions {
        match self {
            Commands::Map(output) | Commands::Supplier(output) | Commands::Consumer(output) => {
                output
            }
            Commands::Filter(options) => &options.output,
            Commands::Predicate(options) => &options.output,
            Commands::Unary(options) => &options.output,
            Commands::Binary(options) => &options.output,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Commands::Map(_) => "MAP",
            Commands::Filter(_) => "FILTER",
            Commands::Predicate(_) => "PREDICATE",
            Commands::Supplier(_) => "SUPPLIER",
            Commands::Consumer(_) => "CONSUMER",
            Commands::Unary(_) => "UNARY",
            Commands::Binary(_) => "BINARY",
        }
    }
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let ops = global.name_operations();

    if global.verbose {
        eprintln!("Names: {}", ops.names().join(", "));
    }

    let output = names_data(&app.command, &ops);

    if app.command.output().json {
        println!("{}", format_json(&output)?);
    } else {
        print!("{}", format_text(app.command.title(), &output));
    }

    Ok(())
}

/// Runs the selected operation and returns its result
pub fn names_data(command: &Commands, ops: &NameOperations) -> Output {
    match command {
        Commands::Map(_) => Output::Names(ops.map_to_upper()),
        Commands::Filter(options) => Output::Names(ops.filter_by_starting_letter(&options.letter)),
        Commands::Predicate(options) => {
            Output::Names(ops.filter_by_length_greater_than(options.length))
        }
        Commands::Supplier(_) => Output::Text(ops.generate_identifier()),
        Commands::Consumer(_) => Output::Names(ops.format_all()),
        Commands::Unary(options) => Output::Number(ops.double(options.value)),
        Commands::Binary(options) => Output::Number(ops.sum(&options.numbers)),
    }
}

/// Convert an output to a JSON string
///
/// Identifiers are printed bare, matching the plain-text HTTP response.
fn format_json(output: &Output) -> Result<String> {
    match output {
        Output::Text(text) => Ok(text.clone()),
        output => {
            serde_json::to_string(output).map_err(|e| Error::Serialization(e.to_string()).into())
        }
    }
}

/// Convert an output to formatted text with colors
fn format_text(title: &str, output: &Output) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", title.bold().bright_cyan()));

    match output {
        Output::Names(names) if names.is_empty() => {
            result.push_str(&format!("{}\n", "(no names)".dimmed()));
        }
        Output::Names(names) => {
            for (index, name) in names.iter().enumerate() {
                result.push_str(&format!(
                    "{} {}\n",
                    format!("{:>2}.", index + 1).dimmed(),
                    name.bright_white()
                ));
            }
        }
        Output::Number(number) => {
            result.push_str(&format!("{}\n", number.to_string().bright_green()));
        }
        Output::Text(text) => {
            result.push_str(&format!("{}\n", text.bright_yellow()));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Commands {
        App::parse_from(std::iter::once("names").chain(args.iter().copied())).command
    }

    fn run_default(args: &[&str]) -> Output {
        names_data(&parse(args), &NameOperations::default())
    }

    #[test]
    fn test_map() {
        assert_eq!(
            run_default(&["map"]),
            Output::Names(
                ["EMMA", "WILLIAM", "JAMES", "SOPHIA", "LUCAS", "SCARLETT", "ELIZABETH", "JOHN"]
                    .map(String::from)
                    .to_vec()
            )
        );
    }

    #[test]
    fn test_filter_default_letter() {
        assert_eq!(run_default(&["filter"]), Output::Names(vec![]));
        assert_eq!(
            run_default(&["filter", "--letter", "S"]),
            Output::Names(vec!["Sophia".into(), "Scarlett".into()])
        );
    }

    #[test]
    fn test_predicate_accepts_negative_length() {
        match run_default(&["predicate", "--length", "-2"]) {
            Output::Names(names) => assert_eq!(names.len(), 8),
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_unary_and_binary() {
        assert_eq!(run_default(&["unary"]), Output::Number(20));
        assert_eq!(run_default(&["unary", "-v", "-3"]), Output::Number(-6));
        assert_eq!(run_default(&["binary", "5", "3", "7"]), Output::Number(15));
        assert_eq!(run_default(&["binary"]), Output::Number(0));
        assert_eq!(run_default(&["binary", "-4", "1"]), Output::Number(-3));
    }

    #[test]
    fn test_supplier_is_identifier() {
        match run_default(&["supplier"]) {
            Output::Text(id) => {
                assert!(streams_core::names::is_canonical_identifier(&id))
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn test_json_flag_per_command() {
        assert!(parse(&["map", "--json"]).output().json);
        assert!(parse(&["filter", "-l", "E", "--json"]).output().json);
        assert!(!parse(&["consumer"]).output().json);
    }

    #[test]
    fn test_format_json_matches_http_body() {
        assert_eq!(
            format_json(&Output::Names(vec!["Name: Emma".into()])).unwrap(),
            r#"["Name: Emma"]"#
        );
        assert_eq!(format_json(&Output::Number(15)).unwrap(), "15");
        assert_eq!(
            format_json(&Output::Text("550e8400-e29b-41d4-a716-446655440000".into())).unwrap(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_format_text() {
        let text = format_text("FILTER", &Output::Names(vec!["Sophia".into(), "Scarlett".into()]));
        assert!(text.contains("FILTER"));
        assert!(text.contains("Sophia"));
        assert!(text.contains("Scarlett"));

        let empty = format_text("FILTER", &Output::Names(vec![]));
        assert!(empty.contains("(no names)"));

        let number = format_text("UNARY", &Output::Number(20));
        assert!(number.contains("20"));
    }
}
