// src/cli.rs
//! Command-line front end: read one HTML file, print nodes, form fields or a table.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::{parse_flag, ColumnSpec, OutputShape, TableOptions};
use crate::core::html::parse_document;
use crate::csv::{self, Delim};
use crate::selector::Sel;
use crate::{form, query, table};

#[derive(Parser, Debug)]
#[command(name = "html-harvest", version, about = "Extract nodes, form fields and tables from HTML")]
pub struct Cli {
    /// HTML file to read, `-` for stdin
    pub input: PathBuf,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the outer HTML of every match
    Query {
        selector: String,
        /// Require exactly one match
        #[arg(long)]
        one: bool,
    },
    /// Print the fields of a form as JSON
    Form {
        /// Form to read (default: the only `form`)
        #[arg(short, long)]
        selector: Option<String>,
    },
    /// Print a table
    Table {
        /// Table to read (default: the only `table`)
        #[arg(short, long)]
        selector: Option<String>,
        /// `all`, indices (`0,2`) or header names (`Name,Age`)
        #[arg(long, default_value = "all")]
        only: ColumnSpec,
        #[arg(long)]
        except: Option<ColumnSpec>,
        /// `lists` or `maps`
        #[arg(long = "as", default_value = "lists")]
        shape: OutputShape,
        /// Include the header row (lists only)
        #[arg(long, default_value = "true", action = ArgAction::Set, value_parser = parse_headers)]
        headers: bool,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Tsv,
}

fn parse_headers(s: &str) -> crate::Result<bool> {
    parse_flag("headers", s)
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let source = read_input(&cli.input)?;
    let doc = parse_document(&source);

    match cli.command {
        Command::Query { selector, one } => {
            let found = if one {
                vec![query::find_one(&doc, selector)?]
            } else {
                query::all(&doc, selector)?
            };
            for el in found {
                println!("{}", el.html());
            }
        }
        Command::Form { selector } => {
            let fields = form::materialize_form(&doc, selector.map(Sel::from))?;
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        Command::Table { selector, only, except, shape, headers, format } => {
            let mut opts = TableOptions::new().shape(shape).only(only).headers(headers);
            opts.except = except;
            let extracted = table::extract_table(&doc, selector.map(Sel::from), &opts)?;
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&extracted)?),
                Format::Csv => print!("{}", csv::table_to_string(&extracted, Delim::Csv)),
                Format::Tsv => print!("{}", csv::table_to_string(&extracted, Delim::Tsv)),
            }
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = s!();
        io::stdin().read_to_string(&mut buf).wrap_err("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))
}
