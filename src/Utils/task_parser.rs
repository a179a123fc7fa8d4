//! parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" which has titles and
//! pairs key-vector of values, and read the driver settings from it.
//!
//! A task file for the example driver looks like
//! ```text
//! # lines starting with #, //, % or ; are comments
//! driver
//!  loglevel: info
//!  log_file: auto
//!  clean_logs: true
//!  x_values: 0, 2, 4
//!  examples: 0, 3
//! ```
//! Every key is optional, see `DriverConfig::default`. `log_file: auto` picks a
//! timestamped name, `clean_logs: true` removes old log files before the run.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use simplelog::LevelFilter;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Utils::logger::{log_file_name, parse_loglevel};

pub type SectionMap = HashMap<String, Vec<Value>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// word characters without spaces, first one is a letter or underscore
fn parse_identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = parse_identifier(input)?;
    Ok((input.trim(), result))
}

fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value ends at a comma, whitespace or semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\r' | '\n' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// `key: value1, value2`
fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_identifier, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim_start(), result))
}

/// a title followed by one or more key-value pairs
fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// Filters out comment lines (starting with //, #, %, or ;) and blank lines
fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire document into a HashMap of sections
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;
    Ok((input, sections.into_iter().collect()))
}

/// Parses a whole document after removing comments; leftover text is an error.
pub fn parse_document_as(input: &str) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    if filtered.is_empty() {
        return Ok(DocumentMap::new());
    }
    match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                ));
            }
            Ok(parsed)
        }
        Err(e) => Err(format!("Parsing error: {:?}", e)),
    }
}

//___________________________________DRIVER SETTINGS____________________________________

/// Where the file logger writes.
#[derive(Debug, Clone, PartialEq)]
pub enum LogFile {
    /// timestamped `log_*.txt` in the working directory
    Auto,
    Path(PathBuf),
}

impl LogFile {
    pub fn resolve(&self, dir: &Path) -> PathBuf {
        match self {
            LogFile::Auto => log_file_name(dir),
            LogFile::Path(path) => path.clone(),
        }
    }
}

/// Settings of the example driver, read from the `driver` section of a task file.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub loglevel: LevelFilter,
    /// `None` logs to the terminal only
    pub log_file: Option<LogFile>,
    /// delete `log_*.txt` files from the working directory before the run
    pub clean_logs: bool,
    /// values of X every example is evaluated at
    pub x_values: Vec<i64>,
    /// numbers of the examples to run, `None` runs all of them
    pub examples: Option<Vec<usize>>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            loglevel: LevelFilter::Info,
            log_file: None,
            clean_logs: false,
            x_values: vec![4],
            examples: None,
        }
    }
}

fn single_value<'a>(section: &'a SectionMap, key: &str) -> Result<Option<&'a Value>, String> {
    match section.get(key).map(|values| values.as_slice()) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value)),
        Some(values) => Err(format!("'{}' takes one value, got {}", key, values.len())),
    }
}

fn integer_list(section: &SectionMap, key: &str) -> Result<Option<Vec<i64>>, String> {
    match section.get(key) {
        None => Ok(None),
        Some(values) => values
            .iter()
            .map(|v| {
                v.as_integer()
                    .ok_or_else(|| format!("'{}' must be a list of integers, got '{}'", key, v))
            })
            .collect::<Result<Vec<i64>, String>>()
            .map(Some),
    }
}

impl FromStr for DriverConfig {
    type Err = String;

    /// Builds the settings from task-file text. Sections other than `driver` are ignored.
    fn from_str(input: &str) -> Result<DriverConfig, String> {
        let document = parse_document_as(input)?;
        let mut config = DriverConfig::default();
        let Some(section) = document.get(DriverConfig::SECTION) else {
            return Ok(config);
        };
        if let Some(level) = single_value(section, "loglevel")? {
            config.loglevel = parse_loglevel(&level.to_string())?;
        }
        if let Some(file) = single_value(section, "log_file")? {
            config.log_file = Some(match file.to_string().as_str() {
                "auto" => LogFile::Auto,
                path => LogFile::Path(PathBuf::from(path)),
            });
        }
        if let Some(clean) = single_value(section, "clean_logs")? {
            config.clean_logs = clean
                .as_boolean()
                .ok_or_else(|| format!("'clean_logs' must be true or false, got '{}'", clean))?;
        }
        if let Some(x_values) = integer_list(section, "x_values")? {
            config.x_values = x_values;
        }
        if let Some(examples) = integer_list(section, "examples")? {
            let examples = examples
                .into_iter()
                .map(|n| usize::try_from(n).map_err(|_| format!("example number {} is negative", n)))
                .collect::<Result<Vec<usize>, String>>()?;
            config.examples = Some(examples);
        }
        Ok(config)
    }
}

impl DriverConfig {
    pub const SECTION: &'static str = "driver";

    /// Reads and parses a task file.
    pub fn from_file(path: &Path) -> Result<DriverConfig, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read task file {}: {}", path.display(), e))?;
        content.parse()
    }
}

/////////////////////////////TESTS////////////////////////////////////////////////////
