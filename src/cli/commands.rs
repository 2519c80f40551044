//! CLI command definitions and parsing.

use std::str::FromStr;

use super::errors::CommandParseError;
use crate::catalog::BiasKind;

/// Examples produced by `generate` when no count is given.
pub const DEFAULT_GENERATE_COUNT: usize = 100;

/// bias-lens commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Detect biases in a text.
    Detect {
        /// Text to analyze.
        text: String,
    },

    /// Rewrite a text.
    Correct {
        /// Text to rewrite.
        text: String,
        /// Kinds to address; empty means detect first.
        biases: Vec<BiasKind>,
    },

    /// Detect and correct in one step.
    Analyze {
        /// Text to analyze.
        text: String,
    },

    /// Generate synthetic examples.
    Generate {
        /// Number of examples.
        count: usize,
        /// Seed overriding `GENERATOR_SEED`.
        seed: Option<u64>,
        /// Whether to persist the corpus afterwards.
        save: bool,
    },

    /// Show corpus statistics.
    Stats,

    /// Evaluate the detector against the corpus labels.
    Evaluate,

    /// Show help.
    Help,
}

impl Command {
    /// Parse a command from string arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for a missing or unknown command, an
    /// unknown flag, or a missing or unparsable value.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let Some((first, rest)) = args.split_first() else {
            return Err(CommandParseError::MissingCommand);
        };

        let cmd = first.to_lowercase();
        match cmd.as_str() {
            "detect" => Ok(Self::Detect {
                text: required_text(rest)?,
            }),

            "analyze" => Ok(Self::Analyze {
                text: required_text(rest)?,
            }),

            "correct" => {
                let mut words = Vec::new();
                let mut biases = Vec::new();

                let mut i = 0;
                while i < rest.len() {
                    match rest[i].as_str() {
                        "--biases" | "-b" => {
                            i += 1;
                            let value = rest
                                .get(i)
                                .ok_or_else(|| CommandParseError::MissingValue("--biases".into()))?;
                            biases = parse_kinds(value)?;
                        }
                        flag if flag.starts_with("--") => {
                            return Err(CommandParseError::UnknownFlag(flag.to_string()));
                        }
                        word => words.push(word.to_string()),
                    }
                    i += 1;
                }

                Ok(Self::Correct {
                    text: required_text(&words)?,
                    biases,
                })
            }

            "generate" | "gen" => {
                let mut count = None;
                let mut seed = None;
                let mut save = true;

                let mut i = 0;
                while i < rest.len() {
                    match rest[i].as_str() {
                        "--seed" | "-s" => {
                            i += 1;
                            let value = rest
                                .get(i)
                                .ok_or_else(|| CommandParseError::MissingValue("--seed".into()))?;
                            seed = Some(parse_value("--seed", value)?);
                        }
                        "--no-save" => save = false,
                        flag if flag.starts_with('-') => {
                            return Err(CommandParseError::UnknownFlag(flag.to_string()));
                        }
                        value if count.is_none() => {
                            count = Some(parse_value("count", value)?);
                        }
                        extra => {
                            return Err(CommandParseError::InvalidValue {
                                flag: "count".into(),
                                value: extra.to_string(),
                            });
                        }
                    }
                    i += 1;
                }

                Ok(Self::Generate {
                    count: count.unwrap_or(DEFAULT_GENERATE_COUNT),
                    seed,
                    save,
                })
            }

            "stats" => Ok(Self::Stats),

            "evaluate" | "eval" => Ok(Self::Evaluate),

            "help" | "--help" | "-h" => Ok(Self::Help),

            _ => Err(CommandParseError::UnknownCommand(cmd)),
        }
    }

    /// Seed override carried by the command, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        match self {
            Self::Generate { seed, .. } => *seed,
            _ => None,
        }
    }
}

fn required_text(words: &[String]) -> Result<String, CommandParseError> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        return Err(CommandParseError::MissingValue("text".into()));
    }
    Ok(text)
}

fn parse_kinds(value: &str) -> Result<Vec<BiasKind>, CommandParseError> {
    value
        .split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            BiasKind::from_str(item).map_err(|_| CommandParseError::InvalidValue {
                flag: "--biases".into(),
                value: item.to_string(),
            })
        })
        .collect()
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T, CommandParseError> {
    value.parse().map_err(|_| CommandParseError::InvalidValue {
        flag: flag.into(),
        value: value.to_string(),
    })
}
