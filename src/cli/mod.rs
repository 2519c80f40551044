//! Command-line front end.
//!
//! Arguments are parsed into a [`Command`], executed against a
//! [`BiasService`](crate::service::BiasService), and the
//! [`CommandOutput`] is printed as pretty JSON on stdout.

mod commands;
mod errors;
mod help;
mod output_types;
mod run;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;

pub use commands::{Command, DEFAULT_GENERATE_COUNT};
pub use errors::CommandParseError;
pub use help::help_text;
pub use output_types::{CommandOutput, GenerationOutput, StatsOutput, GENERATION_SAMPLE_SIZE};
pub use run::execute;
