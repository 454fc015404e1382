//! csvorm command-line tool.

use clap::{ColorChoice, Parser};
use csvorm_cli::commands::{ConvertRequest, InspectRequest, run_convert, run_inspect, run_schema};
use csvorm_cli::logging::{LogConfig, LogFormat, init_logging};
use csvorm_cli::summary::{print_convert, print_inspect, print_schema};
use csvorm_model::HeaderOption;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, ConvertArgs, InspectArgs, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Schema(args) => run_schema(&args.schema).map(|report| print_schema(&report)),
        Command::Inspect(args) => {
            run_inspect(&inspect_request(args)).map(|result| print_inspect(&result))
        }
        Command::Convert(args) => {
            run_convert(&convert_request(args)).map(|result| print_convert(&result))
        }
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn inspect_request(args: &InspectArgs) -> InspectRequest {
    InspectRequest {
        input: args.input.clone(),
        schema: args.schema.clone(),
        header: HeaderOption::from(!args.no_header),
        delimiter: args.delimiter,
        limit: args.limit,
    }
}

fn convert_request(args: &ConvertArgs) -> ConvertRequest {
    ConvertRequest {
        input: args.input.clone(),
        schema: args.schema.clone(),
        output: args.output.clone(),
        input_header: HeaderOption::from(!args.no_header),
        output_header: HeaderOption::from(!args.no_output_header),
        delimiter: args.delimiter,
        output_delimiter: args.output_delimiter.unwrap_or(args.delimiter),
        columns: args.columns.clone(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
