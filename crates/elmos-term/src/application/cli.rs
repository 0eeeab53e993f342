#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use clap::Arg;
use clap::ArgAction;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn parse_tick_rate(value: &str) -> Result<String, String> {
    return match value.parse::<u64>() {
        Ok(millis) if millis > 0 => Ok(millis.to_string()),
        _ => Err(format!("'{value}' is not a positive number of milliseconds")),
    };
}

fn arg(key: ConfigKey, env: &str, help: &str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env.to_string())
        .num_args(1)
        .action(ArgAction::Set)
        .help(format!("{help} [default: {}]", Config::default(key)));
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options")
        .arg_required_else_help(true)
        .subcommand(Command::new("default").about("Print the default config file"));
}

pub fn build() -> Command {
    return Command::new("elmos-console")
        .about("Interactive menu console for the elmos build tool")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_config())
        .arg(arg(
            ConfigKey::ConfigFile,
            "ELMOS_CONSOLE_CONFIG_FILE",
            "Path to the console config file",
        ))
        .arg(
            arg(
                ConfigKey::Executable,
                "ELMOS_CONSOLE_EXECUTABLE",
                "Program every menu action invokes",
            )
            .short('e'),
        )
        .arg(arg(
            ConfigKey::LogFile,
            "ELMOS_CONSOLE_LOG_FILE",
            "File the console writes its own logs to",
        ))
        .arg(
            arg(
                ConfigKey::LogLevel,
                "ELMOS_CONSOLE_LOG_LEVEL",
                "Verbosity of the console log file",
            )
            .value_parser(LOG_LEVELS),
        )
        .arg(
            arg(
                ConfigKey::TickRate,
                "ELMOS_CONSOLE_TICK_RATE",
                "Spinner refresh interval in milliseconds",
            )
            .value_parser(parse_tick_rate),
        );
}
