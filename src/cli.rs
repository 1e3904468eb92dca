use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use ncaa_casablanca::constants::{DEFAULT_UPCOMING_DAYS, MAX_UPCOMING_DAYS};
use ncaa_casablanca::data_fetcher::sport_names::{Division, GenderLabel};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NCAA scores, schedules and sports listings
///
/// Reads the public casablanca scoreboard and schedule feeds and the
/// sports navigation of ncaa.com. Responses are cached for the configured
/// duration within one run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also print logs to stdout. Logs always go to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List NCAA sports by season.
    /// The gender column is left out when filtering by gender.
    Sports {
        /// Fall, Winter or Spring
        #[arg(long, short = 's')]
        season: Option<String>,

        /// Men, Women or Coed
        #[arg(long, short = 'g')]
        gender: Option<String>,
    },

    /// Show a basketball scoreboard
    Scoreboard {
        #[arg(long, short = 'g', value_enum)]
        gender: GenderLabel,

        #[arg(long, short = 'd', value_enum, default_value_t = Division::default())]
        division: Division,

        /// Date in YYYY/MM/DD format. Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// Show basketball games in progress today
    Live {
        #[arg(long, short = 'g', value_enum)]
        gender: GenderLabel,

        #[arg(long, short = 'd', value_enum, default_value_t = Division::default())]
        division: Division,
    },

    /// Show games scheduled from today onward
    Upcoming {
        /// Sport slug, e.g. football or basketball-women
        #[arg(long, short = 's')]
        sport: String,

        #[arg(long, short = 'd', value_enum, default_value_t = Division::default())]
        division: Division,

        /// Number of days starting today
        #[arg(
            long,
            short = 'n',
            default_value_t = DEFAULT_UPCOMING_DAYS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_UPCOMING_DAYS))
        )]
        days: u32,
    },

    /// Show the current configuration
    Config,
}
