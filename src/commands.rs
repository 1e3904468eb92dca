use ncaa_casablanca::config::Config;
use ncaa_casablanca::container::Container;
use ncaa_casablanca::data_fetcher::builders::{ScheduleQueryBuilder, ScoreboardQueryBuilder};
use ncaa_casablanca::data_fetcher::models::GameWrapper;
use ncaa_casablanca::error::AppError;
use ncaa_casablanca::services::ScheduleHelper;
use ncaa_casablanca::sports::{Gender, Season, Sport, filter_sports, sort_sports};

use crate::cli::Command;

/// Runs one subcommand against the given container.
pub async fn run_command(command: &Command, container: &Container) -> Result<(), AppError> {
    match command {
        Command::Sports { season, gender } => {
            handle_sports_command(container, season.as_deref(), gender.as_deref()).await
        }
        Command::Scoreboard {
            gender,
            division,
            date,
        } => {
            handle_scoreboard_command(container, gender.as_str(), division.as_str(), date.as_deref())
                .await
        }
        Command::Live { gender, division } => {
            handle_live_command(container, gender.as_str(), division.as_str()).await
        }
        Command::Upcoming {
            sport,
            division,
            days,
        } => handle_upcoming_command(container, sport, division.as_str(), *days).await,
        Command::Config => Config::display().await,
    }
}

/// Handles the `sports` command.
///
/// Season and gender are validated before anything is fetched.
pub async fn handle_sports_command(
    container: &Container,
    season: Option<&str>,
    gender: Option<&str>,
) -> Result<(), AppError> {
    let season = season.map(str::parse::<Season>).transpose()?;
    let gender = gender.map(str::parse::<Gender>).transpose()?;

    let sports = container.ncaa_sports_service()?.get_sports().await?;
    let mut sports = filter_sports(sports, season, gender);
    sort_sports(&mut sports);

    if sports.is_empty() {
        println!("No sports matched the given filters.");
        return Ok(());
    }

    for line in format_sports_table(&sports, gender.is_none()) {
        println!("{line}");
    }
    Ok(())
}

pub async fn handle_scoreboard_command(
    container: &Container,
    gender: &str,
    division: &str,
    date: Option<&str>,
) -> Result<(), AppError> {
    let mut query = ScoreboardQueryBuilder::new(container.client())
        .for_gender(gender)
        .in_division(division);
    if let Some(date) = date {
        query = query.on_date(date);
    }
    let scoreboard = query.execute().await?;

    print_games(&scoreboard.games, "No games on this scoreboard.");
    Ok(())
}

pub async fn handle_live_command(
    container: &Container,
    gender: &str,
    division: &str,
) -> Result<(), AppError> {
    let games = container
        .basketball_service()
        .get_live_games(gender, division)
        .await?;

    print_games(&games, "No games in progress.");
    Ok(())
}

pub async fn handle_upcoming_command(
    container: &Container,
    sport: &str,
    division: &str,
    days: u32,
) -> Result<(), AppError> {
    let schedules = ScheduleQueryBuilder::new(container.client())
        .for_sport(sport)
        .in_division(division)
        .for_days(days)
        .execute()
        .await?;
    let games = ScheduleHelper.collect_games_from_schedules(&schedules);

    print_games(&games, "No upcoming games found.");
    Ok(())
}

fn print_games(games: &[GameWrapper], empty_message: &str) {
    if games.is_empty() {
        println!("{empty_message}");
        return;
    }
    for game in games {
        println!("{}", format_game_line(game));
    }
}

/// `Away 61 @ Home 70  [final]  07:00PM ET`
pub fn format_game_line(wrapper: &GameWrapper) -> String {
    let game = &wrapper.game;
    let mut line = format!(
        "{} {} @ {} {}  [{}]",
        game.away.names.short, game.away.score, game.home.names.short, game.home.score, game.game_state
    );
    if let Some(start) = game.start_time.as_deref().filter(|s| !s.is_empty()) {
        line.push_str("  ");
        line.push_str(start);
    }
    line
}

/// Header, separator and one row per sport. URL-less sports show `-`.
pub fn format_sports_table(sports: &[Sport], show_gender: bool) -> Vec<String> {
    let header = if show_gender {
        format!("{:8} | {:11} | {:35} | URL", "Season", "Gender", "Sport")
    } else {
        format!("{:8} | {:35} | URL", "Season", "Sport")
    };

    let separator = "-".repeat(header.len());
    let mut lines = vec![header, separator];

    for sport in sports {
        let url = sport.url.as_deref().unwrap_or("-");
        lines.push(if show_gender {
            format!(
                "{:8} | {:11} | {:35} | {url}",
                sport.season.as_str(),
                sport.gender.as_str(),
                sport.name
            )
        } else {
            format!("{:8} | {:35} | {url}", sport.season.as_str(), sport.name)
        });
    }
    lines
}
