use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drop_four::ai::{Agent, CpuAgent};
use drop_four::config::AppConfig;
use drop_four::game::Game;
use drop_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play drop-token Connect Four in the terminal, or let two CPU players
/// fight it out headless.
#[derive(Parser)]
#[command(name = "drop_four", about = "Connect Four with rule-based CPU players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "drop_four.toml")]
    config: PathBuf,

    /// Play CPU against CPU without the terminal UI
    #[arg(long)]
    headless: bool,

    /// Number of headless games to play
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    games: u32,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of every headless game as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }

    if cli.headless {
        run_headless(&config, cli.games, cli.json)
    } else {
        run_tui(&config)
    }
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config).context("starting game")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal session failed")
}

fn run_headless(config: &AppConfig, games: u32, json: bool) -> Result<()> {
    if !config.both_cpu() {
        bail!("headless mode needs two CPU players (set kind = \"cpu\" for [first] and [second])");
    }

    for index in 0..games {
        let game = play_headless_game(config, index)?;
        println!("game {}: {}", index + 1, describe_result(&game));
        if json {
            let snapshot = serde_json::to_string_pretty(&game.board().snapshot())
                .context("serializing board snapshot")?;
            println!("{snapshot}");
        }
    }
    Ok(())
}

fn play_headless_game(config: &AppConfig, index: u32) -> Result<Game> {
    let (first, second) = (config.first.to_player(), config.second.to_player());
    let seed = config.game.seed.map(|seed| seed.wrapping_add(u64::from(index)));
    let mut game = match seed {
        Some(seed) => Game::with_seed(first, second, seed),
        None => Game::new(first, second),
    };

    let mut agents = Vec::with_capacity(2);
    for (seat, player) in game.players().iter().enumerate() {
        let Some(strategy) = player.strategy() else {
            bail!("{} is not a CPU player", player.name());
        };
        agents.push(match seed {
            Some(seed) => CpuAgent::with_seed(strategy, seed.wrapping_add(seat as u64 + 1)),
            None => CpuAgent::new(strategy),
        });
    }

    game.start()?;
    while !game.is_over() {
        let agent = &mut agents[game.current_seat()];
        let Some(column) = agent.select_column(&game)? else {
            bail!("{} found no column to play", agent.name());
        };
        game.insert(column)?;
    }
    game.stop()?;
    info!(game = index + 1, drops = game.drops_on_board(), "headless game finished");
    Ok(game)
}

fn describe_result(game: &Game) -> String {
    let elapsed = game
        .statistic()
        .map(|s| s.formatted_duration())
        .unwrap_or_default();
    let drops = game.drops_on_board();
    match (game.winner(), game.status().and_then(|s| s.connect_four())) {
        (Some(winner), Some(win)) => {
            format!("{winner} wins on {} after {drops} drops ({elapsed})", win.line_key)
        }
        _ => format!("draw after {drops} drops ({elapsed})"),
    }
}
