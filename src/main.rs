use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::constants::{LOG_FILE, REALTIME_FRAME_MS};
use flappy::core::tick::MonotonicClock;
use flappy::input::{map_event, InputResult};
use flappy::ui::TerminalRenderer;
use flappy::utils::persistence::data_path;
use flappy::{
    GameConfig, GameEvent, GameSession, JsonScoreStore, MemoryScoreStore, Renderer, ScoreStore,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config_path: Option<PathBuf>,
    scores_path: Option<PathBuf>,
    seed: Option<u64>,
    no_save: bool,
}

#[derive(Debug, PartialEq)]
enum CliAction {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-v" => return Ok(CliAction::Version),
            "--no-save" => options.no_save = true,
            "--config" => {
                let path = iter.next().ok_or("--config needs a file path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--scores" => {
                let path = iter.next().ok_or("--scores needs a file path")?;
                options.scores_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(CliAction::Run(options))
}

fn print_help() {
    println!("Flappy - terminal arcade game\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --config <path>  Load tuning overrides from a JSON file");
    println!("  --scores <path>  Keep the best score in this file instead of ~/.flappy/best.json");
    println!("  --no-save        Do not read or write the best score");
    println!("  --seed <n>       Seed the pipe generator for a reproducible run");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nControls: Space/Up/click to flap, Enter to restart, Esc to quit.");
}

/// Send log output to ~/.flappy/flappy.log so it never draws over the UI.
fn init_logging() {
    let Ok(path) = data_path(LOG_FILE) else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init();
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("flappy {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(2);
        }
    };

    init_logging();

    let config = match &options.config_path {
        Some(path) => match GameConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid configuration in {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    if options.no_save {
        run(config, MemoryScoreStore::default(), options.seed)
    } else if let Some(path) = options.scores_path {
        run(config, JsonScoreStore::at(path), options.seed)
    } else {
        match JsonScoreStore::new() {
            Ok(store) => run(config, store, options.seed),
            Err(e) => {
                // Logging shares the data dir, so it is likely down too
                let notice = unsaved_score_notice(&e);
                eprintln!("{}", notice);
                log::warn!("{}", notice);
                run(config, MemoryScoreStore::default(), options.seed)
            }
        }
    }
}

fn unsaved_score_notice(err: &io::Error) -> String {
    format!("Warning: best score will not be saved ({})", err)
}

fn run<S: ScoreStore>(config: GameConfig, store: S, seed: Option<u64>) -> io::Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let max_dt = config.max_frame_dt;
    let mut session = match GameSession::new(config, store, rng) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut renderer = TerminalRenderer::new(Terminal::new(backend)?);
    renderer.terminal_mut().hide_cursor()?;

    let result = game_loop(&mut session, &mut renderer, max_dt);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    let terminal = renderer.terminal_mut();
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn game_loop<S: ScoreStore>(
    session: &mut GameSession<S, StdRng>,
    renderer: &mut TerminalRenderer<CrosstermBackend<Stdout>>,
    max_dt: f64,
) -> io::Result<()> {
    let mut clock = MonotonicClock::new(max_dt);
    let frame_budget = Duration::from_millis(REALTIME_FRAME_MS);

    loop {
        let frame_start = Instant::now();

        // Collect every event that arrives within this frame's budget
        while event::poll(frame_budget.saturating_sub(frame_start.elapsed()))? {
            match map_event(&event::read()?) {
                InputResult::Game(input) => session.push_input(input),
                InputResult::Quit => return Ok(()),
                InputResult::Ignored => {}
            }
            if frame_start.elapsed() >= frame_budget {
                break;
            }
        }

        for event in session.run_frame(&mut clock) {
            match event {
                GameEvent::PipeSpawned { .. } | GameEvent::Flapped => {}
                other => log::debug!("{:?}", other),
            }
        }

        renderer.render(&session.snapshot())?;
    }
}
