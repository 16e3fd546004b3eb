// Terminal UI lives in the binary, next to the crossterm host loop
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappberry::audio::{AudioSink, ChannelAudio};
use flappberry::build_info;
use flappberry::config::GameConfig;
use flappberry::constants::LOG_FILE;
use flappberry::game::{FrameInput, Game};
use flappberry::render::{RecordingSink, SurfaceStatus};
use flappberry::score::JsonScoreStore;
use flappberry::utils::persistence::save_path;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};
use ui::game_scene::{play_area, render_game, viewport_for, Hud};
use ui::KeyCommand;

/// Target frame pacing.
const FRAME_TIME: Duration = Duration::from_millis(16);

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    seed: Option<u64>,
    debug: bool,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappberry --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging()?;
    log::info!("flappberry {} starting", build_info::version_line());

    let config = GameConfig::load();
    let rng = match options.seed.or(config.seed) {
        Some(seed) => {
            log::info!("seeded run: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let store = JsonScoreStore::new()?;
    let mut game = Game::new(config, Box::new(store), rng);
    game.state.debug = options.debug;

    let (audio, audio_thread) = ChannelAudio::spawn(|sound| {
        log::debug!("play {}", sound.name());
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game, &audio);

    // Restore the terminal before surfacing any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(audio);
    if audio_thread.join().is_err() {
        log::warn!("audio thread panicked");
    }

    match &result {
        Ok(()) => log::info!("session ended, best score {}", game.state.best),
        Err(e) => log::error!("session aborted: {}", e),
    }
    result
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("flappberry {}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--debug" => options.debug = true,
            other => return Err(format!("Unknown command: {}", other)),
        }
    }

    Ok(options)
}

fn print_help() {
    println!("Flappberry - terminal flappy arcade\n");
    println!("Usage: flappberry [options]\n");
    println!("Options:");
    println!("  --seed <N>  Seed obstacle and particle randomness");
    println!("  --debug     Start with collision rectangles shown");
    println!("  --version   Show version information");
    println!("  --help      Show this help message\n");
    println!("Keys: Space/Up flap, P pause, F1 debug, Esc/Q quit");
}

/// Log to ~/.flappberry/flappberry.log; the terminal is busy with the game.
fn init_logging() -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(save_path(LOG_FILE)?)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game<StdRng>,
    audio: &dyn AudioSink,
) -> io::Result<()> {
    let mut scene = RecordingSink::new();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Collect this frame's press edges
        let mut input = FrameInput::none();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match ui::key_command(&key) {
                    Some(KeyCommand::Quit) => return Ok(()),
                    Some(KeyCommand::Game(action)) => input.press(action),
                    None => {}
                }
            }
        }

        let size = terminal.size()?;
        game.resize(viewport_for(play_area(size)));

        let dt = frame_start.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = frame_start;
        game.frame(dt, input);
        game.flush_audio(audio);

        scene.clear();
        game.render(&mut scene);
        let hud = Hud {
            state: &game.state,
            pipes: game.pipes.len(),
            particles: game.particles.system().active_count(),
            can_retry: game.can_restart(),
        };
        let viewport = game.viewport;
        let drawn = terminal.draw(|frame| {
            let area = frame.size();
            render_game(frame, area, &scene, &viewport, &hud);
        });

        if let Err(e) = drawn {
            let status = SurfaceStatus::from_error(&e);
            if status.is_transient() {
                log::info!("skipped frame: {:?}", status);
            } else {
                log::error!("render surface failed: {:?}", status);
                return Err(e);
            }
        }

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
