// algoscope: step-by-step replay of classic algorithms in the terminal

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use algoscope::input::Family;
use algoscope::playback::Controller;
use algoscope::ui::App;

const LOG_FILE: &str = "algoscope.log";

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [algorithm] [size]", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    for family in Family::ALL {
        eprintln!("  {:<10} {}", family.id(), family.name());
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}              # Start with bubble sort", program_name);
    eprintln!("  {} quick 25     # Quick sort over 25 values", program_name);
    eprintln!("  {} bfs 10       # Breadth-first traversal of 10 nodes", program_name);
}

/// The TUI owns stdout, so logs go to a file in the temp dir
fn init_logging() -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join(LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algoscope");

    if args.iter().skip(1).any(|a| a == "-h" || a == "--help" || a == "--list") {
        print_usage(program_name);
        return Ok(());
    }

    let family = match args.get(1) {
        Some(name) => match name.parse::<Family>() {
            Ok(family) => family,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        },
        None => Family::Bubble,
    };

    let size_hint = match args.get(2) {
        Some(size) => match size.parse::<usize>() {
            Ok(size) => Some(size),
            Err(_) => {
                eprintln!("Error: size '{}' is not a non-negative integer", size);
                std::process::exit(1);
            }
        },
        None => None,
    };

    init_logging()?;
    info!(family = family.id(), ?size_hint, "starting");

    let mut controller = Controller::from_os_rng(family);
    controller.set_size_hint(size_hint);
    controller.regenerate()?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
