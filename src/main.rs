//! main.rs
//! Entry point for the globber

use file_globber::app::Session;
use file_globber::config::Config;
use file_globber::core::terminal;
use file_globber::utils::cli::handle_args;
use file_globber::utils::logging::init_logging;
use file_globber::utils::{default_start_dir, resolve_start_dir};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[globber] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let Some(options) = handle_args() else {
        return Ok(());
    };

    if let Some(log_path) = init_logging() {
        tracing::info!(log = %log_path.display(), "logging enabled");
    }

    let config = Config::load();

    let start = match options.path {
        Some(path_arg) => {
            let target = resolve_start_dir(&path_arg);
            if !target.is_dir() {
                eprintln!("\n[globber] Error: Path '{}' cannot be opened.", path_arg);
                std::process::exit(1);
            }
            target
        }
        None => default_start_dir(),
    };
    tracing::info!(start = %start.display(), "starting session");

    let mut session = Session::new(&config, start, options.quit_key);
    terminal::run_terminal(&mut session)
}
