//! `halfblock`: play a palette-indexed pixel animation in the terminal.

use std::io;
use std::process::ExitCode;

use halfblock_anim::{load_animation, Animator, ThreadClock};
use log::{debug, error};

mod cli;

use cli::CliArgs;

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet by default so they never mix with frames.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse_env();
    debug!("{args:?}");

    let Some(path) = args.file.as_deref() else {
        println!("No filename provided.");
        return ExitCode::SUCCESS;
    };

    // Load fully before touching the terminal.
    let animation = match load_animation(path) {
        Ok(animation) => animation,
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = install_cleanup_handler() {
        error!("failed to install SIGINT handler: {e}");
        return ExitCode::FAILURE;
    }

    let config = args.playback_config();
    let animator = Animator::new(&config, ThreadClock);
    match animator.play(&animation, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("playback stopped: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn install_cleanup_handler() -> io::Result<()> {
    use halfblock_anim::interrupt::{cleanup_and_exit, install_interrupt_handler};

    install_interrupt_handler(|| cleanup_and_exit()).map(drop)
}

#[cfg(not(unix))]
fn install_cleanup_handler() -> io::Result<()> {
    log::warn!("SIGINT cleanup is only supported on unix");
    Ok(())
}
