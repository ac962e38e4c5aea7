//! SIGINT handling for playback.
//!
//! The listener runs on its own thread next to the render loop. It shares no
//! state with the renderer; on delivery it takes the stdout lock, writes the
//! restore sequence and exits the process while still holding the lock, so
//! nothing the renderer writes can land after the cleanup bytes.

use std::io;
use std::process;
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use signal_hook::consts::SIGINT;
use signal_hook::iterator::Signals;

use crate::animation::write_cleanup;

/// Register for SIGINT and spawn a thread calling `on_interrupt` on each delivery.
///
/// Once registered, SIGINT no longer terminates the process by default; the
/// callback is responsible for exiting.
pub fn install_interrupt_handler<F>(on_interrupt: F) -> io::Result<JoinHandle<()>>
where
    F: Fn() + Send + 'static,
{
    let mut signals = Signals::new([SIGINT])?;

    thread::Builder::new()
        .name("sigint-listener".into())
        .spawn(move || {
            for signal in signals.forever() {
                debug!("received signal {signal}");
                on_interrupt();
            }
        })
}

/// Restore the terminal on stdout and exit with success status.
pub fn cleanup_and_exit() -> ! {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = write_cleanup(&mut lock) {
        warn!("failed to restore terminal: {e}");
    }
    process::exit(0)
}
