use libc;
use nix::sys::select::{select, FdSet};
use nix::sys::signal::{self, SigHandler, Signal};
use nix::sys::termios::{self, LocalFlags, SetArg, Termios};
use nix::sys::time::{TimeVal, TimeValLike};
use std::io::{self, Read, Write};
use std::process;
use std::sync::OnceLock;

const STDIN_FILENO: i32 = libc::STDIN_FILENO;

struct TermiosCell(Termios);
unsafe impl Sync for TermiosCell {}

static ORIGINAL_TERMIOS: OnceLock<TermiosCell> = OnceLock::new();

/// Puts the controlling terminal into raw mode (no canonical line buffering, no local echo)
/// for the lifetime of the returned guard. Dropping the guard restores the settings captured
/// at construction time. A SIGINT handler is installed alongside it so that a host interrupt
/// restores the terminal from the same captured snapshot even if this guard never drops.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn install() -> nix::Result<Self> {
        let mut raw = termios::tcgetattr(STDIN_FILENO)?;
        let _ = ORIGINAL_TERMIOS.set(TermiosCell(raw.clone()));

        raw.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);
        termios::tcsetattr(STDIN_FILENO, SetArg::TCSANOW, &raw)?;

        unsafe {
            signal::signal(Signal::SIGINT, SigHandler::Handler(handle_sigint))?;
        }

        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    if let Some(original) = ORIGINAL_TERMIOS.get() {
        let _ = termios::tcsetattr(STDIN_FILENO, SetArg::TCSANOW, &original.0);
    }
}

extern "C" fn handle_sigint(_signal: libc::c_int) {
    restore();
    println!();
    process::exit(254);
}

/// Non-blocking check for at least one readable byte on stdin.
pub fn key_ready() -> bool {
    let mut readfds = FdSet::new();
    readfds.insert(STDIN_FILENO);

    match select(None, &mut readfds, None, None, &mut TimeVal::zero()) {
        Ok(n) => n > 0,
        Err(_) => false,
    }
}

/// Blocking read of a single byte from stdin.
pub fn read_char() -> u16 {
    let mut buffer = [0; 1];
    io::stdin()
        .read_exact(&mut buffer)
        .expect("unable to read from stdin");

    u16::from(buffer[0])
}

/// Echoes a byte back to the terminal, used by the IN trap.
pub fn echo_char(byte: u8) {
    print!("{}", char::from(byte));
    let _ = io::stdout().flush();
}
