//! Ctrl+C handling
//!
//! While the scaffolder runs, it shares our terminal and receives the interrupt
//! itself. While the scaffolder runs or the components alias is overridden, the
//! parent only records the interrupt and lets the command finish through its
//! normal path, so the alias is restored before the process exits with
//! [`INTERRUPT_EXIT_CODE`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Exit code used after an interrupt (128 + SIGINT)
pub const INTERRUPT_EXIT_CODE: i32 = 130;

static DEFERRING: AtomicUsize = AtomicUsize::new(0);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl+C handler
pub fn install_interrupt_handler() {
    ctrlc::set_handler(move || {
        INTERRUPTED.store(true, Ordering::SeqCst);
        if !exit_deferred() {
            let _ = crate::output::show_cursor();
            std::process::exit(INTERRUPT_EXIT_CODE);
        }
    })
    .ok();
}

/// Whether Ctrl+C was pressed during this run
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub(crate) fn exit_deferred() -> bool {
    DEFERRING.load(Ordering::SeqCst) > 0
}

/// Holds off the immediate exit on Ctrl+C until dropped
#[derive(Debug)]
pub(crate) struct DeferInterrupt;

impl DeferInterrupt {
    pub(crate) fn enter() -> Self {
        DEFERRING.fetch_add(1, Ordering::SeqCst);
        DeferInterrupt
    }
}

impl Drop for DeferInterrupt {
    fn drop(&mut self) {
        DEFERRING.fetch_sub(1, Ordering::SeqCst);
        if interrupted() {
            // Interactive prompts in the child may have hidden the cursor
            let _ = crate::output::show_cursor();
        }
    }
}
