use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static RECEIVED_CTRL_C: AtomicBool = AtomicBool::new(false);
static INIT: Once = Once::new();

/// Installs a handler that records termination signals. Safe to call multiple
/// times; only the first call installs the handler.
pub fn initialize() {
    INIT.call_once(|| {
        ctrlc::set_handler(|| RECEIVED_CTRL_C.store(true, Ordering::SeqCst))
            .expect("Cannot install signal handler");
    });
}

/// Returns true once a termination signal was received. Long-running solvers
/// poll this between candidates to stop cooperatively.
pub fn received_ctrl_c() -> bool {
    RECEIVED_CTRL_C.load(Ordering::SeqCst)
}
