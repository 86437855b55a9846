use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::consts::SIGTERM;
use slotplan_solver::core::termination::TerminationCondition;

/// Fires once the process has received SIGINT or SIGTERM. Clones share the same flag, so a single
/// installation serves every instance in a run.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    interrupted: Arc<AtomicBool>,
}

impl OsSignal {
    pub(crate) fn install() -> io::Result<OsSignal> {
        let interrupted = Arc::new(AtomicBool::new(false));

        let _ = signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))?;
        let _ = signal_hook::flag::register(SIGTERM, Arc::clone(&interrupted))?;

        Ok(OsSignal { interrupted })
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }
}
