use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

static WORKING_DIR: Mutex<()> = Mutex::new(());

/// Serializes tests that change or depend on the process working directory
/// and restores it on drop.
pub(crate) struct WorkingDir {
    previous: PathBuf,
    _guard: MutexGuard<'static, ()>,
}

impl WorkingDir {
    pub fn lock() -> WorkingDir {
        let guard = WORKING_DIR.lock().unwrap_or_else(PoisonError::into_inner);
        WorkingDir {
            previous: std::env::current_dir().unwrap(),
            _guard: guard,
        }
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
