use std::path::PathBuf;

use slotplan_solver::instance::InstanceError;
use thiserror::Error;

pub(crate) type SlotplanResult<T> = Result<T, SlotplanError>;

#[derive(Error, Debug)]
pub(crate) enum SlotplanError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load {}, more details: {source}", path.display())]
    Instance {
        path: PathBuf,
        source: InstanceError,
    },
    #[error("{0} instance(s) could not be loaded")]
    FailedInstances(usize),
}
