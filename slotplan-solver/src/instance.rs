use std::path::Path;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::directives::parse_directives;
use crate::directives::DirectiveError;
use crate::model::ModelError;
use crate::model::ScheduleModel;

/// Why an instance file could not be turned into a model.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Directive(#[from] DirectiveError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Reads and builds the instance stored at `path`.
pub fn read_instance(path: &Path) -> Result<ScheduleModel, InstanceError> {
    let source = std::fs::read_to_string(path).map_err(|source| InstanceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("read {}", path.display());

    parse_instance(&source)
}

/// Builds the instance written in `source`.
pub fn parse_instance(source: &str) -> Result<ScheduleModel, InstanceError> {
    let directives = parse_directives(source)?;
    info!("parsed {} directives", directives.len());

    Ok(ScheduleModel::build(&directives)?)
}
