use fb_core::{CoreError, RobotId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("robot {0} appears more than once in the roster")]
    DuplicateRobot(RobotId),

    #[error("robot {0} not found")]
    RobotNotFound(RobotId),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type WorldResult<T> = Result<T, WorldError>;
