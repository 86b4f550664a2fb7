/// Scheduler lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("scheduler must be initialized before it runs")]
    NotInitialized,

    #[error("scheduler was already initialized")]
    AlreadyInitialized,

    #[error("scheduler has already run")]
    AlreadyRan,

    #[error("update cadence stopped unexpectedly")]
    UpdateCadenceStopped,
}
