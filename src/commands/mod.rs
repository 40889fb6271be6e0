pub mod import;
pub mod status;

/// How a command that ran to completion should exit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RunStatus {
    Clean,
    CompletedWithErrors,
}
