use thiserror::Error;

/// Fatal startup failures. Once the window is up, the loop has no
/// failure path of its own; closing the window is the only way out.
#[derive(Debug, Error)]
pub enum Error {
    /// The display or graphics subsystem could not create the window.
    #[error("failed to initialize the display: {0}")]
    Init(#[from] eframe::Error),
}
