//! Tabs error types

use brute_dom::{DomError, ElementId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabsError {
    #[error("No controller attached to container {container} under \"{base_name}\"")]
    ControllerNotFound {
        container: ElementId,
        base_name: String,
    },

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}
