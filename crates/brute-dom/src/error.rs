//! Document error types

use thiserror::Error;

use crate::element::ElementId;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Element not found: {0}")]
    NotFound(ElementId),
}
