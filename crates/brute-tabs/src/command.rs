//! Method-call surface
//!
//! The operations invocable by name on an attached controller form a closed
//! set, dispatched through an explicit match in the registry. Unknown names
//! fail loudly at parse time instead of falling through to a missing
//! method lookup.

use crate::error::TabsError;
use crate::tab_ref::TabRef;

#[derive(Debug, Clone)]
pub enum Command {
    /// Switch the active tab
    Activate(TabRef),
    /// Unbind the controller's event handlers
    Destroy,
}

impl Command {
    /// Parse a method name plus optional tab argument.
    ///
    /// `"change"` is accepted as an alias for `"activate"`; an activation
    /// without an argument targets the first tab.
    pub fn parse(name: &str, tab: Option<TabRef>) -> Result<Self, TabsError> {
        match name.to_lowercase().as_str() {
            "activate" | "change" => Ok(Command::Activate(tab.unwrap_or(TabRef::Index(0)))),
            "destroy" => Ok(Command::Destroy),
            _ => Err(TabsError::UnknownMethod(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Activate(_) => "activate",
            Command::Destroy => "destroy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_activate_and_alias() {
        assert!(matches!(
            Command::parse("activate", Some(TabRef::Index(2))).unwrap(),
            Command::Activate(TabRef::Index(2))
        ));
        assert!(matches!(
            Command::parse("change", None).unwrap(),
            Command::Activate(TabRef::Index(0))
        ));
    }

    #[test]
    fn test_parse_destroy() {
        assert!(matches!(
            Command::parse("Destroy", None).unwrap(),
            Command::Destroy
        ));
    }

    #[test]
    fn test_parse_unknown_method_is_loud() {
        let err = Command::parse("explode", None).unwrap_err();
        assert!(matches!(err, TabsError::UnknownMethod(name) if name == "explode"));
    }
}
