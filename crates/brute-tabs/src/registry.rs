//! Controller registry
//!
//! An explicit side-table from (container, base name) to the controller
//! attached there, owned by the caller. Attachment is an upsert: attaching
//! to a container that already holds a controller under the same base name
//! is a no-op, which protects against accidental double-initialization.
//! Every entry point hands the container back so calls chain.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use brute_dom::{Document, ElementId, Selection};

use crate::command::Command;
use crate::config::TabsConfig;
use crate::controller::TabController;
use crate::error::TabsError;
use crate::Result;

pub struct TabsRegistry {
    controllers: Arc<RwLock<HashMap<(ElementId, String), TabController>>>,
}

impl TabsRegistry {
    pub fn new() -> Self {
        Self {
            controllers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Attach a controller to `container` under the config's base name,
    /// constructing one only when none is registered there yet.
    ///
    /// Returns the container id for chaining.
    pub fn attach(&self, doc: &mut Document, container: ElementId, config: TabsConfig) -> ElementId {
        let key = (container, config.base_name.clone());
        if self.controllers.read().contains_key(&key) {
            tracing::debug!(
                container = %container,
                base_name = %key.1,
                "Controller already attached"
            );
            return container;
        }

        let controller = TabController::new(doc, container, config);
        self.controllers.write().insert(key.clone(), controller);

        tracing::info!(container = %container, base_name = %key.1, "Attached tab controller");

        container
    }

    /// Attach independently to every container in the selection.
    ///
    /// Returns the original selection for chaining.
    pub fn attach_all(
        &self,
        doc: &mut Document,
        containers: &Selection,
        config: &TabsConfig,
    ) -> Selection {
        for container in containers.iter() {
            self.attach(doc, container, config.clone());
        }
        containers.clone()
    }

    /// The controller attached to `container` under `base_name`, if any.
    pub fn controller(&self, container: ElementId, base_name: &str) -> Option<TabController> {
        self.controllers
            .read()
            .get(&(container, base_name.to_string()))
            .cloned()
    }

    /// Invoke an operation on the controller attached to `container`.
    ///
    /// Returns the container id for chaining. Calling into a container with
    /// nothing attached is an error rather than a silent lookup failure.
    pub fn call(
        &self,
        doc: &mut Document,
        container: ElementId,
        base_name: &str,
        command: Command,
    ) -> Result<ElementId> {
        let controller =
            self.controller(container, base_name)
                .ok_or_else(|| TabsError::ControllerNotFound {
                    container,
                    base_name: base_name.to_string(),
                })?;

        tracing::debug!(container = %container, method = command.name(), "Dispatching method call");

        match command {
            Command::Activate(tab) => controller.activate(doc, tab, None),
            Command::Destroy => controller.destroy(doc),
        }

        Ok(container)
    }

    /// Destroy the controller attached to `container` and drop it from the
    /// table.
    pub fn detach(&self, doc: &mut Document, container: ElementId, base_name: &str) -> Result<()> {
        let controller = self
            .controllers
            .write()
            .remove(&(container, base_name.to_string()))
            .ok_or_else(|| TabsError::ControllerNotFound {
                container,
                base_name: base_name.to_string(),
            })?;

        controller.destroy(doc);

        tracing::info!(container = %container, base_name = %base_name, "Detached tab controller");

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.controllers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.read().is_empty()
    }
}

impl Default for TabsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabsRegistry {
    fn clone(&self) -> Self {
        Self {
            controllers: Arc::clone(&self.controllers),
        }
    }
}
