//! Tools keyed by the name the model calls them by.
//!
//! Definitions come back in registration order, so a registry doubles as
//! the ordered catalog handed to a function-calling model.

use pcommon::Registry;

use crate::{Tool, ToolDefinition};

#[derive(Default)]
pub struct ToolRegistry {
    tools: Registry<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers under the definition name. A later tool with the same
    /// name takes over the earlier one's place in the catalog.
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        let name = tool.definition().name.clone();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| tool.definition().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<T> FromIterator<T> for ToolRegistry
where
    T: Tool + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        for tool in iter {
            registry.register(tool);
        }
        registry
    }
}
