//! Tool registry used by the actions endpoint to dispatch by action name.

use std::collections::HashMap;

use sd_protocol::SupportAction;

use crate::tools::{self, SupportTool};

pub struct ToolRegistry {
    tools: Vec<Box<dyn SupportTool>>,
    /// Action → index into `tools`.
    index: HashMap<SupportAction, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn SupportTool>>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.action(), i))
            .collect();
        Self { tools, index }
    }

    /// All five support tools.
    pub fn with_defaults() -> Self {
        Self::new(tools::all_tools())
    }

    pub fn get(&self, action: SupportAction) -> Option<&dyn SupportTool> {
        self.index.get(&action).map(|&i| self.tools[i].as_ref())
    }

    /// Look up a tool by its wire name.
    pub fn lookup(&self, name: &str) -> Option<&dyn SupportTool> {
        SupportAction::parse(name).and_then(|action| self.get(action))
    }

    /// Tools in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn SupportTool> {
        self.tools.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_with_defaults() {
        let reg = ToolRegistry::with_defaults();
        assert_eq!(reg.len(), 5);
        assert!(!reg.is_empty());
    }

    #[test]
    fn lookup_by_name() {
        let reg = ToolRegistry::with_defaults();
        let tool = reg.lookup("cancel_service").unwrap();
        assert_eq!(tool.action(), SupportAction::CancelService);
        assert!(reg.lookup("drop_tables").is_none());
    }

    #[test]
    fn list_keeps_registration_order() {
        let reg = ToolRegistry::with_defaults();
        let names: Vec<&str> = reg.list().map(|t| t.action().as_str()).collect();
        assert_eq!(
            names,
            vec![
                "get_order_status",
                "get_customer_orders",
                "cancel_service",
                "subscription_status",
                "support_request",
            ]
        );
    }
}
