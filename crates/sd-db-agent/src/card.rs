//! Agent card built from the registered tools.

use sd_protocol::{ActionRequest, AgentCard, AgentSkill};

use crate::registry::ToolRegistry;

pub const AGENT_NAME: &str = "DatabaseAgent";

pub fn agent_card(registry: &ToolRegistry, url: &str) -> AgentCard {
    let skills = registry
        .list()
        .map(|tool| {
            let example = ActionRequest::new(tool.action(), tool.example_parameters());
            AgentSkill {
                id: tool.action(),
                name: tool.title().to_string(),
                description: tool.description().to_string(),
                tags: tool.tags().iter().map(|t| t.to_string()).collect(),
                examples: serde_json::to_string(&example).into_iter().collect(),
            }
        })
        .collect();

    AgentCard {
        name: AGENT_NAME.to_string(),
        description: "Answers customer support actions from the order and subscription database"
            .to_string(),
        url: url.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_protocol::SupportAction;

    #[test]
    fn card_lists_every_tool() {
        let card = agent_card(&ToolRegistry::with_defaults(), "http://127.0.0.1:8000");
        assert_eq!(card.name, "DatabaseAgent");
        assert_eq!(card.skills.len(), 5);
        for action in SupportAction::ALL {
            assert!(card.supports(action));
        }
    }

    #[test]
    fn examples_are_request_bodies() {
        let card = agent_card(&ToolRegistry::with_defaults(), "http://localhost");
        let skill = card
            .skills
            .iter()
            .find(|s| s.id == SupportAction::GetOrderStatus)
            .unwrap();
        let example: serde_json::Value = serde_json::from_str(&skill.examples[0]).unwrap();
        assert_eq!(
            example,
            serde_json::json!({"action": "get_order_status", "parameters": {"order_id": "ORD001"}})
        );
        assert_eq!(skill.tags, vec!["order", "status"]);
    }
}
