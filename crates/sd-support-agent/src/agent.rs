//! Turns customer messages into database agent actions and the results back
//! into replies.

use serde_json::Value;

use sd_protocol::payload;
use sd_protocol::{ActionParameters, ActionRequest, AgentCard, SupportAction};

use crate::client::{ClientResult, DbAgentClient};
use crate::inference::IntentParser;
use crate::session::Session;

pub const GREETING: &str = "Hello! This is your AI customer support agent. I can talk in full sentences. Please mention your order ID or any relevant ID in your message and I will be happy to assist you.";

pub const UNKNOWN_CUSTOMER: &str =
    "I don't know your customer ID yet. Ask about a specific order first.";

pub struct SupportAgent {
    parser: Box<dyn IntentParser>,
    client: DbAgentClient,
    session: Session,
}

impl SupportAgent {
    pub fn new(parser: Box<dyn IntentParser>, client: DbAgentClient) -> Self {
        Self {
            parser,
            client,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the database agent's card.
    pub async fn discover(&self) -> ClientResult<AgentCard> {
        let card = self.client.agent_card().await?;
        tracing::info!(
            agent = %card.name,
            version = %card.version,
            skills = card.skills.len(),
            "database agent discovered"
        );
        Ok(card)
    }

    /// Answer one customer message.
    pub async fn handle_query(&mut self, text: &str) -> String {
        let Some(parsed) = self.parser.parse(text).await else {
            tracing::info!(tier = self.parser.tier_name(), "message not understood");
            return not_understood(text);
        };
        let action = parsed.intent.action;
        tracing::info!(
            action = %action,
            tier = %parsed.tier,
            confidence = parsed.intent.confidence,
            "intent parsed"
        );

        let parameters = match self.parameters_for(action, parsed.intent.parameters) {
            Ok(p) => p,
            Err(reply) => return reply.to_string(),
        };

        let request = ActionRequest::new(action, parameters.clone());
        let response = match self.client.send(&request).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(action = %action, error = %e, "action failed");
                return format!("Error executing tool {action}: {e}");
            }
        };

        self.reply(action, &parameters, &response.payload)
    }

    /// Parameters to send, or a reply explaining what is missing.
    fn parameters_for(
        &self,
        action: SupportAction,
        parsed: ActionParameters,
    ) -> Result<ActionParameters, &'static str> {
        match action {
            // Customer-keyed actions always use the id learned in this session.
            SupportAction::GetCustomerOrders | SupportAction::SupportRequest => self
                .session
                .customer_id()
                .map(ActionParameters::customer)
                .ok_or(UNKNOWN_CUSTOMER),
            SupportAction::GetOrderStatus => parsed
                .order_id
                .map(ActionParameters::order)
                .ok_or("Sorry, I couldn't find an order ID in your message."),
            SupportAction::CancelService | SupportAction::SubscriptionStatus => parsed
                .subscription_id
                .map(ActionParameters::subscription)
                .ok_or("Sorry, I couldn't find a subscription ID in your message."),
        }
    }

    fn reply(&mut self, action: SupportAction, params: &ActionParameters, data: &Value) -> String {
        if let Some(message) = payload::message_of(data) {
            if let Some(customer_id) = payload::customer_id_of(data) {
                self.session.remember_customer(customer_id);
            }
            return message.to_string();
        }

        if let Some(error) = payload::error_of(data) {
            return error_reply(error, data);
        }

        match action {
            SupportAction::GetOrderStatus => {
                if let Some(customer_id) = payload::customer_id_of(data) {
                    self.session.remember_customer(customer_id);
                }
                format!(
                    "Order {} is '{}'.",
                    params.order_id.as_deref().unwrap_or_default(),
                    str_field(data, "status")
                )
            }
            SupportAction::GetCustomerOrders => {
                let lines: Vec<String> = data["orders"]
                    .as_array()
                    .into_iter()
                    .flatten()
                    .map(|o| format!("{}: {}", str_field(o, "id"), str_field(o, "status")))
                    .collect();
                if lines.is_empty() {
                    "You have no orders.".to_string()
                } else {
                    format!("Your orders:\n{}", lines.join("\n"))
                }
            }
            SupportAction::SubscriptionStatus => {
                let id = str_field(data, "subscription_id");
                let status = str_field(data, "status");
                match data["renewal_date"].as_str() {
                    Some(date) => format!("Subscription {id} is '{status}' (renews on {date})."),
                    None => format!("Subscription {id} is '{status}'."),
                }
            }
            SupportAction::CancelService => format!(
                "Your cancellation request for subscription {} has been received. You will get a confirmation shortly.",
                str_field(data, "subscription_id")
            ),
            SupportAction::SupportRequest => format!(
                "Thank you for raising a support request. You have {} support requests with us. An agent will be with you shortly.",
                data["support_ticket_count"]
            ),
        }
    }
}

fn not_understood(text: &str) -> String {
    format!(
        "Hello Customer! This is an AI agent. We could not parse your message: {text}. You can start by checking your order status in full sentences and providing us with your order ID."
    )
}

fn error_reply(error: &str, data: &Value) -> String {
    if error == payload::PROCESS_FLOW_ERROR {
        let detail = data[payload::DETAIL].as_str().unwrap_or("unknown error");
        return format!("Sorry, something went wrong while preparing your answer: {detail}");
    }
    format!("Sorry, I couldn't help with that: {error}.")
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key].as_str().unwrap_or("unknown")
}
