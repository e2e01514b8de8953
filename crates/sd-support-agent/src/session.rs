//! Per-conversation memory.

/// What the agent has learned about the customer so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    customer_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// Remember the customer. A later id replaces an earlier one.
    pub fn remember_customer(&mut self, customer_id: &str) {
        if self.customer_id.as_deref() != Some(customer_id) {
            tracing::debug!(customer_id, "customer identified");
            self.customer_id = Some(customer_id.to_string());
        }
    }

    pub fn forget(&mut self) {
        self.customer_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_latest_customer() {
        let mut session = Session::new();
        assert!(session.customer_id().is_none());
        session.remember_customer("C001");
        session.remember_customer("C003");
        assert_eq!(session.customer_id(), Some("C003"));
        session.forget();
        assert!(session.customer_id().is_none());
    }
}
