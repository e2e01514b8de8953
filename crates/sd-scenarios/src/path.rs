use serde_json::Value;

/// Dotted path (`customer.loyalty_tier`) into a nested JSON context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Every segment must be non-empty and consist of
    /// ASCII letters, digits, `_` or `-`.
    pub fn parse(raw: &str) -> Option<Self> {
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        let valid = segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        });
        if !valid {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the path through nested objects.
    ///
    /// Returns `None` when a segment is missing, an intermediate value is not
    /// an object, or the leaf is `null`.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = current.as_object()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn resolves_nested_fields() {
        let ctx = json!({"order": {"shipping": {"carrier": {"name": "UPS"}}}});
        assert_eq!(
            path("order.shipping.carrier.name").resolve(&ctx),
            Some(&json!("UPS"))
        );
    }

    #[test]
    fn resolves_single_segment() {
        let ctx = json!({"tier": "gold"});
        assert_eq!(path("tier").resolve(&ctx), Some(&json!("gold")));
    }

    #[test]
    fn missing_segment_is_unresolved() {
        let ctx = json!({"customer": {"name": "Ada"}});
        assert!(path("customer.email").resolve(&ctx).is_none());
        assert!(path("order.id").resolve(&ctx).is_none());
    }

    #[test]
    fn scalar_intermediate_is_unresolved() {
        let ctx = json!({"customer": "Ada"});
        assert!(path("customer.name").resolve(&ctx).is_none());
    }

    #[test]
    fn arrays_are_not_indexed() {
        let ctx = json!({"orders": [{"id": "ORD001"}]});
        assert!(path("orders.0.id").resolve(&ctx).is_none());
    }

    #[test]
    fn null_leaf_is_unresolved() {
        let ctx = json!({"order": {"eta_date": null}});
        assert!(path("order.eta_date").resolve(&ctx).is_none());
    }

    #[test]
    fn nested_object_leaf_resolves() {
        let ctx = json!({"order": {"id": "ORD001"}});
        assert_eq!(path("order").resolve(&ctx), Some(&json!({"id": "ORD001"})));
    }

    #[test]
    fn rejects_malformed_paths() {
        assert!(FieldPath::parse("").is_none());
        assert!(FieldPath::parse("customer.").is_none());
        assert!(FieldPath::parse(".name").is_none());
        assert!(FieldPath::parse("a..b").is_none());
        assert!(FieldPath::parse("total:>5").is_none());
        assert!(FieldPath::parse("customer name").is_none());
    }
}
