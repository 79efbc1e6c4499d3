//! End-to-end rendering of the reference scenarios.

#[cfg(test)]
mod tests {
    use intacct_core::{Arguments, Function, IntacctError, SerializerConfig};
    use serde_json::json;

    use crate::render;

    #[test]
    fn test_should_render_create_customer_record() -> anyhow::Result<()> {
        let (xml, node) = render(
            "create",
            "customer",
            json!({ "name": "Acme", "address": { "city": "Reno" } }),
            &SerializerConfig::default(),
        )?;

        assert!(xml.contains(
            "<create><CUSTOMER><name>Acme</name><address><city>Reno</city></address></CUSTOMER></create>"
        ));
        assert_eq!(node.child_names(), ["create"]);
        Ok(())
    }

    #[test]
    fn test_should_render_read_with_joined_keys() -> anyhow::Result<()> {
        let (xml, node) = render(
            "read",
            "customer",
            json!({ "keys": ["1", "2"], "fields": null }),
            &SerializerConfig::default(),
        )?;

        assert!(xml.contains("<object>customer</object><keys>1,2</keys>"));
        let read = node.child("read").expect("read element");
        assert_eq!(read.child_names(), ["object", "keys"]);
        Ok(())
    }

    #[test]
    fn test_should_render_empty_required_query() -> anyhow::Result<()> {
        let (xml, node) = render(
            "readByQuery",
            "customer",
            json!({ "query": "", "fields": ["a", "b"] }),
            &SerializerConfig::default(),
        )?;

        assert!(xml.contains("<query></query>"));
        assert!(xml.contains("<fields>a,b</fields>"));
        let body = node.child("readByQuery").expect("readByQuery element");
        assert_eq!(body.child_names(), ["object", "fields", "query"]);
        Ok(())
    }

    #[test]
    fn test_should_reject_bogus_verb() {
        let result = Function::new("bogus", "customer", Arguments::new());
        match result {
            Err(IntacctError::UnsupportedVerb { verb, allowed }) => {
                assert_eq!(verb, "bogus");
                assert!(allowed.contains("readByQuery"));
            }
            other => panic!("expected UnsupportedVerb, got {other:?}"),
        }
    }
}
