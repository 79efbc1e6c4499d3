//! Create and update rendering through the public API.

#[cfg(test)]
mod tests {
    use intacct_core::{IntacctError, SerializerConfig};
    use serde_json::json;

    use crate::{function, render};

    fn nested_arguments() -> serde_json::Value {
        json!({
            "some": "argument",
            "another": "string",
            "nested_as_hash": { "nested_key": "nested value" },
            "another_nested_as_hash": { "another_key": "another value" },
            "nested_as_array": [
                { "first_key": "first_value" },
                { "second_key": "second_value" },
            ],
        })
    }

    #[test]
    fn test_should_wrap_arguments_in_verb_and_entity() -> anyhow::Result<()> {
        for verb in ["create", "update"] {
            let (_, node) = render(
                verb,
                "objecttype",
                nested_arguments(),
                &SerializerConfig::default(),
            )?;
            assert_eq!(node.child_names(), [verb]);
            let record = node
                .find(&format!("{verb}/OBJECTTYPE"))
                .expect("entity element");
            assert_eq!(
                record.child_names(),
                [
                    "some",
                    "another",
                    "nested_as_hash",
                    "another_nested_as_hash",
                    "nested_as_array"
                ]
            );
        }
        Ok(())
    }

    #[test]
    fn test_should_render_nested_hashes_and_arrays() -> anyhow::Result<()> {
        let (_, node) = render(
            "create",
            "objecttype",
            nested_arguments(),
            &SerializerConfig::default(),
        )?;
        let record = node.find("create/OBJECTTYPE").expect("entity element");

        let text = |path: &str| record.find(path).map(|n| n.text.clone());
        assert_eq!(text("some").as_deref(), Some("argument"));
        assert_eq!(
            text("nested_as_hash/nested_key").as_deref(),
            Some("nested value")
        );
        assert_eq!(
            text("nested_as_array/first_key").as_deref(),
            Some("first_value")
        );
        assert_eq!(
            text("nested_as_array/second_key").as_deref(),
            Some("second_value")
        );
        Ok(())
    }

    #[test]
    fn test_should_repeat_line_records_in_order() -> anyhow::Result<()> {
        let (_, node) = render(
            "create",
            "sodocument",
            json!({
                "transactiontype": "Sales Order",
                "sotransitems": [
                    { "sotransitem": { "itemid": "A", "quantity": 1 } },
                    { "sotransitem": { "itemid": "B", "quantity": 2 } },
                ],
            }),
            &SerializerConfig::default(),
        )?;

        assert_eq!(node.child_names(), ["create_sotransaction"]);
        let items = node
            .find("create_sotransaction/sotransitems")
            .expect("items element");
        let ids: Vec<&str> = items
            .children_named("sotransitem")
            .filter_map(|item| item.child("itemid"))
            .map(|id| id.text.as_str())
            .collect();
        assert_eq!(ids, ["A", "B"]);
        Ok(())
    }

    #[test]
    fn test_should_reject_scalar_lists_in_records() -> anyhow::Result<()> {
        let function = function("update", "customer", json!({ "tags": ["a", "b"] }))?;
        let err = function.to_xml().unwrap_err();
        assert!(matches!(err, IntacctError::UnsupportedValueType { .. }));
        Ok(())
    }

    #[test]
    fn test_should_reject_keys_that_cannot_be_element_names() -> anyhow::Result<()> {
        for args in [
            json!({ "bad key": "1" }),
            json!({ "a<b": "1" }),
            json!({ "": "1" }),
            json!({ "lines": [{ "line no": "1" }] }),
        ] {
            let function = function("create", "customer", args.clone())?;
            let err = function.to_xml().unwrap_err();
            assert!(
                matches!(err, IntacctError::InvalidElementName(_)),
                "{args}: {err:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_should_reject_entity_types_that_cannot_be_element_names() -> anyhow::Result<()> {
        let function = function("create", "sales order", json!({ "a": 1 }))?;
        assert!(matches!(
            function.to_xml(),
            Err(IntacctError::InvalidElementName(ref name)) if name == "SALES ORDER"
        ));
        Ok(())
    }
}
