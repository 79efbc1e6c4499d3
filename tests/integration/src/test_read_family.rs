//! Read-family argument selection through the public API.

#[cfg(test)]
mod tests {
    use intacct_core::{SerializerConfig, TagCase};
    use serde_json::json;

    use crate::render;

    #[test]
    fn test_should_put_object_first_for_every_read_verb() -> anyhow::Result<()> {
        for verb in ["read", "readByName", "readByQuery", "readMore", "delete"] {
            let (_, node) = render(
                verb,
                "objecttype",
                json!({ "widget": "value", "keys": "k1" }),
                &SerializerConfig::default(),
            )?;
            let body = node.child(verb).expect("verb element");
            assert_eq!(body.children[0].name, "object", "{verb}");
            assert_eq!(body.children[0].text, "objecttype", "{verb}");
            assert!(body.child("widget").is_none(), "{verb}");
        }
        Ok(())
    }

    #[test]
    fn test_should_keep_query_candidate_order() -> anyhow::Result<()> {
        let (_, node) = render(
            "readMore",
            "glentry",
            json!({
                "docparid": "Sales Invoice",
                "pagesize": 100,
                "query": "STATE = 'Posted'",
                "fields": "*",
            }),
            &SerializerConfig::default(),
        )?;

        let body = node.child("readMore").expect("readMore element");
        assert_eq!(
            body.child_names(),
            ["object", "fields", "query", "pagesize", "docparid"]
        );
        assert_eq!(body.find("pagesize").map(|n| n.text.as_str()), Some("100"));
        Ok(())
    }

    #[test]
    fn test_should_omit_blank_delete_keys_by_default() -> anyhow::Result<()> {
        let (xml, _) = render(
            "delete",
            "customer",
            json!({ "keys": "" }),
            &SerializerConfig::default(),
        )?;
        assert!(xml.contains("<delete><object>customer</object></delete>"));

        let strict = SerializerConfig::builder().strict_delete_keys(true).build();
        let (xml, _) = render("delete", "customer", json!({ "keys": "" }), &strict)?;
        assert!(xml.contains("<delete><object>customer</object><keys></keys></delete>"));
        Ok(())
    }

    #[test]
    fn test_should_upper_case_read_arguments_but_not_object() -> anyhow::Result<()> {
        let upper = SerializerConfig::builder().tag_case(TagCase::Upper).build();
        let (_, node) = render("read", "customer", json!({ "keys": [1, 2] }), &upper)?;

        let body = node.child("read").expect("read element");
        assert_eq!(body.child_names(), ["object", "KEYS"]);
        assert_eq!(body.find("KEYS").map(|n| n.text.as_str()), Some("1,2"));
        Ok(())
    }
}
