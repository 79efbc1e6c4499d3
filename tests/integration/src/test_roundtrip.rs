//! Encoded arguments read back as the same tree.

#[cfg(test)]
mod tests {
    use intacct_core::{ArgumentValue, Arguments, SerializerConfig};
    use intacct_xml::{TagCase, parse_fragment, render_mapping};
    use serde_json::json;

    use crate::render;

    #[test]
    fn test_should_roundtrip_record_through_create() -> anyhow::Result<()> {
        let args = json!({
            "name": "Acme & Sons <West>",
            "contact": {
                "first": "Ann",
                "address": { "city": "Reno", "zip": "89501", "geo": { "lat": "39.5" } },
            },
            "empty": "",
        });
        let (_, node) = render("create", "customer", args.clone(), &SerializerConfig::default())?;

        let record = node.find("create/CUSTOMER").expect("entity element");
        let expected = ArgumentValue::from(args);
        assert_eq!(record.to_value(), expected);
        Ok(())
    }

    #[test]
    fn test_should_roundtrip_arbitrary_depth() -> anyhow::Result<()> {
        let mut args = Arguments::new().with("value", "deepest");
        for depth in (0..40).rev() {
            args = Arguments::new().with(format!("n{depth}"), args);
        }

        let xml = render_mapping(&args, &TagCase::Preserve)?;
        let node = parse_fragment(&format!("<root>{xml}</root>"))?;
        assert_eq!(node.to_value(), ArgumentValue::Mapping(args));
        Ok(())
    }
}
