//! Shape preservation and error reporting at the JSON boundary.

use std::collections::HashMap;

use logmask::{
    CustomMatcher, CustomPattern, LogData, MaskError, MaskingPipeline, from_text,
    mask_serializable, mask_value, to_text,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Customer {
    name: String,
    email: String,
    pan: String,
    tags: Vec<String>,
}

mod serializable {
    use super::*;

    #[test]
    fn masks_typed_struct_and_returns_same_type() {
        let customer = Customer {
            name: "Asha Rao".into(),
            email: "asha@example.in".into(),
            pan: "ABCPD1234E".into(),
            tags: vec!["gold".into()],
        };

        let masked = mask_serializable(customer).unwrap();

        assert_eq!(
            masked,
            Customer {
                name: "Asha Rao".into(),
                email: "XXXXXX@XXX.XX".into(),
                pan: "AXXXXXXXXE".into(),
                tags: vec!["gold".into()],
            }
        );
    }

    #[test]
    fn unmasked_records_round_trip() {
        let customer = Customer {
            name: "Ravi".into(),
            email: "none".into(),
            pan: "n/a".into(),
            tags: Vec::new(),
        };

        let text = to_text(&customer).unwrap();
        let back: Customer = from_text(&text).unwrap();

        assert_eq!(back, customer);
    }

    #[test]
    fn non_string_keys_fail_to_serialize() {
        let mut map: HashMap<Vec<u8>, String> = HashMap::new();
        map.insert(vec![1, 2], "x".into());

        let err = mask_serializable(map).unwrap_err();

        assert!(matches!(err, MaskError::Serialization(_)));
    }

    #[test]
    fn mask_that_breaks_a_number_fails_to_deserialize() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Reading {
            meter: u64,
        }

        let err = mask_serializable(Reading {
            meter: 123_456_789_012,
        })
        .unwrap_err();

        assert!(matches!(err, MaskError::Deserialization(_)));
        assert!(err.to_string().starts_with("masked output is not valid JSON"));
    }
}

mod values {
    use super::*;

    #[test]
    fn string_value_stays_a_string() {
        assert_eq!(
            mask_value(json!("dob 1990-12-31")).unwrap(),
            json!("dob XX/XX/XXXX")
        );
    }

    #[test]
    fn scalar_values_pass_through() {
        assert_eq!(mask_value(json!(12.5)).unwrap(), json!(12.5));
        assert_eq!(mask_value(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn log_data_converts_back_to_json() {
        let data = LogData::from(json!({"ip": "8.8.4.4"}));
        assert_eq!(data.shape(), "structured");

        let masked = MaskingPipeline::new().mask(data).unwrap();

        assert_eq!(Value::from(masked), json!({"ip": "8.***.***.4"}));
    }
}

mod configured_pattern {
    use super::*;

    #[test]
    fn custom_pattern_loads_from_json_config() {
        let config: CustomPattern =
            serde_json::from_str(r#"{"pattern": "ORD-[0-9]+", "replacement": "ORD-#"}"#)
                .unwrap();
        let pipeline = MaskingPipeline::new().with_custom(CustomMatcher::try_from(config).unwrap());

        let masked = pipeline
            .mask_value(json!({"order": "ORD-77", "note": "shipped"}))
            .unwrap();

        assert_eq!(masked, json!({"order": "ORD-#", "note": "shipped"}));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let config = CustomPattern {
            pattern: "(unclosed".into(),
            replacement: "x".into(),
        };

        let err = CustomMatcher::try_from(config).unwrap_err();

        assert!(matches!(err, MaskError::InvalidPattern(_)));
    }
}
