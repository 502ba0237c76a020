//! Build flat parameter maps from configuration records.

use crate::descriptor::{CliParams, ParamSource};
use crate::error::{Error, Result};
use crate::types::{FieldKind, FieldRef};
use std::collections::BTreeMap;

/// Export key to CLI parameter value
pub type Params = BTreeMap<String, String>;

/// Marshal a configuration source into CLI parameters.
///
/// Fields are visited in declaration order. Unknown and null tri-state values,
/// empty plain strings and absent references are left out; booleans are always
/// present. The first unsupported field aborts the whole call.
pub fn to_params<S: ParamSource + ?Sized>(source: &S) -> Result<Params> {
    let mut out = Params::new();

    let Some(record) = source.resolve() else {
        return Ok(out);
    };

    for field in <S::Record as CliParams>::fields() {
        let key = field.key();
        if let Some(value) = render(key, field.read(record))? {
            out.insert(key.to_string(), value);
        }
    }

    Ok(out)
}

/// Check a record's descriptor table once, without marshalling real data.
///
/// Reports the first field whose type has no rendering, with the same error
/// [`to_params`] would return for it.
pub fn validate_fields<C: CliParams + Default>() -> Result<()> {
    let record = C::default();

    for field in C::fields() {
        if let FieldKind::Unsupported(type_name) = field.read(&record).kind() {
            return Err(Error::UnsupportedFieldType {
                type_name,
                key: field.key(),
            });
        }
    }

    Ok(())
}

fn render(key: &'static str, field: FieldRef<'_>) -> Result<Option<String>> {
    let value = match field {
        FieldRef::OptionalString(value) => value.as_known().cloned(),
        FieldRef::OptionalBool(value) => value.as_known().map(bool::to_string),
        FieldRef::Bool(value) => Some(value.to_string()),
        FieldRef::String(value) => (!value.is_empty()).then(|| value.to_string()),
        FieldRef::NullableString(value) => value.map(str::to_string),
        FieldRef::MultiValued(value) => value
            .map(|map| serde_json::to_string(map).map_err(|source| Error::Encode { key, source }))
            .transpose()?,
        FieldRef::Unsupported(type_name) => {
            return Err(Error::UnsupportedFieldType { type_name, key });
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_params;
    use crate::types::{MultiValued, Value};
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Subaccount {
        display_name: String,
        description: Value<String>,
        beta_enabled: bool,
        used_for_production: Value<bool>,
        parent_id: Option<String>,
        labels: Option<MultiValued>,
        note: String,
    }

    cli_params!(Subaccount {
        display_name => "displayName",
        description => "description",
        beta_enabled => "betaEnabled",
        used_for_production => "usedForProduction",
        parent_id => "directoryID",
        labels => "labels",
    });

    #[derive(Debug, Default)]
    struct Untagged {
        name: String,
    }

    cli_params!(Untagged {});

    #[derive(Debug, Default)]
    struct Entitlement {
        plan: String,
        amount: i64,
        enabled: bool,
    }

    cli_params!(Entitlement {
        plan => "servicePlanName",
        amount => "amount",
        enabled => "enable",
    });

    #[derive(Debug, Default)]
    struct Shadowed {
        first: String,
        second: String,
    }

    cli_params!(Shadowed {
        first => "name",
        second => "name",
    });

    #[test]
    fn test_untagged_record_is_empty() {
        let params = to_params(&Untagged {
            name: "x".to_string(),
        })
        .unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_full_record() {
        let mut labels = MultiValued::new();
        labels.insert("a".to_string(), vec!["x".to_string(), "y".to_string()]);

        let sub = Subaccount {
            display_name: "dev".to_string(),
            description: Value::known("team sandbox".to_string()),
            beta_enabled: true,
            used_for_production: Value::Known(false),
            parent_id: Some("dir-1".to_string()),
            labels: Some(labels),
            note: "never exported".to_string(),
        };

        let params = to_params(&sub).unwrap();
        assert_eq!(params.len(), 6);
        assert_eq!(params["displayName"], "dev");
        assert_eq!(params["description"], "team sandbox");
        assert_eq!(params["betaEnabled"], "true");
        assert_eq!(params["usedForProduction"], "false");
        assert_eq!(params["directoryID"], "dir-1");
        assert_eq!(params["labels"], r#"{"a":["x","y"]}"#);
        assert!(!params.contains_key("note"));
    }

    #[test]
    fn test_unknown_and_null_are_omitted() {
        for value in [Value::Unknown, Value::Null] {
            let sub = Subaccount {
                description: value,
                used_for_production: Value::Unknown,
                ..Default::default()
            };
            let params = to_params(&sub).unwrap();
            assert!(!params.contains_key("description"));
            assert!(!params.contains_key("usedForProduction"));
        }
    }

    #[test]
    fn test_present_empty_optional_string_is_kept() {
        let sub = Subaccount {
            description: Value::known(String::new()),
            ..Default::default()
        };
        let params = to_params(&sub).unwrap();
        assert_eq!(params.get("description").map(String::as_str), Some(""));
    }

    #[test]
    fn test_false_bool_is_emitted() {
        let params = to_params(&Subaccount::default()).unwrap();
        assert_eq!(params["betaEnabled"], "false");
    }

    #[test]
    fn test_empty_plain_string_is_omitted() {
        let params = to_params(&Subaccount::default()).unwrap();
        assert!(!params.contains_key("displayName"));
        assert!(!params.contains_key("directoryID"));
        assert!(!params.contains_key("labels"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_nullable_string_keeps_empty_value() {
        let sub = Subaccount {
            parent_id: Some(String::new()),
            ..Default::default()
        };
        let params = to_params(&sub).unwrap();
        assert_eq!(params["directoryID"], "");
    }

    #[test]
    fn test_multi_valued_json_sorted_keys() {
        let mut labels = MultiValued::new();
        labels.insert("z".to_string(), vec![]);
        labels.insert("b".to_string(), vec!["2".to_string(), "1".to_string()]);
        let sub = Subaccount {
            labels: Some(labels),
            ..Default::default()
        };
        let params = to_params(&sub).unwrap();
        assert_eq!(params["labels"], r#"{"b":["2","1"],"z":[]}"#);

        let decoded: MultiValued = serde_json::from_str(&params["labels"]).unwrap();
        assert_eq!(decoded["b"], vec!["2", "1"]);
    }

    #[test]
    fn test_unsupported_field_fails_whole_call() {
        let entitlement = Entitlement {
            plan: "standard".to_string(),
            amount: 3,
            enabled: true,
        };
        let err = to_params(&entitlement).unwrap_err();
        match err {
            Error::UnsupportedFieldType { type_name, key } => {
                assert_eq!(type_name, "i64");
                assert_eq!(key, "amount");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_field_fails_even_when_zero() {
        let err = to_params(&Entitlement::default()).unwrap_err();
        assert!(err.to_string().contains("'amount'"));
        assert!(err.is_schema_defect());
    }

    #[test]
    fn test_absent_source_is_empty() {
        let absent: Option<Subaccount> = None;
        assert!(to_params(&absent).unwrap().is_empty());

        let nested: Box<Option<Rc<Subaccount>>> = Box::new(None);
        assert!(to_params(&nested).unwrap().is_empty());

        // absence wins over an unsupported table
        let no_entitlement: Option<&Entitlement> = None;
        assert!(to_params(&no_entitlement).unwrap().is_empty());
    }

    #[test]
    fn test_nested_source_matches_record() {
        let sub = Subaccount {
            display_name: "prod".to_string(),
            ..Default::default()
        };
        let direct = to_params(&sub).unwrap();
        let wrapped = to_params(&Some(Box::new(Some(&sub)))).unwrap();
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let params = to_params(&Shadowed {
            first: "a".to_string(),
            second: "b".to_string(),
        })
        .unwrap();
        assert_eq!(params["name"], "b");

        // an omitted later field does not clear the earlier one
        let params = to_params(&Shadowed {
            first: "a".to_string(),
            second: String::new(),
        })
        .unwrap();
        assert_eq!(params["name"], "a");
    }

    #[test]
    fn test_validate_fields() {
        assert!(validate_fields::<Subaccount>().is_ok());
        assert!(validate_fields::<Untagged>().is_ok());

        let err = validate_fields::<Entitlement>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "the type 'i64' assigned to 'amount' is not yet supported"
        );
    }
}
