//! Request records for the BTP CLI and their parameter tables.
//!
//! Each record mirrors the configuration block of one resource. Field names
//! follow the configuration documents (snake_case); export keys follow the
//! CLI's parameter names.

use cliparams::{CliParams, MultiValued, ParamSource, Params, Value, cli_params};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// Accounts
// ============================================================================

/// Create a subaccount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubaccountCreate {
    pub name: String,
    pub subdomain: String,
    pub region: String,
    pub description: Value<String>,
    pub parent_id: Value<String>,
    pub beta_enabled: bool,
    pub usage: Value<String>,
    pub labels: Option<MultiValued>,
}

cli_params!(SubaccountCreate {
    name => "displayName",
    subdomain => "subdomain",
    region => "region",
    description => "description",
    parent_id => "directoryID",
    beta_enabled => "betaEnabled",
    usage => "usedForProduction",
    labels => "labels",
});

/// Create a directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryCreate {
    pub name: String,
    pub description: Value<String>,
    pub parent_id: Value<String>,
    pub subdomain: Value<String>,
    pub labels: Option<MultiValued>,
}

cli_params!(DirectoryCreate {
    name => "displayName",
    description => "description",
    parent_id => "parentID",
    subdomain => "subdomain",
    labels => "labels",
});

// ============================================================================
// Security
// ============================================================================

/// Create a role collection in a subaccount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleCollectionCreate {
    pub subaccount_id: String,
    pub name: String,
    pub description: Value<String>,
}

cli_params!(RoleCollectionCreate {
    subaccount_id => "subaccount",
    name => "roleCollectionName",
    description => "description",
});

/// A role referenced by a role collection.
///
/// Added to or removed from the collection one call at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleReference {
    pub subaccount_id: String,
    pub role_collection: String,
    pub name: String,
    pub role_template_app_id: String,
    pub role_template_name: String,
    /// Informational only; never sent and ignored when comparing
    pub description: String,
}

cli_params!(RoleReference {
    subaccount_id => "subaccount",
    role_collection => "roleCollectionName",
    name => "roleName",
    role_template_app_id => "roleTemplateAppID",
    role_template_name => "roleTemplateName",
});

impl RoleReference {
    /// Bind this role to the collection it is added to or removed from
    pub fn in_collection(mut self, subaccount_id: &str, role_collection: &str) -> Self {
        self.subaccount_id = subaccount_id.to_string();
        self.role_collection = role_collection.to_string();
        self
    }
}

/// Two role references denote the same role
pub fn same_role(a: &RoleReference, b: &RoleReference) -> bool {
    a.name == b.name
        && a.role_template_app_id == b.role_template_app_id
        && a.role_template_name == b.role_template_name
}

/// A role collection with its roles, as found in desired or current state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleCollectionState {
    pub subaccount_id: String,
    pub name: String,
    pub description: Value<String>,
    pub roles: Vec<RoleReference>,
}

// ============================================================================
// Services
// ============================================================================

/// Create a service instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInstanceCreate {
    pub subaccount_id: String,
    pub name: String,
    pub serviceplan_id: String,
    /// Instance parameters as a JSON string, passed through untouched
    pub parameters: Option<String>,
    pub shared: Value<bool>,
    pub labels: Option<MultiValued>,
}

cli_params!(ServiceInstanceCreate {
    subaccount_id => "subaccount",
    name => "name",
    serviceplan_id => "plan",
    parameters => "parameters",
    shared => "shared",
    labels => "labels",
});

// ============================================================================
// Registry
// ============================================================================

/// Request kinds that can be marshalled from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RequestKind {
    Subaccount,
    Directory,
    RoleCollection,
    RoleReference,
    ServiceInstance,
}

impl RequestKind {
    /// All request kinds
    pub fn all() -> &'static [RequestKind] {
        &[
            RequestKind::Subaccount,
            RequestKind::Directory,
            RequestKind::RoleCollection,
            RequestKind::RoleReference,
            RequestKind::ServiceInstance,
        ]
    }

    /// The CLI command the parameters are meant for
    pub fn command(&self) -> &'static str {
        match self {
            RequestKind::Subaccount => "create accounts/subaccount",
            RequestKind::Directory => "create accounts/directory",
            RequestKind::RoleCollection => "create security/role-collection",
            RequestKind::RoleReference => "add security/role",
            RequestKind::ServiceInstance => "create services/instance",
        }
    }

    /// Decode a document into this kind's record and marshal it
    pub fn marshal(&self, document: serde_json::Value) -> cliparams::Result<Params> {
        match self {
            RequestKind::Subaccount => marshal_as::<SubaccountCreate>(document),
            RequestKind::Directory => marshal_as::<DirectoryCreate>(document),
            RequestKind::RoleCollection => marshal_as::<RoleCollectionCreate>(document),
            RequestKind::RoleReference => marshal_as::<RoleReference>(document),
            RequestKind::ServiceInstance => marshal_as::<ServiceInstanceCreate>(document),
        }
    }

    /// Check this kind's field table without any data
    pub fn validate(&self) -> cliparams::Result<()> {
        match self {
            RequestKind::Subaccount => cliparams::validate_fields::<SubaccountCreate>(),
            RequestKind::Directory => cliparams::validate_fields::<DirectoryCreate>(),
            RequestKind::RoleCollection => cliparams::validate_fields::<RoleCollectionCreate>(),
            RequestKind::RoleReference => cliparams::validate_fields::<RoleReference>(),
            RequestKind::ServiceInstance => cliparams::validate_fields::<ServiceInstanceCreate>(),
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Subaccount => write!(f, "subaccount"),
            RequestKind::Directory => write!(f, "directory"),
            RequestKind::RoleCollection => write!(f, "role-collection"),
            RequestKind::RoleReference => write!(f, "role-reference"),
            RequestKind::ServiceInstance => write!(f, "service-instance"),
        }
    }
}

fn marshal_as<T>(document: serde_json::Value) -> cliparams::Result<Params>
where
    T: CliParams + ParamSource<Record = T> + DeserializeOwned,
{
    let record: Option<T> = cliparams::from_document(document)?;
    cliparams::to_params(&record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subaccount_document() {
        let params = RequestKind::Subaccount
            .marshal(json!({
                "name": "dev",
                "subdomain": "dev-1234",
                "region": "eu10",
                "description": "",
                "labels": { "team": ["core", "infra"] }
            }))
            .unwrap();

        assert_eq!(params["displayName"], "dev");
        assert_eq!(params["subdomain"], "dev-1234");
        assert_eq!(params["region"], "eu10");
        assert_eq!(params["description"], "");
        assert_eq!(params["betaEnabled"], "false");
        assert_eq!(params["labels"], r#"{"team":["core","infra"]}"#);
        assert!(!params.contains_key("directoryID"));
        assert!(!params.contains_key("usedForProduction"));
    }

    #[test]
    fn test_null_document_is_empty() {
        for kind in RequestKind::all() {
            assert!(kind.marshal(serde_json::Value::Null).unwrap().is_empty());
        }
    }

    #[test]
    fn test_array_document_is_rejected() {
        let err = RequestKind::Directory.marshal(json!([])).unwrap_err();
        assert!(matches!(err, cliparams::Error::InvalidShape { .. }));
    }

    #[test]
    fn test_service_instance_parameters_verbatim() {
        let params = RequestKind::ServiceInstance
            .marshal(json!({
                "subaccount_id": "6aa64c2f",
                "name": "my-xsuaa",
                "serviceplan_id": "plan-1",
                "parameters": "{\"xsappname\":\"app\"}",
                "shared": true
            }))
            .unwrap();

        assert_eq!(params["parameters"], r#"{"xsappname":"app"}"#);
        assert_eq!(params["shared"], "true");
        assert_eq!(params["plan"], "plan-1");
        assert!(!params.contains_key("labels"));
    }

    #[test]
    fn test_role_reference_description_not_exported() {
        let role = RoleReference {
            name: "Subaccount Viewer".to_string(),
            role_template_app_id: "cis-local!b2".to_string(),
            role_template_name: "Subaccount_Viewer".to_string(),
            description: "read only".to_string(),
            ..Default::default()
        }
        .in_collection("sa-1", "Viewers");

        let params = cliparams::to_params(&role).unwrap();
        assert_eq!(params.len(), 5);
        assert_eq!(params["subaccount"], "sa-1");
        assert_eq!(params["roleCollectionName"], "Viewers");
        assert_eq!(params["roleTemplateAppID"], "cis-local!b2");
    }

    #[test]
    fn test_same_role_ignores_description_and_binding() {
        let a = RoleReference {
            name: "Admin".to_string(),
            role_template_app_id: "app".to_string(),
            role_template_name: "Admin".to_string(),
            description: "one".to_string(),
            ..Default::default()
        };
        let b = RoleReference {
            description: "two".to_string(),
            ..a.clone()
        }
        .in_collection("sa", "rc");
        assert!(same_role(&a, &b));

        let c = RoleReference {
            role_template_app_id: "other".to_string(),
            ..a.clone()
        };
        assert!(!same_role(&a, &c));
    }

    #[test]
    fn test_all_tables_valid() {
        for kind in RequestKind::all() {
            assert!(kind.validate().is_ok(), "{kind} has an unsupported field");
        }
    }

    #[test]
    fn test_kind_display_matches_value_enum() {
        use clap::ValueEnum;
        for kind in RequestKind::all() {
            let name = kind.to_possible_value().unwrap();
            assert_eq!(name.get_name(), kind.to_string());
        }
    }
}
