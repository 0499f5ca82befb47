//! Assets and metadata forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A metadata form attached to an asset revision.
///
/// `content` is a JSON document encoded as a string; its schema is defined by
/// the form type and is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub form_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A metadata form as stored on an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOutput {
    pub form_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FormOutput {
    /// Converts a stored form back into a form input, keeping its content.
    pub fn to_input(&self) -> FormInput {
        FormInput {
            form_name: self.form_name.clone(),
            type_identifier: self.type_name.clone(),
            type_revision: self.type_revision.clone(),
            content: self.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessNameGeneration {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name_generation: Option<BusinessNameGeneration>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRevisionRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    #[serde(skip)]
    pub identifier: String,
    pub name: String,
    pub forms_input: Vec<FormInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_terms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_configuration: Option<PredictionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// An asset revision as returned by get and create-revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glossary_terms: Vec<String>,
    #[serde(default)]
    pub forms_output: Vec<FormOutput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub read_only_forms_output: Vec<FormOutput>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Looks up a form by name.
    pub fn form(&self, form_name: &str) -> Option<&FormOutput> {
        self.forms_output.iter().find(|form| form.form_name == form_name)
    }
}
