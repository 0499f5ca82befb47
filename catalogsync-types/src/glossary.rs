//! Glossaries and glossary terms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlossaryStatus {
    Enabled,
    Disabled,
}

/// Relations from a term to other terms, by term identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRelations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub is_a: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifies: Vec<String>,
}

impl TermRelations {
    pub fn is_empty(&self) -> bool {
        self.is_a.is_empty() && self.classifies.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGlossaryRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    pub name: String,
    pub owning_project_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GlossaryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// A glossary as returned by create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glossary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GlossaryStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGlossaryTermRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    pub glossary_identifier: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GlossaryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_relations: Option<TermRelations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Partial update of a glossary term. Absent fields are left unchanged by
/// the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGlossaryTermRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    #[serde(skip)]
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GlossaryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_relations: Option<TermRelations>,
}

impl UpdateGlossaryTermRequest {
    /// An update of `identifier` that changes nothing yet.
    pub fn new(domain_identifier: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            domain_identifier: domain_identifier.into(),
            identifier: identifier.into(),
            glossary_identifier: None,
            name: None,
            short_description: None,
            long_description: None,
            status: None,
            term_relations: None,
        }
    }
}

/// A glossary term as returned by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub glossary_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GlossaryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_relations: Option<TermRelations>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
