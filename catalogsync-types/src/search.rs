//! Inventory and listing search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::glossary::{GlossaryStatus, TermRelations};

/// Inventory category a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchScope {
    Asset,
    Glossary,
    GlossaryTerm,
    DataProduct,
}

impl SearchScope {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::Asset => "ASSET",
            SearchScope::Glossary => "GLOSSARY",
            SearchScope::GlossaryTerm => "GLOSSARY_TERM",
            SearchScope::DataProduct => "DATA_PRODUCT",
        }
    }
}

/// Extra attribute groups the service can attach to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdditionalAttribute {
    Forms,
    TimeSeriesDataPointForms,
}

/// A single attribute equality test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub attribute: String,
    pub value: String,
}

/// Search filter expression.
///
/// Serialized as a single-key object: `{"filter": {...}}`, `{"and": [...]}`
/// or `{"or": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterClause {
    Filter(Filter),
    And(Vec<FilterClause>),
    Or(Vec<FilterClause>),
}

impl FilterClause {
    /// `attribute == value`.
    pub fn eq(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        FilterClause::Filter(Filter { attribute: attribute.into(), value: value.into() })
    }

    /// Conjunction of the given clauses.
    pub fn and(clauses: impl IntoIterator<Item = FilterClause>) -> Self {
        FilterClause::And(clauses.into_iter().collect())
    }

    /// Disjunction of the given clauses.
    pub fn or(clauses: impl IntoIterator<Item = FilterClause>) -> Self {
        FilterClause::Or(clauses.into_iter().collect())
    }
}

/// Inventory search (`Search` operation).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    pub search_scope: SearchScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_project_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterClause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_attributes: Vec<AdditionalAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl SearchRequest {
    /// Creates a search over `scope` in `domain` with no other constraints.
    pub fn new(domain_identifier: impl Into<String>, search_scope: SearchScope) -> Self {
        Self {
            domain_identifier: domain_identifier.into(),
            search_scope,
            search_text: None,
            owning_project_identifier: None,
            filters: None,
            additional_attributes: Vec::new(),
            max_results: None,
            next_token: None,
        }
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_owning_project(mut self, project_id: impl Into<String>) -> Self {
        self.owning_project_identifier = Some(project_id.into());
        self
    }

    pub fn with_filters(mut self, filters: FilterClause) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets the continuation cursor; `None` leaves the request on the first page.
    pub fn with_next_token(mut self, next_token: Option<String>) -> Self {
        self.next_token = next_token;
        self
    }
}

/// Glossary entry as returned by inventory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryItem {
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
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Glossary term entry as returned by inventory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTermItem {
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

/// Asset entry as returned by inventory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetItem {
    pub identifier: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glossary_terms: Vec<String>,
}

/// One inventory search hit. The service tags each hit with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchInventoryItem {
    AssetItem(AssetItem),
    GlossaryItem(GlossaryItem),
    GlossaryTermItem(GlossaryTermItem),
    DataProductItem(serde_json::Value),
}

impl SearchInventoryItem {
    pub fn as_glossary(&self) -> Option<&GlossaryItem> {
        match self {
            SearchInventoryItem::GlossaryItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_glossary_term(&self) -> Option<&GlossaryTermItem> {
        match self {
            SearchInventoryItem::GlossaryTermItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&AssetItem> {
        match self {
            SearchInventoryItem::AssetItem(item) => Some(item),
            _ => None,
        }
    }

    /// Name of the hit, when the kind carries one in a typed field.
    pub fn name(&self) -> Option<&str> {
        match self {
            SearchInventoryItem::AssetItem(item) => Some(&item.name),
            SearchInventoryItem::GlossaryItem(item) => Some(&item.name),
            SearchInventoryItem::GlossaryTermItem(item) => Some(&item.name),
            SearchInventoryItem::DataProductItem(value) => value.get("name")?.as_str(),
        }
    }
}

/// One page of inventory search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<SearchInventoryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_match_count: Option<u64>,
}

/// Listing search (`SearchListings` operation).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListingsRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterClause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_attributes: Vec<AdditionalAttribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl SearchListingsRequest {
    pub fn new(domain_identifier: impl Into<String>) -> Self {
        Self {
            domain_identifier: domain_identifier.into(),
            search_text: None,
            filters: None,
            additional_attributes: Vec::new(),
            max_results: None,
            next_token: None,
        }
    }
}

/// Attribute groups attached to a listing when requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingAdditionalAttributes {
    /// Forms of the published asset, as a JSON document encoded in a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingGlossaryTerm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

/// Published asset as returned by listing search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetListingItem {
    pub listing_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_attributes: Option<ListingAdditionalAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glossary_terms: Vec<ListingGlossaryTerm>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub listing_created_at: Option<DateTime<Utc>>,
}

/// One listing search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingItem {
    AssetListing(AssetListingItem),
    DataProductListing(serde_json::Value),
}

impl ListingItem {
    pub fn as_asset_listing(&self) -> Option<&AssetListingItem> {
        match self {
            ListingItem::AssetListing(item) => Some(item),
            ListingItem::DataProductListing(_) => None,
        }
    }
}

/// One page of listing search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSearchPage {
    #[serde(default)]
    pub items: Vec<ListingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_match_count: Option<u64>,
}
