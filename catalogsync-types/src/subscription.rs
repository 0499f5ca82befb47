//! Subscription requests and subscriptions.
//!
//! A consumer project requests access to a listing; the owning (approver)
//! project accepts or rejects the request; an accepted request yields an
//! approved subscription.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Approved,
    Revoked,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedListingInput {
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedProjectInput {
    pub identifier: String,
}

/// Principal on whose behalf a subscription is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubscribedPrincipalInput {
    Project(SubscribedProjectInput),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequestInput {
    #[serde(skip)]
    pub domain_identifier: String,
    pub request_reason: String,
    pub subscribed_listings: Vec<SubscribedListingInput>,
    pub subscribed_principals: Vec<SubscribedPrincipalInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedListing {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubscribedPrincipal {
    Project(SubscribedProject),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub id: String,
    pub status: SubscriptionRequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
    #[serde(default)]
    pub subscribed_listings: Vec<SubscribedListing>,
    #[serde(default)]
    pub subscribed_principals: Vec<SubscribedPrincipal>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SubscriptionRequest {
    /// Whether this request covers the given listing.
    pub fn covers_listing(&self, listing_id: &str) -> bool {
        self.subscribed_listings.iter().any(|listing| listing.id == listing_id)
    }
}

/// Query for `ListSubscriptionRequests`. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscriptionRequestsRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionRequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_listing_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequestPage {
    #[serde(default)]
    pub items: Vec<SubscriptionRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Query for `ListSubscriptions`. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubscriptionsRequest {
    #[serde(skip)]
    pub domain_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_request_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_listing_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_listing: Option<SubscribedListing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_principal: Option<SubscribedPrincipal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain_permissions: Option<bool>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPage {
    #[serde(default)]
    pub items: Vec<Subscription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptSubscriptionRequestInput {
    #[serde(skip)]
    pub domain_identifier: String,
    #[serde(skip)]
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_comment: Option<String>,
}
