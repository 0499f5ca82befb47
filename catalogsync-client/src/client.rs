//! Catalog service abstraction trait.
//!
//! One method per remote operation. Implementations perform exactly one
//! request per call and never retry.

use async_trait::async_trait;
use catalogsync_types::{
    AcceptSubscriptionRequestInput, Asset, CreateAssetRevisionRequest, CreateGlossaryRequest,
    CreateGlossaryTermRequest, CreateSubscriptionRequestInput, Glossary, GlossaryTerm,
    ListProjectMembershipsRequest, ListSubscriptionRequestsRequest, ListSubscriptionsRequest,
    ListingSearchPage, MembershipPage, Project, SearchListingsRequest, SearchPage, SearchRequest,
    SubscriptionPage, SubscriptionRequest, SubscriptionRequestPage, UpdateGlossaryTermRequest,
    UserProfile,
};

use crate::error::CatalogResult;

/// Remote catalog service.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Searches the inventory (assets, glossaries, glossary terms).
    async fn search(&self, request: SearchRequest) -> CatalogResult<SearchPage>;

    /// Searches published listings.
    async fn search_listings(&self, request: SearchListingsRequest)
    -> CatalogResult<ListingSearchPage>;

    async fn get_project(&self, domain_identifier: &str, identifier: &str)
    -> CatalogResult<Project>;

    async fn create_glossary(&self, request: CreateGlossaryRequest) -> CatalogResult<Glossary>;

    async fn create_glossary_term(
        &self,
        request: CreateGlossaryTermRequest,
    ) -> CatalogResult<GlossaryTerm>;

    async fn update_glossary_term(
        &self,
        request: UpdateGlossaryTermRequest,
    ) -> CatalogResult<GlossaryTerm>;

    async fn get_asset(&self, domain_identifier: &str, identifier: &str) -> CatalogResult<Asset>;

    /// Creates a new revision of an existing asset.
    async fn create_asset_revision(
        &self,
        request: CreateAssetRevisionRequest,
    ) -> CatalogResult<Asset>;

    async fn list_project_memberships(
        &self,
        request: ListProjectMembershipsRequest,
    ) -> CatalogResult<MembershipPage>;

    async fn get_user_profile(
        &self,
        domain_identifier: &str,
        user_identifier: &str,
    ) -> CatalogResult<UserProfile>;

    async fn create_subscription_request(
        &self,
        request: CreateSubscriptionRequestInput,
    ) -> CatalogResult<SubscriptionRequest>;

    async fn list_subscription_requests(
        &self,
        request: ListSubscriptionRequestsRequest,
    ) -> CatalogResult<SubscriptionRequestPage>;

    async fn list_subscriptions(
        &self,
        request: ListSubscriptionsRequest,
    ) -> CatalogResult<SubscriptionPage>;

    /// Accepts a pending subscription request on behalf of the approver.
    async fn accept_subscription_request(
        &self,
        request: AcceptSubscriptionRequestInput,
    ) -> CatalogResult<SubscriptionRequest>;
}
