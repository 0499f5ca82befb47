//! Catalog adapter used by the sync pipeline.
//!
//! Every method maps one pipeline intent onto one or more catalog calls made
//! one after another. Client errors are returned unchanged.

use std::sync::Arc;

use catalogsync_client::{CatalogClient, CatalogClientFactory, CatalogResult};
use catalogsync_types::{
    AcceptSubscriptionRequestInput, AdditionalAttribute, Asset, CreateAssetRevisionRequest,
    CreateGlossaryRequest, CreateGlossaryTermRequest, CreateSubscriptionRequestInput,
    FilterClause, FormInput, GlossaryStatus, GlossaryTerm, GlossaryTermItem, ListingItem,
    ListingSearchPage, ListProjectMembershipsRequest, ListSubscriptionRequestsRequest,
    ListSubscriptionsRequest, MembershipPage, PredictionConfiguration, Project, ProjectMember,
    SearchInventoryItem, SearchListingsRequest, SearchPage, SearchRequest, SearchScope, SortKey,
    SortOrder, SubscribedListingInput, SubscribedPrincipalInput, SubscribedProjectInput,
    Subscription, SubscriptionRequest, SubscriptionRequestStatus, SubscriptionStatus,
    TermRelations, UpdateGlossaryTermRequest, UserProfile,
};
use tracing::{debug, info};

use crate::description::DescriptionFields;
use crate::paginate::{collect_all, find_first};
use crate::settings::SyncSettings;
use crate::wait::{JitteredWaiter, Waiter};

const GLOSSARY_ID_FILTER: &str = "BusinessGlossaryTermForm.businessGlossaryId";
const OWNING_PROJECT_FILTER: &str = "owningProjectId";
const SOURCE_CATEGORY_FILTER: &str = "amazonmetadata.sourceCategory";
const ASSET_SOURCE_CATEGORY: &str = "asset";
const GLOSSARY_WAIT_MESSAGE: &str = "Waiting for glossary to create";

/// Optional fields of a new asset revision. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetRevisionOptions {
    pub description: Option<String>,
    pub glossary_terms: Option<Vec<String>>,
    pub type_revision: Option<String>,
    pub prediction_configuration: Option<PredictionConfiguration>,
}

/// Facade over the catalog service for one sync run.
pub struct CatalogAdapter {
    client: Arc<dyn CatalogClient>,
    settings: SyncSettings,
    waiter: Arc<dyn Waiter>,
}

impl std::fmt::Debug for CatalogAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogAdapter").field("settings", &self.settings).finish_non_exhaustive()
    }
}

impl CatalogAdapter {
    pub fn new(client: Arc<dyn CatalogClient>, settings: SyncSettings) -> Self {
        Self::with_waiter(client, settings, Arc::new(JitteredWaiter))
    }

    pub fn with_waiter(
        client: Arc<dyn CatalogClient>,
        settings: SyncSettings,
        waiter: Arc<dyn Waiter>,
    ) -> Self {
        Self { client, settings, waiter }
    }

    /// Builds an adapter around a client obtained from `factory`.
    pub fn from_factory(
        factory: &dyn CatalogClientFactory,
        settings: SyncSettings,
    ) -> CatalogResult<Self> {
        Ok(Self::new(factory.create()?, settings))
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    fn domain(&self) -> &str {
        &self.settings.domain_id
    }

    // ── Projects and users ──────────────────────────────────────

    pub async fn get_project(&self, project_id: &str) -> CatalogResult<Project> {
        self.client.get_project(self.domain(), project_id).await
    }

    async fn list_project_members(
        &self,
        project_id: &str,
        next_token: Option<String>,
    ) -> CatalogResult<MembershipPage> {
        self.client
            .list_project_memberships(ListProjectMembershipsRequest {
                domain_identifier: self.domain().to_string(),
                project_identifier: project_id.to_string(),
                max_results: Some(self.settings.page_size),
                next_token,
            })
            .await
    }

    /// Fetches one page of project members, keeping only users.
    ///
    /// The cursor of the unfiltered page is preserved.
    pub async fn list_users_in_project(
        &self,
        project_id: &str,
        next_token: Option<String>,
    ) -> CatalogResult<MembershipPage> {
        let mut page = self.list_project_members(project_id, next_token).await?;
        page.members.retain(ProjectMember::is_user);
        Ok(page)
    }

    /// Every user member of the project, in page order.
    ///
    /// Pages are followed on the unfiltered membership list, so a page made
    /// only of groups does not end the scan.
    pub async fn list_all_users_in_project(
        &self,
        project_id: &str,
    ) -> CatalogResult<Vec<ProjectMember>> {
        let mut members =
            collect_all(|cursor| self.list_project_members(project_id, cursor)).await?;
        members.retain(ProjectMember::is_user);
        Ok(members)
    }

    pub async fn get_user_profile(&self, user_id: &str) -> CatalogResult<UserProfile> {
        self.client.get_user_profile(self.domain(), user_id).await
    }

    // ── Glossary ────────────────────────────────────────────────

    /// Returns the id of the synced glossary, creating it when no glossary
    /// with exactly that name exists.
    ///
    /// After a create the configured propagation wait runs before returning,
    /// so that the new glossary is visible to subsequent searches.
    pub async fn create_or_get_glossary(&self) -> CatalogResult<String> {
        let glossary_name = self.settings.glossary_name();
        info!("Using glossary {}", glossary_name);

        let existing = find_first(
            |cursor| {
                self.client.search(
                    SearchRequest::new(self.domain(), SearchScope::Glossary)
                        .with_search_text(glossary_name.as_str())
                        .with_max_results(self.settings.page_size)
                        .with_next_token(cursor),
                )
            },
            |item: &SearchInventoryItem| {
                item.as_glossary().is_some_and(|glossary| glossary.name == glossary_name)
            },
        )
        .await?;

        if let Some(glossary) = existing.as_ref().and_then(SearchInventoryItem::as_glossary) {
            debug!(glossary_id = %glossary.id, "found existing glossary");
            return Ok(glossary.id.clone());
        }

        info!("Creating glossary {}", glossary_name);
        let created = self
            .client
            .create_glossary(CreateGlossaryRequest {
                domain_identifier: self.domain().to_string(),
                name: glossary_name,
                owning_project_identifier: self.settings.producer_project_id.clone(),
                description: Some(self.settings.glossary_description()),
                status: Some(GlossaryStatus::Enabled),
                client_token: None,
            })
            .await?;

        self.waiter.wait(self.settings.propagation_wait, GLOSSARY_WAIT_MESSAGE).await;
        Ok(created.id)
    }

    fn glossary_terms_request(
        &self,
        glossary_id: &str,
        next_token: Option<String>,
    ) -> SearchRequest {
        SearchRequest::new(self.domain(), SearchScope::GlossaryTerm)
            .with_filters(FilterClause::eq(GLOSSARY_ID_FILTER, glossary_id))
            .with_max_results(self.settings.page_size)
            .with_next_token(next_token)
    }

    /// Finds the term in `glossary_id` whose name is exactly `name`.
    pub async fn search_glossary_term_by_name(
        &self,
        glossary_id: &str,
        name: &str,
    ) -> CatalogResult<Option<GlossaryTermItem>> {
        let found = find_first(
            |cursor| {
                self.client
                    .search(self.glossary_terms_request(glossary_id, cursor).with_search_text(name))
            },
            |item: &SearchInventoryItem| item.as_glossary_term().is_some_and(|t| t.name == name),
        )
        .await?;

        Ok(found.and_then(|item| match item {
            SearchInventoryItem::GlossaryTermItem(term) => Some(term),
            _ => None,
        }))
    }

    pub async fn list_terms_in_glossary(
        &self,
        glossary_id: &str,
        next_token: Option<String>,
    ) -> CatalogResult<SearchPage> {
        self.client.search(self.glossary_terms_request(glossary_id, next_token)).await
    }

    pub async fn list_all_terms_in_glossary(
        &self,
        glossary_id: &str,
    ) -> CatalogResult<Vec<SearchInventoryItem>> {
        collect_all(|cursor| self.list_terms_in_glossary(glossary_id, cursor)).await
    }

    pub async fn create_glossary_term<S: AsRef<str> + Sync>(
        &self,
        glossary_id: &str,
        name: &str,
        descriptions: &[S],
    ) -> CatalogResult<GlossaryTerm> {
        let fields = DescriptionFields::from_descriptions(descriptions);
        debug!(glossary_id, name, "creating glossary term");
        self.client
            .create_glossary_term(CreateGlossaryTermRequest {
                domain_identifier: self.domain().to_string(),
                glossary_identifier: glossary_id.to_string(),
                name: name.to_string(),
                short_description: fields.short_description,
                long_description: fields.long_description,
                status: Some(GlossaryStatus::Enabled),
                term_relations: None,
                client_token: None,
            })
            .await
    }

    pub async fn update_glossary_term_description<S: AsRef<str> + Sync>(
        &self,
        term_id: &str,
        descriptions: &[S],
    ) -> CatalogResult<GlossaryTerm> {
        let fields = DescriptionFields::from_descriptions(descriptions);
        let mut request = UpdateGlossaryTermRequest::new(self.domain(), term_id);
        request.short_description = fields.short_description;
        request.long_description = fields.long_description;
        request.status = Some(GlossaryStatus::Enabled);
        self.client.update_glossary_term(request).await
    }

    /// Replaces the `isA`/`classifies` relations of a term.
    pub async fn update_glossary_term_relations(
        &self,
        glossary_id: &str,
        term_id: &str,
        name: &str,
        relations: TermRelations,
    ) -> CatalogResult<GlossaryTerm> {
        let mut request = UpdateGlossaryTermRequest::new(self.domain(), term_id);
        request.glossary_identifier = Some(glossary_id.to_string());
        request.name = Some(name.to_string());
        request.term_relations = Some(relations);
        request.status = Some(GlossaryStatus::Enabled);
        self.client.update_glossary_term(request).await
    }

    // ── Assets and listings ─────────────────────────────────────

    /// Searches the producer project's assets by name, one page at a time.
    pub async fn search_asset_by_name(
        &self,
        name: &str,
        next_token: Option<String>,
    ) -> CatalogResult<SearchPage> {
        self.client
            .search(
                SearchRequest::new(self.domain(), SearchScope::Asset)
                    .with_owning_project(self.settings.producer_project_id.as_str())
                    .with_search_text(name)
                    .with_max_results(self.settings.page_size)
                    .with_next_token(next_token),
            )
            .await
    }

    pub async fn search_all_assets_by_name(
        &self,
        name: &str,
    ) -> CatalogResult<Vec<SearchInventoryItem>> {
        collect_all(|cursor| self.search_asset_by_name(name, cursor)).await
    }

    /// Searches the producer project's asset listings, with their forms.
    pub async fn search_listings(
        &self,
        search_text: Option<&str>,
        next_token: Option<String>,
    ) -> CatalogResult<ListingSearchPage> {
        let mut request = SearchListingsRequest::new(self.domain());
        request.search_text = search_text.map(str::to_string);
        request.filters = Some(FilterClause::and([
            FilterClause::eq(OWNING_PROJECT_FILTER, self.settings.producer_project_id.as_str()),
            FilterClause::eq(SOURCE_CATEGORY_FILTER, ASSET_SOURCE_CATEGORY),
        ]));
        request.additional_attributes = vec![AdditionalAttribute::Forms];
        request.max_results = Some(self.settings.page_size);
        request.next_token = next_token;
        self.client.search_listings(request).await
    }

    pub async fn search_all_listings(
        &self,
        search_text: Option<&str>,
    ) -> CatalogResult<Vec<ListingItem>> {
        collect_all(|cursor| self.search_listings(search_text, cursor)).await
    }

    pub async fn get_asset(&self, asset_id: &str) -> CatalogResult<Asset> {
        self.client.get_asset(self.domain(), asset_id).await
    }

    pub async fn create_asset_revision(
        &self,
        name: &str,
        asset_id: &str,
        forms: Vec<FormInput>,
        options: AssetRevisionOptions,
    ) -> CatalogResult<Asset> {
        debug!(asset_id, forms = forms.len(), "creating asset revision");
        self.client
            .create_asset_revision(CreateAssetRevisionRequest {
                domain_identifier: self.domain().to_string(),
                identifier: asset_id.to_string(),
                name: name.to_string(),
                forms_input: forms,
                description: options.description,
                glossary_terms: options.glossary_terms,
                type_revision: options.type_revision,
                prediction_configuration: options.prediction_configuration,
                client_token: None,
            })
            .await
    }

    // ── Subscriptions ───────────────────────────────────────────

    /// Requests access to a listing on behalf of the consumer project.
    pub async fn create_subscription_request(
        &self,
        listing_id: &str,
    ) -> CatalogResult<SubscriptionRequest> {
        self.client
            .create_subscription_request(CreateSubscriptionRequestInput {
                domain_identifier: self.domain().to_string(),
                request_reason: self.settings.subscription_request_reason(),
                subscribed_listings: vec![SubscribedListingInput {
                    identifier: listing_id.to_string(),
                }],
                subscribed_principals: vec![SubscribedPrincipalInput::Project(
                    SubscribedProjectInput {
                        identifier: self.settings.consumer_project_id.clone(),
                    },
                )],
                client_token: None,
            })
            .await
    }

    /// Accepted consumer requests for a listing, most recently updated first.
    ///
    /// Only the first page is returned.
    pub async fn search_subscription_requests(
        &self,
        listing_id: &str,
    ) -> CatalogResult<Vec<SubscriptionRequest>> {
        let page = self
            .client
            .list_subscription_requests(ListSubscriptionRequestsRequest {
                domain_identifier: self.domain().to_string(),
                approver_project_id: Some(self.settings.producer_project_id.clone()),
                owning_project_id: Some(self.settings.consumer_project_id.clone()),
                status: Some(SubscriptionRequestStatus::Accepted),
                subscribed_listing_id: Some(listing_id.to_string()),
                sort_by: Some(SortKey::UpdatedAt),
                sort_order: Some(SortOrder::Descending),
                ..Default::default()
            })
            .await?;
        Ok(page.items)
    }

    /// Approved subscriptions created from the given request. Only the first
    /// page is returned.
    pub async fn search_approved_subscription_for_subscription_request_id(
        &self,
        subscription_request_id: &str,
    ) -> CatalogResult<Vec<Subscription>> {
        let page = self
            .client
            .list_subscriptions(ListSubscriptionsRequest {
                domain_identifier: self.domain().to_string(),
                approver_project_id: Some(self.settings.producer_project_id.clone()),
                owning_project_id: Some(self.settings.consumer_project_id.clone()),
                status: Some(SubscriptionStatus::Approved),
                subscription_request_identifier: Some(subscription_request_id.to_string()),
                ..Default::default()
            })
            .await?;
        Ok(page.items)
    }

    pub async fn accept_subscription_request(
        &self,
        subscription_request_id: &str,
    ) -> CatalogResult<SubscriptionRequest> {
        self.client
            .accept_subscription_request(AcceptSubscriptionRequestInput {
                domain_identifier: self.domain().to_string(),
                identifier: subscription_request_id.to_string(),
                decision_comment: Some(self.settings.decision_comment()),
            })
            .await
    }
}
