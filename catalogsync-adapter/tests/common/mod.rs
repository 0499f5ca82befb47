//! Shared test helpers for adapter tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalogsync_adapter::{CatalogAdapter, SyncSettings, WaitWindow, Waiter};
use catalogsync_client::{CatalogClient, CatalogError, CatalogResult};
use catalogsync_types::{
    AcceptSubscriptionRequestInput, Asset, CreateAssetRevisionRequest, CreateGlossaryRequest,
    CreateGlossaryTermRequest, CreateSubscriptionRequestInput, Glossary, GlossaryTerm,
    ListProjectMembershipsRequest, ListSubscriptionRequestsRequest, ListSubscriptionsRequest,
    ListingItem, ListingSearchPage, MembershipPage, Project, ProjectMember, SearchInventoryItem,
    SearchListingsRequest, SearchPage, SearchRequest, Subscription, SubscriptionPage,
    SubscriptionRequest, SubscriptionRequestPage, UpdateGlossaryTermRequest, UserProfile,
};
use serde_json::json;

pub const DOMAIN: &str = "dzd_test";
pub const PRODUCER: &str = "prj_producer";
pub const CONSUMER: &str = "prj_consumer";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_settings() -> SyncSettings {
    SyncSettings {
        propagation_wait: WaitWindow::none(),
        ..SyncSettings::new(DOMAIN, PRODUCER, CONSUMER)
    }
}

// ── Scripted client ─────────────────────────────────────────────

/// A request the fake client received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(SearchRequest),
    SearchListings(SearchListingsRequest),
    GetProject(String),
    CreateGlossary(CreateGlossaryRequest),
    CreateGlossaryTerm(CreateGlossaryTermRequest),
    UpdateGlossaryTerm(UpdateGlossaryTermRequest),
    GetAsset(String),
    CreateAssetRevision(CreateAssetRevisionRequest),
    ListProjectMemberships(ListProjectMembershipsRequest),
    GetUserProfile(String),
    CreateSubscriptionRequest(CreateSubscriptionRequestInput),
    ListSubscriptionRequests(ListSubscriptionRequestsRequest),
    ListSubscriptions(ListSubscriptionsRequest),
    AcceptSubscriptionRequest(AcceptSubscriptionRequestInput),
}

/// Queue of canned responses for one operation, served in order.
pub struct Script<T>(Mutex<VecDeque<CatalogResult<T>>>);

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self(Mutex::new(VecDeque::new()))
    }
}

impl<T> Script<T> {
    pub fn push(&self, response: CatalogResult<T>) -> &Self {
        self.0.lock().unwrap().push_back(response);
        self
    }

    pub fn ok(&self, value: T) -> &Self {
        self.push(Ok(value))
    }

    fn next(&self, operation: &str) -> CatalogResult<T> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CatalogError::Validation(format!("unscripted {operation} call")))
            })
    }
}

/// In-memory [`CatalogClient`] that replays scripted responses and records
/// every request.
#[derive(Default)]
pub struct FakeCatalogClient {
    pub calls: Mutex<Vec<Call>>,
    pub search: Script<SearchPage>,
    pub search_listings: Script<ListingSearchPage>,
    pub get_project: Script<Project>,
    pub create_glossary: Script<Glossary>,
    pub create_glossary_term: Script<GlossaryTerm>,
    pub update_glossary_term: Script<GlossaryTerm>,
    pub get_asset: Script<Asset>,
    pub create_asset_revision: Script<Asset>,
    pub list_project_memberships: Script<MembershipPage>,
    pub get_user_profile: Script<UserProfile>,
    pub create_subscription_request: Script<SubscriptionRequest>,
    pub list_subscription_requests: Script<SubscriptionRequestPage>,
    pub list_subscriptions: Script<SubscriptionPage>,
    pub accept_subscription_request: Script<SubscriptionRequest>,
}

impl FakeCatalogClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<SearchRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn create_glossary_calls(&self) -> Vec<CreateGlossaryRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateGlossary(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CatalogClient for FakeCatalogClient {
    async fn search(&self, request: SearchRequest) -> CatalogResult<SearchPage> {
        self.record(Call::Search(request));
        self.search.next("search")
    }

    async fn search_listings(
        &self,
        request: SearchListingsRequest,
    ) -> CatalogResult<ListingSearchPage> {
        self.record(Call::SearchListings(request));
        self.search_listings.next("search_listings")
    }

    async fn get_project(&self, _domain: &str, identifier: &str) -> CatalogResult<Project> {
        self.record(Call::GetProject(identifier.to_string()));
        self.get_project.next("get_project")
    }

    async fn create_glossary(&self, request: CreateGlossaryRequest) -> CatalogResult<Glossary> {
        self.record(Call::CreateGlossary(request));
        self.create_glossary.next("create_glossary")
    }

    async fn create_glossary_term(
        &self,
        request: CreateGlossaryTermRequest,
    ) -> CatalogResult<GlossaryTerm> {
        self.record(Call::CreateGlossaryTerm(request));
        self.create_glossary_term.next("create_glossary_term")
    }

    async fn update_glossary_term(
        &self,
        request: UpdateGlossaryTermRequest,
    ) -> CatalogResult<GlossaryTerm> {
        self.record(Call::UpdateGlossaryTerm(request));
        self.update_glossary_term.next("update_glossary_term")
    }

    async fn get_asset(&self, _domain: &str, identifier: &str) -> CatalogResult<Asset> {
        self.record(Call::GetAsset(identifier.to_string()));
        self.get_asset.next("get_asset")
    }

    async fn create_asset_revision(
        &self,
        request: CreateAssetRevisionRequest,
    ) -> CatalogResult<Asset> {
        self.record(Call::CreateAssetRevision(request));
        self.create_asset_revision.next("create_asset_revision")
    }

    async fn list_project_memberships(
        &self,
        request: ListProjectMembershipsRequest,
    ) -> CatalogResult<MembershipPage> {
        self.record(Call::ListProjectMemberships(request));
        self.list_project_memberships.next("list_project_memberships")
    }

    async fn get_user_profile(&self, _domain: &str, user: &str) -> CatalogResult<UserProfile> {
        self.record(Call::GetUserProfile(user.to_string()));
        self.get_user_profile.next("get_user_profile")
    }

    async fn create_subscription_request(
        &self,
        request: CreateSubscriptionRequestInput,
    ) -> CatalogResult<SubscriptionRequest> {
        self.record(Call::CreateSubscriptionRequest(request));
        self.create_subscription_request.next("create_subscription_request")
    }

    async fn list_subscription_requests(
        &self,
        request: ListSubscriptionRequestsRequest,
    ) -> CatalogResult<SubscriptionRequestPage> {
        self.record(Call::ListSubscriptionRequests(request));
        self.list_subscription_requests.next("list_subscription_requests")
    }

    async fn list_subscriptions(
        &self,
        request: ListSubscriptionsRequest,
    ) -> CatalogResult<SubscriptionPage> {
        self.record(Call::ListSubscriptions(request));
        self.list_subscriptions.next("list_subscriptions")
    }

    async fn accept_subscription_request(
        &self,
        request: AcceptSubscriptionRequestInput,
    ) -> CatalogResult<SubscriptionRequest> {
        self.record(Call::AcceptSubscriptionRequest(request));
        self.accept_subscription_request.next("accept_subscription_request")
    }
}

// ── Waiter ──────────────────────────────────────────────────────

/// Records waits instead of sleeping.
#[derive(Default)]
pub struct RecordingWaiter {
    pub waits: Mutex<Vec<(WaitWindow, String)>>,
}

impl RecordingWaiter {
    pub fn waits(&self) -> Vec<(WaitWindow, String)> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Waiter for RecordingWaiter {
    async fn wait(&self, window: WaitWindow, message: &str) {
        self.waits.lock().unwrap().push((window, message.to_string()));
    }
}

/// Adapter over a fresh fake client and recording waiter.
pub fn adapter() -> (CatalogAdapter, Arc<FakeCatalogClient>, Arc<RecordingWaiter>) {
    init_tracing();
    let client = FakeCatalogClient::new();
    let waiter = Arc::new(RecordingWaiter::default());
    let adapter = CatalogAdapter::with_waiter(client.clone(), test_settings(), waiter.clone());
    (adapter, client, waiter)
}

// ── Fixtures ────────────────────────────────────────────────────

pub fn glossary_item(id: &str, name: &str) -> SearchInventoryItem {
    serde_json::from_value(json!({"glossaryItem": {"id": id, "name": name}})).unwrap()
}

pub fn term_item(id: &str, name: &str) -> SearchInventoryItem {
    serde_json::from_value(json!({"glossaryTermItem": {"id": id, "name": name, "glossaryId": "g-1"}}))
        .unwrap()
}

pub fn asset_item(id: &str, name: &str) -> SearchInventoryItem {
    serde_json::from_value(json!({"assetItem": {"identifier": id, "name": name}})).unwrap()
}

pub fn listing_item(id: &str) -> ListingItem {
    serde_json::from_value(json!({"assetListing": {"listingId": id, "name": id}})).unwrap()
}

pub fn search_page(items: Vec<SearchInventoryItem>, next_token: Option<&str>) -> SearchPage {
    SearchPage { items, next_token: next_token.map(str::to_string), total_match_count: None }
}

pub fn listing_page(items: Vec<ListingItem>, next_token: Option<&str>) -> ListingSearchPage {
    ListingSearchPage { items, next_token: next_token.map(str::to_string), total_match_count: None }
}

pub fn user_member(user_id: &str) -> ProjectMember {
    serde_json::from_value(json!({"memberDetails": {"user": {"userId": user_id}}})).unwrap()
}

pub fn group_member(group_id: &str) -> ProjectMember {
    serde_json::from_value(json!({"memberDetails": {"group": {"groupId": group_id}}})).unwrap()
}

pub fn glossary(id: &str, name: &str) -> Glossary {
    serde_json::from_value(json!({"id": id, "name": name, "status": "ENABLED"})).unwrap()
}

pub fn glossary_term(id: &str, name: &str) -> GlossaryTerm {
    serde_json::from_value(json!({"id": id, "name": name, "glossaryId": "g-1"})).unwrap()
}

pub fn asset(id: &str, revision: &str) -> Asset {
    serde_json::from_value(json!({"id": id, "name": "orders", "revision": revision})).unwrap()
}

pub fn subscription_request(id: &str, status: &str) -> SubscriptionRequest {
    serde_json::from_value(json!({"id": id, "status": status, "subscribedListings": [{"id": "l-1"}]}))
        .unwrap()
}

pub fn subscription(id: &str, request_id: &str) -> Subscription {
    serde_json::from_value(json!({"id": id, "status": "APPROVED", "subscriptionRequestId": request_id}))
        .unwrap()
}
