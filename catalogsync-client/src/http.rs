//! HTTP implementation of [`CatalogClient`].
//!
//! Speaks the catalog service's REST-JSON contract: one request per call,
//! domain and resource identifiers in the path, everything else in the JSON
//! body (mutations and searches) or the query string (list operations).

use std::time::Duration;

use async_trait::async_trait;
use catalogsync_types::{
    AcceptSubscriptionRequestInput, Asset, CreateAssetRevisionRequest, CreateGlossaryRequest,
    CreateGlossaryTermRequest, CreateSubscriptionRequestInput, Glossary, GlossaryTerm,
    ListProjectMembershipsRequest, ListSubscriptionRequestsRequest, ListSubscriptionsRequest,
    ListingSearchPage, MembershipPage, Project, SearchListingsRequest, SearchPage, SearchRequest,
    SubscriptionPage, SubscriptionRequest, SubscriptionRequestPage, UpdateGlossaryTermRequest,
    UserProfile,
};
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::client::CatalogClient;
use crate::config::ClientConfig;
use crate::error::{CatalogError, CatalogResult};

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Catalog client over HTTP.
#[derive(Clone)]
pub struct HttpCatalogClient {
    config: ClientConfig,
    client: Client,
}

impl std::fmt::Debug for HttpCatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogClient").field("config", &self.config).finish()
    }
}

impl HttpCatalogClient {
    /// Creates a client for the given configuration.
    pub fn new(config: ClientConfig) -> CatalogResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds `{endpoint}/v2/domains/{domain}/{segments...}` with every
    /// caller-supplied segment percent-encoded.
    fn domain_url(&self, domain: &str, segments: &[&str]) -> String {
        let mut url = self.config.endpoint.trim_end_matches('/').to_string();
        url.push_str("/v2/domains/");
        url.push_str(&urlencoding::encode(domain));
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.config.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> CatalogResult<T> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        let error_type = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        debug!(status = status.as_u16(), "catalog request failed");
        Err(CatalogError::from_response(
            status.as_u16(),
            error_type.as_deref(),
            retry_after_secs,
            &body,
        ))
    }
}

fn client_token(token: Option<String>) -> Option<String> {
    token.or_else(|| Some(Uuid::new_v4().to_string()))
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn search(&self, request: SearchRequest) -> CatalogResult<SearchPage> {
        let url = self.domain_url(&request.domain_identifier, &["search"]);
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn search_listings(
        &self,
        request: SearchListingsRequest,
    ) -> CatalogResult<ListingSearchPage> {
        let url = self.domain_url(&request.domain_identifier, &["listings", "search"]);
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn get_project(
        &self,
        domain_identifier: &str,
        identifier: &str,
    ) -> CatalogResult<Project> {
        let url = self.domain_url(domain_identifier, &["projects", identifier]);
        self.send(self.request(Method::GET, url)).await
    }

    async fn create_glossary(&self, mut request: CreateGlossaryRequest) -> CatalogResult<Glossary> {
        request.client_token = client_token(request.client_token.take());
        let url = self.domain_url(&request.domain_identifier, &["glossaries"]);
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn create_glossary_term(
        &self,
        mut request: CreateGlossaryTermRequest,
    ) -> CatalogResult<GlossaryTerm> {
        request.client_token = client_token(request.client_token.take());
        let url = self.domain_url(&request.domain_identifier, &["glossary-terms"]);
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn update_glossary_term(
        &self,
        request: UpdateGlossaryTermRequest,
    ) -> CatalogResult<GlossaryTerm> {
        let url = self.domain_url(
            &request.domain_identifier,
            &["glossary-terms", request.identifier.as_str()],
        );
        self.send(self.request(Method::PATCH, url).json(&request)).await
    }

    async fn get_asset(&self, domain_identifier: &str, identifier: &str) -> CatalogResult<Asset> {
        let url = self.domain_url(domain_identifier, &["assets", identifier]);
        self.send(self.request(Method::GET, url)).await
    }

    async fn create_asset_revision(
        &self,
        mut request: CreateAssetRevisionRequest,
    ) -> CatalogResult<Asset> {
        request.client_token = client_token(request.client_token.take());
        let url = self.domain_url(
            &request.domain_identifier,
            &["assets", request.identifier.as_str(), "revisions"],
        );
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn list_project_memberships(
        &self,
        request: ListProjectMembershipsRequest,
    ) -> CatalogResult<MembershipPage> {
        let url = self.domain_url(
            &request.domain_identifier,
            &["projects", request.project_identifier.as_str(), "memberships"],
        );
        self.send(self.request(Method::GET, url).query(&request)).await
    }

    async fn get_user_profile(
        &self,
        domain_identifier: &str,
        user_identifier: &str,
    ) -> CatalogResult<UserProfile> {
        let url = self.domain_url(domain_identifier, &["users", user_identifier]);
        self.send(self.request(Method::GET, url)).await
    }

    async fn create_subscription_request(
        &self,
        mut request: CreateSubscriptionRequestInput,
    ) -> CatalogResult<SubscriptionRequest> {
        request.client_token = client_token(request.client_token.take());
        let url = self.domain_url(&request.domain_identifier, &["subscription-requests"]);
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn list_subscription_requests(
        &self,
        request: ListSubscriptionRequestsRequest,
    ) -> CatalogResult<SubscriptionRequestPage> {
        let url = self.domain_url(&request.domain_identifier, &["subscription-requests"]);
        self.send(self.request(Method::GET, url).query(&request)).await
    }

    async fn list_subscriptions(
        &self,
        request: ListSubscriptionsRequest,
    ) -> CatalogResult<SubscriptionPage> {
        let url = self.domain_url(&request.domain_identifier, &["subscriptions"]);
        self.send(self.request(Method::GET, url).query(&request)).await
    }

    async fn accept_subscription_request(
        &self,
        request: AcceptSubscriptionRequestInput,
    ) -> CatalogResult<SubscriptionRequest> {
        let url = self.domain_url(
            &request.domain_identifier,
            &["subscription-requests", request.identifier.as_str(), "accept"],
        );
        self.send(self.request(Method::PUT, url).json(&request)).await
    }
}
