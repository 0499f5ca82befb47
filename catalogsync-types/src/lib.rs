//! Wire types for the managed catalog service.
//!
//! This crate defines the request and response shapes exchanged with the
//! catalog service:
//! - Inventory and listing search (scopes, filter clauses, result unions)
//! - Glossaries and glossary terms
//! - Assets and their metadata forms
//! - Projects, memberships and user profiles
//! - Subscription requests and subscriptions
//!
//! Everything here is plain data. Requests carry their path parameters
//! (domain, resource identifiers) as fields marked `#[serde(skip)]`; the
//! client decides where they go on the wire. Optional request fields are
//! `Option`s and are omitted from the payload when absent.

mod asset;
mod glossary;
mod page;
mod project;
mod search;
mod subscription;
pub mod timestamp;

pub use asset::{
    Asset, BusinessNameGeneration, CreateAssetRevisionRequest, FormInput, FormOutput,
    PredictionConfiguration,
};
pub use glossary::{
    CreateGlossaryRequest, CreateGlossaryTermRequest, Glossary, GlossaryStatus, GlossaryTerm,
    TermRelations, UpdateGlossaryTermRequest,
};
pub use page::Paginated;
pub use project::{
    GroupMember, IamUserDetails, ListProjectMembershipsRequest, MemberDetails, MembershipPage,
    Project, ProjectMember, SsoUserDetails, UserMember, UserProfile, UserProfileDetails,
    UserProfileType,
};
pub use search::{
    AdditionalAttribute, AssetItem, AssetListingItem, Filter, FilterClause, GlossaryItem,
    GlossaryTermItem, ListingAdditionalAttributes, ListingGlossaryTerm, ListingItem,
    ListingSearchPage, SearchInventoryItem, SearchListingsRequest, SearchPage, SearchRequest,
    SearchScope,
};
pub use subscription::{
    AcceptSubscriptionRequestInput, CreateSubscriptionRequestInput, ListSubscriptionRequestsRequest,
    ListSubscriptionsRequest, SortKey, SortOrder, SubscribedListing, SubscribedListingInput,
    SubscribedPrincipal, SubscribedPrincipalInput, SubscribedProject, SubscribedProjectInput,
    Subscription, SubscriptionPage, SubscriptionRequest, SubscriptionRequestPage,
    SubscriptionRequestStatus, SubscriptionStatus,
};
