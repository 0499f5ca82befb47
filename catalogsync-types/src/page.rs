//! Cursor-paginated responses.

use crate::project::{MembershipPage, ProjectMember};
use crate::search::{ListingItem, ListingSearchPage, SearchInventoryItem, SearchPage};
use crate::subscription::{
    Subscription, SubscriptionPage, SubscriptionRequest, SubscriptionRequestPage,
};

/// A response page that carries a collection and an optional continuation
/// cursor.
///
/// Implementations decide which field holds the collection (`items` for
/// searches, `members` for memberships).
pub trait Paginated {
    type Item;

    /// Splits the page into its items and the cursor for the next page.
    ///
    /// An empty cursor string is reported as `None`.
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

impl Paginated for SearchPage {
    type Item = SearchInventoryItem;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.items, non_empty(self.next_token))
    }
}

impl Paginated for ListingSearchPage {
    type Item = ListingItem;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.items, non_empty(self.next_token))
    }
}

impl Paginated for MembershipPage {
    type Item = ProjectMember;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.members, non_empty(self.next_token))
    }
}

impl Paginated for SubscriptionRequestPage {
    type Item = SubscriptionRequest;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.items, non_empty(self.next_token))
    }
}

impl Paginated for SubscriptionPage {
    type Item = Subscription;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>) {
        (self.items, non_empty(self.next_token))
    }
}
