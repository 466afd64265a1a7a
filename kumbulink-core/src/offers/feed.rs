use super::client::{ApiError, OffersClient};
use super::model::{filter_offers, ExchangeOffer};
use crate::task::MountedTask;

type FetchResult<T> = Result<T, ApiError>;

/// What the list page renders for a given search query.
#[derive(Debug, PartialEq)]
pub enum OfferView<'a> {
    /// Nothing was published.
    Empty,
    /// Offers exist but none match the query.
    NoMatches,
    List(Vec<&'a ExchangeOffer>),
}

/// Offer collection backing the list page.
///
/// `mount` issues one fetch; `update_from_async` is called every frame and
/// swaps the collection in when the response lands. Unmounting (or dropping
/// the feed) abandons an in-flight request.
#[derive(Default)]
pub struct OfferFeed {
    offers: Vec<ExchangeOffer>,
    pending: Option<MountedTask<FetchResult<Vec<ExchangeOffer>>>>,
}

impl OfferFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, client: &OffersClient) {
        if self.pending.is_some() {
            log::warn!("⚠️ [STATE] Offer fetch already in flight - ignoring");
            return;
        }

        log::info!("🔄 [STATE] Loading offers from {}", client.offers_url());
        let client = client.clone();
        self.pending = Some(MountedTask::spawn(async move { client.list_offers().await }));
    }

    /// Returns true when the collection changed this frame.
    pub fn update_from_async(&mut self) -> bool {
        let Some(task) = self.pending.as_mut() else {
            return false;
        };

        let Some(result) = task.try_take() else {
            return false;
        };
        self.pending = None;

        match result {
            Ok(offers) => {
                self.offers = offers;
            }
            Err(e) => {
                log::error!("❌ [STATE] Failed to load offers: {}", e);
                self.offers = Vec::new();
            }
        }
        true
    }

    pub fn unmount(&mut self) {
        if let Some(mut task) = self.pending.take() {
            task.cancel();
            log::debug!("[STATE] Offer fetch abandoned on unmount");
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn offers(&self) -> &[ExchangeOffer] {
        &self.offers
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// The empty state depends on the collection alone; the query only
    /// narrows a non-empty one.
    pub fn view(&self, query: &str) -> OfferView<'_> {
        if self.offers.is_empty() {
            return OfferView::Empty;
        }

        let visible = filter_offers(&self.offers, query);
        if visible.is_empty() {
            OfferView::NoMatches
        } else {
            OfferView::List(visible)
        }
    }
}

/// Single offer backing the detail page.
pub enum OfferDetail {
    Loading(MountedTask<FetchResult<ExchangeOffer>>),
    Loaded(ExchangeOffer),
    NotFound,
}

impl OfferDetail {
    pub fn mount(client: &OffersClient, id: u64) -> Self {
        log::info!("🔄 [STATE] Loading offer {}", id);
        let client = client.clone();
        Self::Loading(MountedTask::spawn(async move { client.get_offer(id).await }))
    }

    pub fn update_from_async(&mut self) -> bool {
        let Self::Loading(task) = self else {
            return false;
        };

        match task.try_take() {
            Some(Ok(offer)) => {
                *self = Self::Loaded(offer);
                true
            }
            Some(Err(e)) => {
                log::error!("❌ [STATE] Failed to load offer: {}", e);
                *self = Self::NotFound;
                true
            }
            None => false,
        }
    }

    pub fn offer(&self) -> Option<&ExchangeOffer> {
        match self {
            Self::Loaded(offer) => Some(offer),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: u64, sender: &str, recipient: &str) -> ExchangeOffer {
        ExchangeOffer {
            id,
            date: "2025-03-10T18:00:00".to_string(),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            source_amount: "100".to_string(),
            target_amount: "104000".to_string(),
            tax: None,
            bank: "BAI".to_string(),
            payment_key: "AO06 0040 0000 1111".to_string(),
        }
    }

    #[test]
    fn test_empty_collection_is_empty_state_for_any_query() {
        let feed = OfferFeed::new();
        assert_eq!(feed.view(""), OfferView::Empty);
        assert_eq!(feed.view("usd"), OfferView::Empty);
    }

    #[test]
    fn test_unmatched_query_over_offers_is_not_empty_state() {
        let feed = OfferFeed {
            offers: vec![offer(1, "EUR", "AOA")],
            pending: None,
        };
        assert_eq!(feed.view("usd"), OfferView::NoMatches);
    }

    #[test]
    fn test_matching_query_lists_offers() {
        let feed = OfferFeed {
            offers: vec![offer(1, "EUR", "AOA"), offer(2, "BRL", "EUR")],
            pending: None,
        };

        match feed.view("") {
            OfferView::List(visible) => assert_eq!(visible.len(), 2),
            other => panic!("expected list, got {:?}", other),
        }
        match feed.view("brl") {
            OfferView::List(visible) => {
                assert_eq!(visible.len(), 1);
                assert_eq!(visible[0].id, 2);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
