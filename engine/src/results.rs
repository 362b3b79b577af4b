//! Result utilities
//!
//! Post-processing over a batch of priced quotes: selection, conjunctive
//! filtering, stable sorting, zone grouping, and summary statistics.
//! All sorts are stable; equal keys never reorder.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CourierFlow, PriceQuote};
use crate::zone::Zone;

/// Sort direction for price sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Conjunctive filter criteria over a quote batch
///
/// Every populated criterion must hold for a quote to pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteFilters {
    /// Minimum total price (inclusive)
    pub min_price: Option<f64>,
    /// Maximum total price (inclusive)
    pub max_price: Option<f64>,
    /// Forward or reverse couriers only
    pub flow: Option<CourierFlow>,
    /// Require (or exclude) COD-capable couriers
    pub cod_capable: Option<bool>,
    /// Require (or exclude) RTO-capable couriers
    pub rto_capable: Option<bool>,
    /// Only quotes for this zone
    pub zone: Option<Zone>,
    /// Courier ids to drop regardless of other criteria
    pub exclude_couriers: Vec<Uuid>,
}

/// Cheapest quote by total price, or `None` for an empty batch
///
/// Ties resolve to the earliest quote.
pub fn cheapest(quotes: &[PriceQuote]) -> Option<&PriceQuote> {
    quotes
        .iter()
        .min_by(|a, b| a.total_price.total_cmp(&b.total_price))
}

/// Most expensive quote by total price, or `None` for an empty batch
pub fn most_expensive(quotes: &[PriceQuote]) -> Option<&PriceQuote> {
    quotes
        .iter()
        .max_by(|a, b| a.total_price.total_cmp(&b.total_price))
}

/// Keep only quotes matching every populated filter criterion
pub fn filter_quotes(mut quotes: Vec<PriceQuote>, filters: &QuoteFilters) -> Vec<PriceQuote> {
    quotes.retain(|quote| {
        if let Some(min) = filters.min_price {
            if quote.total_price < min {
                return false;
            }
        }
        if let Some(max) = filters.max_price {
            if quote.total_price > max {
                return false;
            }
        }
        if let Some(flow) = filters.flow {
            if quote.courier.flow() != flow {
                return false;
            }
        }
        if let Some(cod) = filters.cod_capable {
            if quote.pricing.is_cod_applicable != cod {
                return false;
            }
        }
        if let Some(rto) = filters.rto_capable {
            if quote.pricing.is_rto_applicable != rto {
                return false;
            }
        }
        if let Some(zone) = filters.zone {
            if quote.zone != zone {
                return false;
            }
        }
        !filters.exclude_couriers.contains(&quote.courier.id)
    });
    quotes
}

/// Stable sort by total price
pub fn sort_by_price(quotes: &mut [PriceQuote], order: SortOrder) {
    match order {
        SortOrder::Ascending => {
            quotes.sort_by(|a, b| a.total_price.total_cmp(&b.total_price));
        }
        SortOrder::Descending => {
            quotes.sort_by(|a, b| b.total_price.total_cmp(&a.total_price));
        }
    }
}

/// Stable sort by expected pickup: Today before Tomorrow
pub fn sort_by_pickup_time(quotes: &mut [PriceQuote]) {
    quotes.sort_by_key(|quote| quote.expected_pickup);
}

/// Canonical ranking: recommended couriers first, ascending price within
/// each recommendation tier
pub fn sort_by_recommended_and_price(quotes: &mut [PriceQuote]) {
    quotes.sort_by(|a, b| {
        b.courier
            .recommended
            .cmp(&a.courier.recommended)
            .then(a.total_price.total_cmp(&b.total_price))
    });
}

/// Partition quotes by zone display name, preserving quote order within
/// each group
pub fn group_by_zone(quotes: &[PriceQuote]) -> HashMap<String, Vec<PriceQuote>> {
    let mut groups: HashMap<String, Vec<PriceQuote>> = HashMap::new();
    for quote in quotes {
        groups
            .entry(quote.zone_name.clone())
            .or_default()
            .push(quote.clone());
    }
    groups
}

/// Inclusive (min, max) span of quoted totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Aggregate statistics over a quote batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Number of couriers in the batch
    pub total_couriers: usize,
    /// Number of serviceable options (the batch only ever holds
    /// serviceable quotes, so this equals `total_couriers`)
    pub serviceable: usize,
    /// Arithmetic mean of quoted totals (0 for an empty batch)
    pub average_price: f64,
    /// Span of quoted totals (zeroed for an empty batch)
    pub price_range: PriceRange,
    /// Cheapest option
    pub cheapest: Option<PriceQuote>,
    /// Most expensive option
    pub most_expensive: Option<PriceQuote>,
}

/// Summarize a quote batch
///
/// # Example
/// ```
/// use courier_rate_engine::results::price_summary;
///
/// let summary = price_summary(&[]);
/// assert_eq!(summary.total_couriers, 0);
/// assert_eq!(summary.serviceable, 0);
/// assert_eq!(summary.average_price, 0.0);
/// assert_eq!(summary.price_range.min, 0.0);
/// assert_eq!(summary.price_range.max, 0.0);
/// ```
pub fn price_summary(quotes: &[PriceQuote]) -> PriceSummary {
    if quotes.is_empty() {
        return PriceSummary {
            total_couriers: 0,
            serviceable: 0,
            average_price: 0.0,
            price_range: PriceRange { min: 0.0, max: 0.0 },
            cheapest: None,
            most_expensive: None,
        };
    }

    let total: f64 = quotes.iter().map(|quote| quote.total_price).sum();
    let cheapest_quote = cheapest(quotes).cloned();
    let most_expensive_quote = most_expensive(quotes).cloned();
    let min = cheapest_quote
        .as_ref()
        .map(|quote| quote.total_price)
        .unwrap_or(0.0);
    let max = most_expensive_quote
        .as_ref()
        .map(|quote| quote.total_price)
        .unwrap_or(0.0);

    PriceSummary {
        total_couriers: quotes.len(),
        serviceable: quotes.len(),
        average_price: total / quotes.len() as f64,
        price_range: PriceRange { min, max },
        cheapest: cheapest_quote,
        most_expensive: most_expensive_quote,
    }
}
