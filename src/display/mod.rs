//! Display-text tables that sit alongside the infraction copy: order states,
//! dispute statuses, infraction states, evidence types, and parameterized
//! enforcement-impact sentences.

#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Commerce transaction states shown on infraction-linked orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Approved,
    Shipped,
    Refunded,
    RequireReview,
    Exception,
    LabelGenerated,
    LabelDownloaded,
    Delaying,
    Pending,
    Declined,
    // deprecated states — should not be returned, surface as "Error"
    Acknowledged,
    GiftWaitingForAccept,
    C2cAccepted,
    C2cDelivered,
    C2cOnDelivery,
}

impl OrderState {
    pub const ALL: &'static [Self] = &[
        Self::Approved,
        Self::Shipped,
        Self::Refunded,
        Self::RequireReview,
        Self::Exception,
        Self::LabelGenerated,
        Self::LabelDownloaded,
        Self::Delaying,
        Self::Pending,
        Self::Declined,
        Self::Acknowledged,
        Self::GiftWaitingForAccept,
        Self::C2cAccepted,
        Self::C2cDelivered,
        Self::C2cOnDelivery,
    ];

    /// Merchant-facing status label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Ready to be shipped",
            Self::Shipped => "Shipped",
            Self::Refunded => "Refunded",
            Self::RequireReview => "Under Review",
            Self::LabelGenerated => "Shipping label generated",
            Self::LabelDownloaded => "Shipping label downloaded",
            Self::Delaying => "Delaying",
            Self::Pending => "Payment Pending",
            Self::Declined => "Payment Declined",
            Self::Exception
            | Self::Acknowledged
            | Self::GiftWaitingForAccept
            | Self::C2cAccepted
            | Self::C2cDelivered
            | Self::C2cOnDelivery => "Error",
        }
    }
}

/// Dispute status across tracking disputes and proof disputes.
///
/// The two backing state sets overlap on five of nine states; one closed
/// enum covers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisputeStatus {
    AwaitingAdmin,
    Cancelled,
    AwaitingMerchant,
    Approved,
    Declined,
    Disputing,
    DisputeFailed,
    NotDisputed,
    DisputeSuccess,
}

impl DisputeStatus {
    pub const ALL: &'static [Self] = &[
        Self::AwaitingAdmin,
        Self::Cancelled,
        Self::AwaitingMerchant,
        Self::Approved,
        Self::Declined,
        Self::Disputing,
        Self::DisputeFailed,
        Self::NotDisputed,
        Self::DisputeSuccess,
    ];

    /// Merchant-facing dispute label; terminal pairs collapse to the same text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AwaitingAdmin => "Awaiting Admin",
            Self::Cancelled => "Cancelled",
            Self::AwaitingMerchant => "Awaiting Merchant",
            Self::Approved | Self::DisputeSuccess => "Approved",
            Self::Declined | Self::DisputeFailed => "Declined",
            Self::Disputing => "Disputing",
            Self::NotDisputed => "Not Disputed",
        }
    }
}

/// Lifecycle state of an infraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfractionState {
    AwaitingAuthTaggingHighGmv,
    UsBdReviewPayment,
    CnBdReviewPayment,
    RequestPayment,
    AwaitingAdmin,
    RequiresAdminReview,
    AwaitingAdminBot,
    Closed,
    Cancelled,
    New,
    AwaitingMerchant,
    AwaitingAuthTaggingLowGmv,
}

impl InfractionState {
    pub const ALL: &'static [Self] = &[
        Self::AwaitingAuthTaggingHighGmv,
        Self::UsBdReviewPayment,
        Self::CnBdReviewPayment,
        Self::RequestPayment,
        Self::AwaitingAdmin,
        Self::RequiresAdminReview,
        Self::AwaitingAdminBot,
        Self::Closed,
        Self::Cancelled,
        Self::New,
        Self::AwaitingMerchant,
        Self::AwaitingAuthTaggingLowGmv,
    ];

    /// Merchant-facing state label; every admin-side queue shows as
    /// "Awaiting Admin".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Cancelled => "Cancelled",
            Self::New => "New",
            Self::AwaitingMerchant => "Action Required",
            Self::AwaitingAuthTaggingHighGmv
            | Self::UsBdReviewPayment
            | Self::CnBdReviewPayment
            | Self::RequestPayment
            | Self::AwaitingAdmin
            | Self::RequiresAdminReview
            | Self::AwaitingAdminBot
            | Self::AwaitingAuthTaggingLowGmv => "Awaiting Admin",
        }
    }
}

/// Kind of evidence attached to an infraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceType {
    Merchant,
    Product,
    Variation,
    ProductRating,
    Ticket,
    Order,
    Infraction,
}

impl EvidenceType {
    pub const ALL: &'static [Self] = &[
        Self::Merchant,
        Self::Product,
        Self::Variation,
        Self::ProductRating,
        Self::Ticket,
        Self::Order,
        Self::Infraction,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Merchant => "Merchant",
            Self::Product => "Product",
            Self::Variation => "Variation",
            Self::ProductRating => "Product Rating",
            Self::Ticket => "Ticket",
            Self::Order => "Order",
            Self::Infraction => "Infraction",
        }
    }
}

/// Enforcement action attached to an infraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactType {
    ProductPaymentHold,
    OrderPaymentHold,
    AutoRefund,
    MerchantImpressionBlock,
    MerchantPaymentHold,
    ProductTakedown,
    EatCostForProduct,
    ProductImpressionBlock,
    VariationTakedown,
    Geoblock,
    MerchantBan,
}

impl ImpactType {
    pub const ALL: &'static [Self] = &[
        Self::ProductPaymentHold,
        Self::OrderPaymentHold,
        Self::AutoRefund,
        Self::MerchantImpressionBlock,
        Self::MerchantPaymentHold,
        Self::ProductTakedown,
        Self::EatCostForProduct,
        Self::ProductImpressionBlock,
        Self::VariationTakedown,
        Self::Geoblock,
        Self::MerchantBan,
    ];

    /// One-sentence description of the impact, qualified by the enforcement
    /// window (start/end) and geoblocked countries where they apply.
    #[must_use]
    pub fn describe(
        self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        countries: &[String],
    ) -> String {
        let start = start_date.map(format_date);
        let end = end_date.map(format_date);
        match self {
            Self::ProductPaymentHold => end.map_or_else(
                || "Payments for orders for this listing have been withheld".to_string(),
                |d| format!("Payments for orders for this listing will be withheld until {d}"),
            ),
            Self::OrderPaymentHold => end.map_or_else(
                || "Payment for this order has been withheld".to_string(),
                |d| format!("Payment for this order will be withheld until {d}"),
            ),
            Self::AutoRefund => start.map_or_else(
                || "This order will be auto-refunded".to_string(),
                |d| format!("This order was refunded on {d}"),
            ),
            Self::MerchantImpressionBlock => end.map_or_else(
                || "Impressions for your account will be blocked".to_string(),
                |d| format!("Impressions for your account will be blocked until {d}"),
            ),
            Self::MerchantPaymentHold => end.map_or_else(
                || "Your payments will be withheld".to_string(),
                |d| format!("Your payments will be withheld until {d}"),
            ),
            Self::ProductTakedown => start.map_or_else(
                || "This product listing has been removed".to_string(),
                |d| format!("This product listing was removed on {d}"),
            ),
            Self::EatCostForProduct => "You are responsible for 100% of the costs of refunds \
                 on all orders for the product going forward"
                .to_string(),
            Self::ProductImpressionBlock => end.map_or_else(
                || "Impressions for this product will be blocked".to_string(),
                |d| format!("Impressions for this product will be blocked until {d}"),
            ),
            Self::VariationTakedown => start.map_or_else(
                || "This variation has been removed".to_string(),
                |d| format!("This variation was removed on {d}"),
            ),
            Self::Geoblock => {
                if countries.is_empty() {
                    "This product will no longer appear in countries/regions that restrict \
                     its sale"
                        .to_string()
                } else {
                    format!(
                        "This product will no longer appear in countries/regions that \
                         restrict its sale. It is now geoblocked in {}",
                        countries.join(", ")
                    )
                }
            }
            Self::MerchantBan => "Your account has been banned".to_string(),
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn deprecated_order_states_surface_as_error() {
        for state in [
            OrderState::Acknowledged,
            OrderState::GiftWaitingForAccept,
            OrderState::C2cAccepted,
            OrderState::C2cDelivered,
            OrderState::C2cOnDelivery,
        ] {
            assert_eq!(state.label(), "Error");
        }
        assert_eq!(OrderState::Approved.label(), "Ready to be shipped");
    }

    #[test]
    fn dispute_terminal_pairs_collapse() {
        assert_eq!(
            DisputeStatus::Approved.label(),
            DisputeStatus::DisputeSuccess.label()
        );
        assert_eq!(
            DisputeStatus::Declined.label(),
            DisputeStatus::DisputeFailed.label()
        );
    }

    #[test]
    fn admin_queues_all_read_awaiting_admin() {
        let awaiting = InfractionState::ALL
            .iter()
            .filter(|s| s.label() == "Awaiting Admin")
            .count();
        assert_eq!(awaiting, 8);
        assert_eq!(InfractionState::AwaitingMerchant.label(), "Action Required");
    }

    #[test]
    fn payment_hold_mentions_end_date_when_present() {
        let text = ImpactType::MerchantPaymentHold.describe(None, Some(date(2024, 3, 5)), &[]);
        assert_eq!(text, "Your payments will be withheld until Mar 5, 2024");

        let open_ended = ImpactType::MerchantPaymentHold.describe(None, None, &[]);
        assert_eq!(open_ended, "Your payments will be withheld");
    }

    #[test]
    fn takedown_uses_start_date_not_end_date() {
        let text =
            ImpactType::ProductTakedown.describe(Some(date(2023, 11, 20)), Some(date(2024, 1, 1)), &[]);
        assert_eq!(text, "This product listing was removed on Nov 20, 2023");
    }

    #[test]
    fn geoblock_lists_countries_in_order() {
        let countries = vec!["France".to_string(), "Germany".to_string()];
        let text = ImpactType::Geoblock.describe(None, None, &countries);
        assert!(text.ends_with("It is now geoblocked in France, Germany"));
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&ImpactType::ProductImpressionBlock).expect("serialize");
        assert_eq!(json, "\"PRODUCT_IMPRESSION_BLOCK\"");
        let back: OrderState = serde_json::from_str("\"LABEL_GENERATED\"").expect("deserialize");
        assert_eq!(back, OrderState::LabelGenerated);
    }
}
