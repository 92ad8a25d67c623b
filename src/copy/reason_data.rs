//! Base copy for every primary infraction reason.

use crate::codes::reason::InfractionReason;
use crate::copy::links::{
    IP_PORTAL_URL, POLICY_BASE, TERMS_URL, help_article_url, help_link, help_section_link, md_link,
    policy_anchor_link, policy_section_url,
};
use crate::copy::{ReasonCopy, deprecated_copy};

fn account_suspension_policy() -> Option<String> {
    Some(policy_anchor_link("Account Suspension Policy", "account_suspension"))
}

fn ip_policy() -> Option<String> {
    Some(policy_anchor_link("Intellectual Property Policy", "ip"))
}

fn listing_policy() -> Option<String> {
    Some(policy_anchor_link("Listing Products Policy", "listing"))
}

fn fulfillment_policy() -> Option<String> {
    Some(policy_anchor_link("Fulfillment Policy", "fulfillment"))
}

fn regional_requirements_faq() -> Option<String> {
    Some(help_section_link("Regional Requirements FAQ", "4411071551259"))
}

impl InfractionReason {
    /// Base copy record for this reason. Total over the enum; retired codes
    /// resolve through the synthesized deprecation notice.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn copy(self) -> ReasonCopy {
        match self {
            Self::RequestUserEmail => ReasonCopy {
                title: "Requesting Customer's Personal Information".into(),
                body: "You asked a customer for their personal information, i.e.: email \
                       address, payment information, etc."
                    .into(),
                policy: account_suspension_policy(),
                faq: None,
            },
            Self::RequestMoney => ReasonCopy {
                title: "Requesting Customer Payment Outside the Marketplace".into(),
                body: "You asked a customer for payment outside of the marketplace, or \
                       requested a direct payment from a customer"
                    .into(),
                policy: account_suspension_policy(),
                faq: None,
            },
            Self::BadCustomerService => ReasonCopy {
                title: "Discourteous Customer Service".into(),
                body: "Customers expect timely, courteous, and effective support".into(),
                policy: account_suspension_policy(),
                faq: None,
            },
            Self::DisingenuousCustomerService => ReasonCopy {
                title: "Disingenuous Customer Service".into(),
                body: "We have found that you have been disingenuous to customers".into(),
                policy: account_suspension_policy(),
                faq: None,
            },
            Self::TakeUserOffPlatform => ReasonCopy {
                title: "Directing Customers Off of the Marketplace".into(),
                body: "You asked customers to visit stores outside of the marketplace, or \
                       generally redirected customers off the platform"
                    .into(),
                policy: account_suspension_policy(),
                faq: None,
            },
            Self::ViolatePolicy => ReasonCopy {
                title: "Policy Violation".into(),
                body: format!(
                    "You have violated a {}",
                    md_link("Merchant Policy", POLICY_BASE)
                ),
                policy: None,
                faq: None,
            },
            Self::FineForCounterfeitGoods => ReasonCopy {
                title: "Intellectual Property Violation".into(),
                body: format!(
                    "This product is counterfeit or infringes on another entity's {}",
                    md_link("IP", IP_PORTAL_URL)
                ),
                policy: ip_policy(),
                faq: Some(help_link(
                    "How to Avoid Intellectual Property Violations",
                    "1260801319309",
                )),
            },
            Self::ProductHighRefundRatio => ReasonCopy {
                title: "High Product Quality Refund Rate".into(),
                body: "This product has a refund rate of more than 5% and/or an extremely \
                       low average rating"
                    .into(),
                policy: Some(policy_anchor_link("Returns Policy", "returns")),
                faq: None,
            },
            Self::FineProductSwapped => ReasonCopy {
                title: "Material Listing Change".into(),
                body: "Changes to this listing (e.g., product name, description, images) \
                       misrepresent the product, set false customer expectations, and/or \
                       don't comply with Merchant Policies"
                    .into(),
                policy: listing_policy(),
                faq: None,
            },
            Self::SuspectedFraud => ReasonCopy {
                title: "Suspected Fraud".into(),
                body: format!(
                    "We have found that your account violated our {} with deceptive, \
                     fraudulent, or illegal activity",
                    md_link("Terms of Service", TERMS_URL)
                ),
                policy: Some(md_link("Terms of Service", TERMS_URL)),
                faq: None,
            },
            Self::RepeatIpInfringementOnBrandOwner => ReasonCopy {
                title: "Repeat Intellectual Property Infringement".into(),
                body: "We have found that you sell products that infringe on another \
                       entity's IP"
                    .into(),
                policy: ip_policy(),
                faq: Some(help_link(
                    "Intellectual Property Violations FAQ",
                    "1260801319309",
                )),
            },
            Self::MerchantContactInfoInvalid => ReasonCopy {
                title: "Invalid Contact Information".into(),
                body: "Your contact information is missing or inaccurate".into(),
                policy: Some(md_link("Registration Policy", POLICY_BASE)),
                faq: None,
            },
            Self::LegalTroTakedown => ReasonCopy {
                title: "Intellectual Property Violation - TRO".into(),
                body: format!(
                    "You have received a Temporary Restraining Order as the result of a \
                     lawsuit from the entity that owns a product's IP. {}",
                    help_link("Learn more about TROs.", "360008058353")
                ),
                policy: ip_policy(),
                faq: Some(help_link("Temporary Restraining Order FAQ", "360008058353")),
            },
            Self::MisleadingVariation => ReasonCopy {
                title: "Misleading Product Variations".into(),
                body: "This listing contains product variations that substantially differ \
                       from one another"
                    .into(),
                policy: listing_policy(),
                faq: Some(help_link("Misleading Listings FAQ", "360003237193")),
            },
            Self::LogisticsNegativeBalance => ReasonCopy {
                title: "Logistics Account Negative Balance".into(),
                body: "Payments will be withheld due to a current negative balance on your \
                       logistics account"
                    .into(),
                policy: None,
                faq: None,
            },
            Self::HighIpInfringement => ReasonCopy {
                title: "Suspension - Repeat Intellectual Property Infringements".into(),
                body: "Your account has been suspended due to multiple IP infringements".into(),
                policy: ip_policy(),
                faq: None,
            },
            Self::CnProhibitedProducts => ReasonCopy {
                title: "Prohibited Product Imported/Exported From China".into(),
                body: "This product does not comply with China Customs Policy for import \
                       and/or export from China"
                    .into(),
                policy: listing_policy(),
                faq: None,
            },
            Self::StrikeBasedHighRiskProhibited => ReasonCopy {
                title: "High Risk Prohibited Product".into(),
                body: format!(
                    "This listing contains a product prohibited from sale. {}",
                    md_link("View prohibited products list", &policy_section_url(1))
                ),
                policy: listing_policy(),
                faq: None,
            },
            Self::ProductGeoblock => ReasonCopy {
                title: "Regionally Restricted Product Listing".into(),
                body: "This product appears available for sale in a region where it is \
                       prohibited"
                    .into(),
                policy: listing_policy(),
                faq: regional_requirements_faq(),
            },
            Self::WarehouseFulfillmentPolicyViolation => ReasonCopy {
                title: "Order Delivered Later Than Set Max Delivery Days".into(),
                body: "This order is confirmed delivered late per your max delivery days \
                       setting"
                    .into(),
                policy: Some(policy_anchor_link(
                    "Warehouse Fulfillment Policy",
                    "warehouse_fulfillment",
                )),
                faq: None,
            },
            Self::BrandedProductGeoblock => ReasonCopy {
                title: "Intellectual Property Violation - Regionally Restricted Listing".into(),
                body: "This product may be counterfeit, or its sale infringes on an \
                       entity's IP in a region where they have rights to it"
                    .into(),
                policy: ip_policy(),
                faq: regional_requirements_faq(),
            },
            Self::FakeTracking => ReasonCopy {
                title: "Misleading Tracking Number".into(),
                body: "The tracking number on this order is inaccurate".into(),
                policy: fulfillment_policy(),
                faq: None,
            },
            Self::MerchantCancellationViolation => ReasonCopy {
                title: "Cancelled Order".into(),
                body: "You cancelled or refunded this order prior to confirmed fulfillment".into(),
                policy: fulfillment_policy(),
                faq: None,
            },
            Self::LateConfirmedFulfillmentViolation => ReasonCopy {
                title: "Late Confirmed Fulfillment".into(),
                body: "This order was not confirmed fulfilled by the carrier within 7 days \
                       (for an order less than $100) or 14 days (for an order greater than \
                       or equal to $100)"
                    .into(),
                policy: fulfillment_policy(),
                faq: None,
            },
            Self::UnfulfilledOrder => ReasonCopy {
                title: "Unfulfilled Order".into(),
                body: "You did not fulfill the order within 5 calendar days".into(),
                policy: fulfillment_policy(),
                faq: None,
            },
            Self::InactiveAccount => ReasonCopy {
                title: "Inactive Account".into(),
                body: format!(
                    "We have detected that your account has been {} for some time",
                    md_link("inactive", &help_article_url("9358114053787"))
                ),
                policy: account_suspension_policy(),
                faq: Some(help_link("Inactive Account Infractions FAQ", "9358114053787")),
            },
            Self::OrderNotDelivered => ReasonCopy {
                title: "Order Not Delivered".into(),
                body: "Based on confirmed tracking information, this order did not arrive \
                       before (max TTD + 7 days). Note: this infraction is automatically \
                       reversed if the order is confirmed delivered or gets paid out."
                    .into(),
                policy: fulfillment_policy(),
                faq: None,
            },
            // Base copy for the sentinel is rarely shown as-is; it is normally
            // overlaid by the category and sub-reason tables.
            Self::ProductIsInappropriate => ReasonCopy {
                title: "Prohibited Content".into(),
                body: format!(
                    "This product listing contains {} (e.g.: unacceptable images, titles, \
                     descriptions, etc.).",
                    md_link("prohibited content", &help_article_url("205211777"))
                ),
                policy: listing_policy(),
                faq: None,
            },
            Self::MerchantStandardsBan => ReasonCopy {
                title: "Merchant Standards Ban".into(),
                body: "Due to your low merchant standards rating, you have been banned \
                       from the platform."
                    .into(),
                policy: Some(policy_anchor_link(
                    "Merchant Standards Policy",
                    "merchant_standards",
                )),
                faq: None,
            },

            Self::ReuploadingCounterfeits => deprecated_copy("Counterfeit goods (repeated)"),
            Self::ProductLowRatingNoRemove | Self::ProductLowRating => {
                deprecated_copy("Low rated product")
            }
            Self::ViolationOfTerms => deprecated_copy("Violation of Terms"),
            Self::StoreValidationIncomplete => deprecated_copy("Incomplete store validation"),
            Self::TaxSettingNotUpdated => deprecated_copy("Tax setting update required"),
            Self::MerchantHarassment => {
                deprecated_copy("Harassment of marketplace employees or property")
            }
            Self::CounterfeitGoods => deprecated_copy("Counterfeit Goods"),
            Self::CsLowCsatScore => deprecated_copy("Poor Customer Support"),
            Self::LateFulfillmentRate => deprecated_copy("Late Fulfillment Rate"),
            Self::DeceptiveFulfillment => {
                deprecated_copy("Store is violating Deceptive Fulfillment Policy")
            }
            Self::RepeatProductSwapping => deprecated_copy("Repeated Product Swapping"),
            Self::LogisticsIdFaceRecognitionIncomplete => {
                deprecated_copy("Face recognition incomplete for logistics ID")
            }
            Self::HighGmvFromMisleadingProducts => {
                deprecated_copy("High GMV from misleading products")
            }
            Self::ProductHighCancelOrderRate => deprecated_copy("High order cancellation rate"),
            Self::BanEarlyStageMerchant => deprecated_copy("Violated Merchant Policy"),
            Self::HighRefundRatio => {
                deprecated_copy("Your store has an extremely high refund ratio")
            }
            Self::PolicyTierDemotion => deprecated_copy("Policy violations or gaming"),
            Self::MerchantHighQualityRefundRatio => deprecated_copy(
                "Your store has an extremely high refund rate from quality-related reasons",
            ),
            Self::UsTaxInfoUnvalidated => {
                deprecated_copy("U.S. Tax Identity Information Unvalidated")
            }
            Self::PenaltyForAutoRefund => deprecated_copy("Auto Refund Penalty"),
            Self::FinalJudgementOrder => deprecated_copy("Final judgement order"),
            Self::ConfirmedDeliveryPolicy => {
                deprecated_copy("Your store is not meeting Confirmed Delivery Policy requirements")
            }
            Self::UnconfirmedTrackingNumbers => {
                deprecated_copy("Provided unconfirmed tracking numbers")
            }
            Self::FineExpressPolicyViolation => deprecated_copy("Express program late fulfillment"),
            Self::ProductHighRefundRatioNoRemove => deprecated_copy("High Refund Ratio No Remove"),
            Self::RespondToAdmin => deprecated_copy("Admin message response needed"),
            Self::ExpressPolicyProduct => deprecated_copy("Express Policy Product"),
            Self::ProductHighQualityRefundRatio => {
                deprecated_copy("High product quality-related refund rate")
            }
            Self::MerchantHighRefundEatCost => deprecated_copy("Store has a high refund ratio"),
            Self::DepFineDisablePromotedProduct => {
                deprecated_copy("Disabled a SKU while it was being promoted")
            }
            Self::CsLateResponseRate => deprecated_copy("Long customer ticket response times"),
            Self::ExpressPolicyViolation => {
                deprecated_copy("Express program late confirmed delivery")
            }
            Self::HighAutoRefund => deprecated_copy("You did not fulfill orders within 5 days"),
            Self::MerchantHighCancelOrderRate => {
                deprecated_copy("Store has high order cancellation rate")
            }
            Self::HighGmvFromGamingFreeze => {
                deprecated_copy("High share of sales from misleading listings and/or tracking")
            }
            Self::ExpressPolicyMerchant => deprecated_copy("Express Policy Merchant"),
            Self::EmptyPackages => deprecated_copy("Sent empty packages"),
            Self::ViolationOfPolicyTier => deprecated_copy("Violation of policy tier rules"),
            Self::FineUpdateToCounterfeit => deprecated_copy("Counterfeit penalty update"),
            Self::RelatedAccountIsBanned => deprecated_copy("Related Account Ban"),
            Self::DepFineDisablePromotedProductForCountry => {
                deprecated_copy("Disable Product For Country Promo Penalty")
            }
            Self::DuplicateAccounts => deprecated_copy("Duplicate Accounts"),
            Self::ExtremelyHighPriceSpread => deprecated_copy("Extremely High Price Variance"),
            Self::HighGmvFromGamingBan => deprecated_copy(
                "High GMV from misleading products and/or fulfilled with fake tracking",
            ),
            Self::HighChargebackAndFraudRefundRatio => deprecated_copy(
                "Your store has unacceptably high chargeback and/or fraud refund ratios",
            ),
            Self::HighGmvFromGamingAudit => {
                deprecated_copy("High GMV from misleading products & fake tracking")
            }
            Self::InvalidEuResponsiblePerson => {
                deprecated_copy("You have submitted an invalid EU Responsible Person")
            }
            Self::FakeRating => deprecated_copy("Fake rating"),
            // no title ever shipped for this code
            Self::DepBaitVariablePricing => deprecated_copy(""),
            Self::InvalidTrackingNumbers => deprecated_copy("Provided invalid tracking numbers"),
            Self::HighChargebackRatio => {
                deprecated_copy("Your store has an unacceptably high chargeback ratio")
            }
            Self::ViolateTsPolicy => {
                deprecated_copy("Trust & Safety - Merchant policy violation")
            }
            Self::DuplicateProducts => deprecated_copy("Duplicate products"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::DEPRECATION_NOTICE;

    #[test]
    fn active_codes_have_title_and_body() {
        for reason in InfractionReason::ALL {
            if reason.is_deprecated() {
                continue;
            }
            let copy = reason.copy();
            assert!(!copy.title.is_empty(), "{reason} missing title");
            assert!(!copy.body.is_empty(), "{reason} missing body");
        }
    }

    #[test]
    fn deprecated_codes_use_the_notice_and_carry_no_links() {
        for reason in InfractionReason::ALL {
            if !reason.is_deprecated() {
                continue;
            }
            let copy = reason.copy();
            assert_eq!(copy.body, DEPRECATION_NOTICE, "{reason}");
            assert!(copy.policy.is_none(), "{reason}");
            assert!(copy.faq.is_none(), "{reason}");
        }
    }

    #[test]
    fn fulfillment_family_shares_the_fulfillment_policy_link() {
        for reason in [
            InfractionReason::FakeTracking,
            InfractionReason::MerchantCancellationViolation,
            InfractionReason::UnfulfilledOrder,
            InfractionReason::OrderNotDelivered,
        ] {
            assert_eq!(
                reason.copy().policy.as_deref(),
                Some("[Fulfillment Policy](https://merchant.example.com/policy#fulfillment)"),
                "{reason}"
            );
        }
    }

    #[test]
    fn sentinel_base_copy_links_to_listing_policy() {
        let copy = InfractionReason::ProductIsInappropriate.copy();
        assert!(copy.body.contains("[prohibited content]("));
        assert_eq!(
            copy.policy.as_deref(),
            Some("[Listing Products Policy](https://merchant.example.com/policy#listing)")
        );
        assert!(copy.faq.is_none());
    }
}
