//! Primary infraction reason codes.

#![allow(missing_docs)]

use crate::codes::code_enum;

code_enum! {
    /// Top-level classification of why a merchant infraction was issued.
    ///
    /// Covers every code the backend can return, including retired codes that
    /// still surface when merchants view old infractions. The
    /// [`ProductIsInappropriate`](Self::ProductIsInappropriate) sentinel is the
    /// only code that combines with category and sub-reason overlays.
    InfractionReason, UnknownReason {
        RequestUserEmail => "REQUEST_USER_EMAIL",
        RequestMoney => "REQUEST_MONEY",
        BadCustomerService => "BAD_CUSTOMER_SERVICE",
        DisingenuousCustomerService => "DISINGENUOUS_CUSTOMER_SERVICE",
        TakeUserOffPlatform => "TAKE_USER_OFF_PLATFORM",
        ViolatePolicy => "VIOLATE_POLICY",
        FineForCounterfeitGoods => "FINE_FOR_COUNTERFEIT_GOODS",
        ProductHighRefundRatio => "PRODUCT_HIGH_REFUND_RATIO",
        FineProductSwapped => "FINE_PRODUCT_SWAPPED",
        SuspectedFraud => "SUSPECTED_FRAUD",
        RepeatIpInfringementOnBrandOwner => "REPEAT_IP_INFRINGEMENT_ON_BRAND_OWNER",
        MerchantContactInfoInvalid => "MERCHANT_CONTACT_INFO_INVALID",
        LegalTroTakedown => "LEGAL_TRO_TAKEDOWN",
        MisleadingVariation => "MISLEADING_VARIATION",
        LogisticsNegativeBalance => "LOGISTICS_NEGATIVE_BALANCE",
        HighIpInfringement => "HIGH_IP_INFRINGEMENT",
        CnProhibitedProducts => "CN_PROHIBITED_PRODUCTS",
        StrikeBasedHighRiskProhibited => "STRIKE_BASED_HIGH_RISK_PROHIBITED",
        ProductGeoblock => "PRODUCT_GEOBLOCK",
        WarehouseFulfillmentPolicyViolation => "WAREHOUSE_FULFILLMENT_POLICY_VIOLATION",
        BrandedProductGeoblock => "BRANDED_PRODUCT_GEOBLOCK",
        FakeTracking => "FAKE_TRACKING",
        MerchantCancellationViolation => "MERCHANT_CANCELLATION_VIOLATION",
        LateConfirmedFulfillmentViolation => "LATE_CONFIRMED_FULFILLMENT_VIOLATION",
        UnfulfilledOrder => "UNFULFILLED_ORDER",
        InactiveAccount => "INACTIVE_ACCOUNT",
        OrderNotDelivered => "ORDER_NOT_DELIVERED",
        /// The category-qualified sentinel: base copy is rarely shown as-is and
        /// is normally overlaid by category and sub-reason records.
        ProductIsInappropriate => "PRODUCT_IS_INAPPROPRIATE",
        MerchantStandardsBan => "MERCHANT_STANDARDS_BAN",
        //
        // retired codes — may be returned when viewing old infractions
        //
        ReuploadingCounterfeits => "REUPLOADING_COUNTERFEITS",
        ProductLowRatingNoRemove => "PRODUCT_LOW_RATING_NO_REMOVE",
        ViolationOfTerms => "VIOLATION_OF_TERMS",
        StoreValidationIncomplete => "STORE_VALIDATION_INCOMPLETE",
        TaxSettingNotUpdated => "TAX_SETTING_NOT_UPDATED",
        MerchantHarassment => "MERCHANT_HARASSMENT",
        CounterfeitGoods => "COUNTERFEIT_GOODS",
        CsLowCsatScore => "CS_LOW_CSAT_SCORE",
        LateFulfillmentRate => "LATE_FULFILLMENT_RATE",
        DeceptiveFulfillment => "DECEPTIVE_FULFILLMENT",
        RepeatProductSwapping => "REPEAT_PRODUCT_SWAPPING",
        LogisticsIdFaceRecognitionIncomplete => "LOGISTICS_ID_FACE_RECOGNITION_INCOMPLETE",
        HighGmvFromMisleadingProducts => "HIGH_GMV_FROM_MISLEADING_PRODUCTS",
        ProductHighCancelOrderRate => "PRODUCT_HIGH_CANCEL_ORDER_RATE",
        BanEarlyStageMerchant => "BAN_EARLY_STAGE_MERCHANT",
        HighRefundRatio => "HIGH_REFUND_RATIO",
        PolicyTierDemotion => "POLICY_TIER_DEMOTION",
        MerchantHighQualityRefundRatio => "MERCHANT_HIGH_QUALITY_REFUND_RATIO",
        UsTaxInfoUnvalidated => "US_TAX_INFO_UNVALIDATED",
        PenaltyForAutoRefund => "PENALTY_FOR_AUTO_REFUND",
        FinalJudgementOrder => "FINAL_JUDGEMENT_ORDER",
        ConfirmedDeliveryPolicy => "CONFIRMED_DELIVERY_POLICY",
        UnconfirmedTrackingNumbers => "UNCONFIRMED_TRACKING_NUMBERS",
        FineExpressPolicyViolation => "FINE_EXPRESS_POLICY_VIOLATION",
        ProductHighRefundRatioNoRemove => "PRODUCT_HIGH_REFUND_RATIO_NO_REMOVE",
        RespondToAdmin => "RESPOND_TO_ADMIN",
        ExpressPolicyProduct => "EXPRESS_POLICY_PRODUCT",
        ProductHighQualityRefundRatio => "PRODUCT_HIGH_QUALITY_REFUND_RATIO",
        MerchantHighRefundEatCost => "MERCHANT_HIGH_REFUND_EAT_COST",
        DepFineDisablePromotedProduct => "DEP_FINE_DISABLE_PROMOTED_PRODUCT",
        CsLateResponseRate => "CS_LATE_RESPONSE_RATE",
        ExpressPolicyViolation => "EXPRESS_POLICY_VIOLATION",
        HighAutoRefund => "HIGH_AUTO_REFUND",
        MerchantHighCancelOrderRate => "MERCHANT_HIGH_CANCEL_ORDER_RATE",
        HighGmvFromGamingFreeze => "HIGH_GMV_FROM_GAMING_FREEZE",
        ExpressPolicyMerchant => "EXPRESS_POLICY_MERCHANT",
        EmptyPackages => "EMPTY_PACKAGES",
        ViolationOfPolicyTier => "VIOLATION_OF_POLICY_TIER",
        ProductLowRating => "PRODUCT_LOW_RATING",
        FineUpdateToCounterfeit => "FINE_UPDATE_TO_COUNTERFEIT",
        RelatedAccountIsBanned => "RELATED_ACCOUNT_IS_BANNED",
        DepFineDisablePromotedProductForCountry => "DEP_FINE_DISABLE_PROMOTED_PRODUCT_FOR_COUNTRY",
        DuplicateAccounts => "DUPLICATE_ACCOUNTS",
        ExtremelyHighPriceSpread => "EXTREMELY_HIGH_PRICE_SPREAD",
        HighGmvFromGamingBan => "HIGH_GMV_FROM_GAMING_BAN",
        HighChargebackAndFraudRefundRatio => "HIGH_CHARGEBACK_AND_FRAUD_REFUND_RATIO",
        HighGmvFromGamingAudit => "HIGH_GMV_FROM_GAMING_AUDIT",
        InvalidEuResponsiblePerson => "INVALID_EU_RESPONSIBLE_PERSON",
        FakeRating => "FAKE_RATING",
        DepBaitVariablePricing => "DEP_BAIT_VARIABLE_PRICING",
        InvalidTrackingNumbers => "INVALID_TRACKING_NUMBERS",
        HighChargebackRatio => "HIGH_CHARGEBACK_RATIO",
        ViolateTsPolicy => "VIOLATE_TS_POLICY",
        DuplicateProducts => "DUPLICATE_PRODUCTS",
    }
}

impl InfractionReason {
    /// Whether this reason combines with category/sub-reason overlays.
    #[must_use]
    pub const fn is_category_qualified(self) -> bool {
        matches!(self, Self::ProductIsInappropriate)
    }

    /// Whether this code is retired. Retired codes resolve to a synthesized
    /// deprecation notice and are never category-qualified.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::ReuploadingCounterfeits
                | Self::ProductLowRatingNoRemove
                | Self::ViolationOfTerms
                | Self::StoreValidationIncomplete
                | Self::TaxSettingNotUpdated
                | Self::MerchantHarassment
                | Self::CounterfeitGoods
                | Self::CsLowCsatScore
                | Self::LateFulfillmentRate
                | Self::DeceptiveFulfillment
                | Self::RepeatProductSwapping
                | Self::LogisticsIdFaceRecognitionIncomplete
                | Self::HighGmvFromMisleadingProducts
                | Self::ProductHighCancelOrderRate
                | Self::BanEarlyStageMerchant
                | Self::HighRefundRatio
                | Self::PolicyTierDemotion
                | Self::MerchantHighQualityRefundRatio
                | Self::UsTaxInfoUnvalidated
                | Self::PenaltyForAutoRefund
                | Self::FinalJudgementOrder
                | Self::ConfirmedDeliveryPolicy
                | Self::UnconfirmedTrackingNumbers
                | Self::FineExpressPolicyViolation
                | Self::ProductHighRefundRatioNoRemove
                | Self::RespondToAdmin
                | Self::ExpressPolicyProduct
                | Self::ProductHighQualityRefundRatio
                | Self::MerchantHighRefundEatCost
                | Self::DepFineDisablePromotedProduct
                | Self::CsLateResponseRate
                | Self::ExpressPolicyViolation
                | Self::HighAutoRefund
                | Self::MerchantHighCancelOrderRate
                | Self::HighGmvFromGamingFreeze
                | Self::ExpressPolicyMerchant
                | Self::EmptyPackages
                | Self::ViolationOfPolicyTier
                | Self::ProductLowRating
                | Self::FineUpdateToCounterfeit
                | Self::RelatedAccountIsBanned
                | Self::DepFineDisablePromotedProductForCountry
                | Self::DuplicateAccounts
                | Self::ExtremelyHighPriceSpread
                | Self::HighGmvFromGamingBan
                | Self::HighChargebackAndFraudRefundRatio
                | Self::HighGmvFromGamingAudit
                | Self::InvalidEuResponsiblePerson
                | Self::FakeRating
                | Self::DepBaitVariablePricing
                | Self::InvalidTrackingNumbers
                | Self::HighChargebackRatio
                | Self::ViolateTsPolicy
                | Self::DuplicateProducts
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn all_codes_round_trip_through_from_str() {
        for reason in InfractionReason::ALL {
            let parsed = InfractionReason::from_str(reason.as_str()).expect("known code");
            assert_eq!(parsed, *reason);
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<&str> = InfractionReason::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), InfractionReason::ALL.len());
    }

    #[test]
    fn serde_wire_names_match_as_str() {
        for reason in InfractionReason::ALL {
            let json = serde_json::to_string(reason).expect("serialize");
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = InfractionReason::from_str("NOT_A_REASON").unwrap_err();
        assert_eq!(err.code(), "ICOPY-2001");
    }

    #[test]
    fn only_the_sentinel_is_category_qualified() {
        let qualified: Vec<_> = InfractionReason::ALL
            .iter()
            .filter(|r| r.is_category_qualified())
            .collect();
        assert_eq!(qualified, vec![&InfractionReason::ProductIsInappropriate]);
    }

    #[test]
    fn deprecated_codes_are_never_category_qualified() {
        for reason in InfractionReason::ALL {
            assert!(
                !(reason.is_deprecated() && reason.is_category_qualified()),
                "{reason} cannot be both deprecated and category-qualified"
            );
        }
    }

    #[test]
    fn deprecated_count_matches_table() {
        let deprecated = InfractionReason::ALL
            .iter()
            .filter(|r| r.is_deprecated())
            .count();
        assert_eq!(deprecated, 54);
    }
}
