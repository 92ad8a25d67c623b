//! Tagging-violation sub-reason codes.

#![allow(missing_docs)]

use crate::codes::code_enum;
use crate::codes::inappropriate::InappropriateReason;

code_enum! {
    /// Tertiary classification narrowing an inappropriate-content category to
    /// the exact rule violated. Every sub-reason carries a [`parent`]
    /// category, used for data organization and lint only — the copy merge
    /// never consults it.
    ///
    /// [`parent`]: Self::parent
    TaggingSubreason, UnknownSubreason {
        BrandDiscrepancy => "BRAND_DISCREPANCY",
        ConfederateFlag => "CONFEDERATE_FLAG",
        RecreationalDrugsAndChemicals => "RECREATIONAL_DRUGS_AND_CHEMICALS",
        SubscriptionsOrMemberships => "SUBSCRIPTIONS_OR_MEMBERSHIPS",
        DomesticTerroristsMemorabilia => "DOMESTIC_TERRORISTS_MEMORABILIA",
        HyperrealisticContent => "HYPERREALISTIC_CONTENT",
        PlantSeedWithImpossibleClaim => "PLANT_SEED_WITH_IMPOSSIBLE_CLAIM",
        DangerousNonCpaViolation => "DANGEROUS_NON_CPA_VIOLATION",
        ProductVariance => "PRODUCT_VARIANCE",
        PrescriptionStrengthItems => "PRESCRIPTION_STRENGTH_ITEMS",
        NotFocusOfMainImage => "NOT_FOCUS_OF_MAIN_IMAGE",
        ReviewShowWrongProduct => "REVIEW_SHOW_WRONG_PRODUCT",
        SpyCameras => "SPY_CAMERAS",
        TerroristPromotionGroups => "TERRORIST_PROMOTION_GROUPS",
        EuroCurrency => "EURO_CURRENCY",
        AssaultWeaponConversionPieces => "ASSAULT_WEAPON_CONVERSION_PIECES",
        SizeMisrepresentationMainImage => "SIZE_MISREPRESENTATION_MAIN_IMAGE",
        SizeNotAsAdvertised => "SIZE_NOT_AS_ADVERTISED",
        SexuallySuggestiveContent => "SEXUALLY_SUGGESTIVE_CONTENT",
        ListingPromotesHidingProhibitedSubstance => "LISTING_PROMOTES_HIDING_PROHIBITED_SUBSTANCE",
        Penicillin => "PENICILLIN",
        RatingShowWrongProduct => "RATING_SHOW_WRONG_PRODUCT",
        UnreasonableSpec => "UNREASONABLE_SPEC",
        HumanGrowthHormone => "HUMAN_GROWTH_HORMONE",
        Seatbelts => "SEATBELTS",
        FullyLoadedTvBoxes => "FULLY_LOADED_TV_BOXES",
        GunSilencerComponents => "GUN_SILENCER_COMPONENTS",
        LiveAnimal => "LIVE_ANIMAL",
        UnverifiedWarranties => "UNVERIFIED_WARRANTIES",
        Alcohol => "ALCOHOL",
        Tobacco => "TOBACCO",
        SizeMisrepresentation => "SIZE_MISREPRESENTATION",
        PoppersAndMuscleRelaxants => "POPPERS_AND_MUSCLE_RELAXANTS",
        HatefulImagery => "HATEFUL_IMAGERY",
        UnrealisticHealthClaimProducts => "UNREALISTIC_HEALTH_CLAIM_PRODUCTS",
        GunSilencerMisuse => "GUN_SILENCER_MISUSE",
        SelfFeedingBabyPillows => "SELF_FEEDING_BABY_PILLOWS",
        MetalNinjaStars => "METAL_NINJA_STARS",
        HousekeepingTourPackages => "HOUSEKEEPING_TOUR_PACKAGES",
        UnverifiedLogo => "UNVERIFIED_LOGO",
        RandomProduct => "RANDOM_PRODUCT",
        NudeMinorInNonSexualContext => "NUDE_MINOR_IN_NON_SEXUAL_CONTEXT",
        MerchantContactOrReferral => "MERCHANT_CONTACT_OR_REFERRAL",
        RacialCleansing => "RACIAL_CLEANSING",
        Plants => "PLANTS",
        VitaminsAndSupplements => "VITAMINS_AND_SUPPLEMENTS",
        Food => "FOOD",
        NonClinicalContent => "NON_CLINICAL_CONTENT",
        EndangeredSpecies => "ENDANGERED_SPECIES",
        ModBoxes => "MOD_BOXES",
        UnsupportedMedicalClaims => "UNSUPPORTED_MEDICAL_CLAIMS",
        Bullying => "BULLYING",
        SexuallyExplicitContent => "SEXUALLY_EXPLICIT_CONTENT",
        OtcMedication => "OTC_MEDICATION",
        Hoverboards => "HOVERBOARDS",
        Benzene => "BENZENE",
        HumanByProducts => "HUMAN_BY_PRODUCTS",
        CounterfeitCurrency => "COUNTERFEIT_CURRENCY",
        VirtualMoney => "VIRTUAL_MONEY",
        Marijuana => "MARIJUANA",
        TireSpikes => "TIRE_SPIKES",
        PetFood => "PET_FOOD",
        EcigaretteVape => "ECIGARETTE_VAPE",
        Chloroform => "CHLOROFORM",
        AntiGay => "ANTI_GAY",
        UnverifiedPriceInformation => "UNVERIFIED_PRICE_INFORMATION",
        TobaccoSeeds => "TOBACCO_SEEDS",
        ProhibitedSubstancePipe => "PROHIBITED_SUBSTANCE_PIPE",
        CompetitorWatermark => "COMPETITOR_WATERMARK",
        OdometerCorrectionTools => "ODOMETER_CORRECTION_TOOLS",
        ProudBoyMemorabilia => "PROUD_BOY_MEMORABILIA",
        ChildHarness => "CHILD_HARNESS",
        PillPresses => "PILL_PRESSES",
        HitlerImagery => "HITLER_IMAGERY",
        OtherWhiteSupremacyMemorabilia => "OTHER_WHITE_SUPREMACY_MEMORABILIA",
        SelfFeedingBabyBottleClips => "SELF_FEEDING_BABY_BOTTLE_CLIPS",
        UnauthorizedPlatformBranding => "UNAUTHORIZED_PLATFORM_BRANDING",
        NaziMemorabilia => "NAZI_MEMORABILIA",
        HateSpeech => "HATE_SPEECH",
        MagnetsAsToys => "MAGNETS_AS_TOYS",
        ImitationCurrency => "IMITATION_CURRENCY",
        ExplosiveWeapons => "EXPLOSIVE_WEAPONS",
        UsPropMoney => "US_PROP_MONEY",
        PricePointUnreasonable => "PRICE_POINT_UNREASONABLE",
        ContactLensSolution => "CONTACT_LENS_SOLUTION",
        KkkParaphernalia => "KKK_PARAPHERNALIA",
        Beverages => "BEVERAGES",
        CpscViolation => "CPSC_VIOLATION",
        UnverifiedShippingTimeFrame => "UNVERIFIED_SHIPPING_TIME_FRAME",
        MisleadingClaims => "MISLEADING_CLAIMS",
        Glyphosate => "GLYPHOSATE",
        GiftCardsOrAccessCodes => "GIFT_CARDS_OR_ACCESS_CODES",
        PlantSeeds => "PLANT_SEEDS",
        UnverifiedFreeShipping => "UNVERIFIED_FREE_SHIPPING",
        StandaloneLithiumBattery => "STANDALONE_LITHIUM_BATTERY",
        LaserPointers => "LASER_POINTERS",
        ValueVariance => "VALUE_VARIANCE",
        SexuallyExplicitMaterial => "SEXUALLY_EXPLICIT_MATERIAL",
        Bullion => "BULLION",
        Jammers => "JAMMERS",
        FirearmsAndGuns => "FIREARMS_AND_GUNS",
        ChildCarseat => "CHILD_CARSEAT",
        SexualContentIncludingMinor => "SEXUAL_CONTENT_INCLUDING_MINOR",
        GunBuildingKits => "GUN_BUILDING_KITS",
        PlantSeedWithImpossibleClaimV2 => "PLANT_SEED_WITH_IMPOSSIBLE_CLAIM_V2",
        ImageNotProduct => "IMAGE_NOT_PRODUCT",
        EyelashGrowthSerum => "EYELASH_GROWTH_SERUM",
        FeedbackAboutNoProduct => "FEEDBACK_ABOUT_NO_PRODUCT",
        Cigarette => "CIGARETTE",
        NotDescribeAvailableQuantity => "NOT_DESCRIBE_AVAILABLE_QUANTITY",
        HatefulCoronavirusProducts => "HATEFUL_CORONAVIRUS_PRODUCTS",
        InjectableItems => "INJECTABLE_ITEMS",
        ContainsHarmfulContent => "CONTAINS_HARMFUL_CONTENT",
        SizeColorOptionGaming => "SIZE_COLOR_OPTION_GAMING",
        HateGroups => "HATE_GROUPS",
        QanonMemorabilia => "QANON_MEMORABILIA",
        SurpriseBox => "SURPRISE_BOX",
        CustomerFeedbackAboutFalseSpec => "CUSTOMER_FEEDBACK_ABOUT_FALSE_SPEC",
        Butane => "BUTANE",
        PurchasedFollowers => "PURCHASED_FOLLOWERS",
        MissingKeyRequirements => "MISSING_KEY_REQUIREMENTS",
        GunSilencers => "GUN_SILENCERS",
        Contacts => "CONTACTS",
        TitleImageMismatch => "TITLE_IMAGE_MISMATCH",
        CockroachChalk => "COCKROACH_CHALK",
        HookahPen => "HOOKAH_PEN",
        VapeLiquid => "VAPE_LIQUID",
        DangerousCpaViolation => "DANGEROUS_CPA_VIOLATION",
        Ammunition => "AMMUNITION",
        MisleadingKeyFeature => "MISLEADING_KEY_FEATURE",
        UncensoredEroticAnime => "UNCENSORED_EROTIC_ANIME",
        VhsTape => "VHS_TAPE",
        VideoGame => "VIDEO_GAME",
        EpaEmissionsDefeatUs => "EPA_EMISSIONS_DEFEAT_US",
        ProhibitedCustomsCn => "PROHIBITED_CUSTOMS_CN",
        ImageOrTitleChange => "IMAGE_OR_TITLE_CHANGE",
        BlurredLogos => "BLURRED_LOGOS",
        AnimeProducts => "ANIME_PRODUCTS",
        NotFocusMainImage => "NOT_FOCUS_MAIN_IMAGE",
        GradualChange => "GRADUAL_CHANGE",
        CnProhibitedProductStunGuns => "CN_PROHIBITED_PRODUCT_STUN_GUNS",
        FullyExposedNipple => "FULLY_EXPOSED_NIPPLE",
        Records => "RECORDS",
        HiddenSexToys => "HIDDEN_SEX_TOYS",
        BrandingChange => "BRANDING_CHANGE",
        EroticSetups => "EROTIC_SETUPS",
        EpaPesticidesUs => "EPA_PESTICIDES_US",
        BlueRay => "BLUE_RAY",
        ImageOfMasturbation => "IMAGE_OF_MASTURBATION",
        Dvd => "DVD",
        BlurredWatermarks => "BLURRED_WATERMARKS",
        Pesticides => "PESTICIDES",
        BlurredTags => "BLURRED_TAGS",
        Cd => "CD",
        FullyExposedAnus => "FULLY_EXPOSED_ANUS",
        ImageOfPenetration => "IMAGE_OF_PENETRATION",
        CassetteTape => "CASSETTE_TAPE",
        CnProhibitedProductTasers => "CN_PROHIBITED_PRODUCT_TASERS",
        FullyExposedGenital => "FULLY_EXPOSED_GENITAL",
        CnProhibitedProductBbGuns => "CN_PROHIBITED_PRODUCT_BB_GUNS",
        CnProhibitedProductAirsoft => "CN_PROHIBITED_PRODUCT_AIRSOFT",
        Software => "SOFTWARE",
        LaserDisc => "LASER_DISC",
        MisleadingWig => "MISLEADING_WIG",
        CnProhibitedProductImitationFirearms => "CN_PROHIBITED_PRODUCT_IMITATION_FIREARMS",
    }
}

impl TaggingSubreason {
    /// The category this sub-reason belongs to.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn parent(self) -> InappropriateReason {
        use InappropriateReason as C;
        match self {
            Self::BrandDiscrepancy
            | Self::NotFocusOfMainImage
            | Self::ReviewShowWrongProduct
            | Self::SizeMisrepresentationMainImage
            | Self::SizeNotAsAdvertised
            | Self::RatingShowWrongProduct
            | Self::UnreasonableSpec
            | Self::SizeMisrepresentation
            | Self::UnsupportedMedicalClaims
            | Self::PricePointUnreasonable
            | Self::ImageNotProduct
            | Self::FeedbackAboutNoProduct
            | Self::CustomerFeedbackAboutFalseSpec
            | Self::TitleImageMismatch
            | Self::MisleadingKeyFeature
            | Self::BlurredLogos
            | Self::NotFocusMainImage
            | Self::Cd
            | Self::MisleadingWig => C::MisleadingListing,

            Self::ConfederateFlag
            | Self::DomesticTerroristsMemorabilia
            | Self::TerroristPromotionGroups
            | Self::HatefulImagery
            | Self::RacialCleansing
            | Self::Bullying
            | Self::AntiGay
            | Self::ProudBoyMemorabilia
            | Self::HitlerImagery
            | Self::OtherWhiteSupremacyMemorabilia
            | Self::NaziMemorabilia
            | Self::HateSpeech
            | Self::KkkParaphernalia
            | Self::HatefulCoronavirusProducts
            | Self::HateGroups
            | Self::QanonMemorabilia => C::HateCrime,

            Self::RecreationalDrugsAndChemicals
            | Self::ListingPromotesHidingProhibitedSubstance
            | Self::Tobacco
            | Self::PoppersAndMuscleRelaxants
            | Self::ModBoxes
            | Self::Marijuana
            | Self::EcigaretteVape
            | Self::TobaccoSeeds
            | Self::ProhibitedSubstancePipe
            | Self::PillPresses
            | Self::Cigarette
            | Self::HookahPen
            | Self::VapeLiquid => C::Smoking,

            Self::SubscriptionsOrMemberships
            | Self::HousekeepingTourPackages
            | Self::VirtualMoney
            | Self::GiftCardsOrAccessCodes
            | Self::PurchasedFollowers => C::VirtualGoods,

            Self::HyperrealisticContent
            | Self::SexuallySuggestiveContent
            | Self::NudeMinorInNonSexualContext
            | Self::NonClinicalContent
            | Self::SexuallyExplicitContent
            | Self::SexuallyExplicitMaterial
            | Self::SexualContentIncludingMinor
            | Self::UncensoredEroticAnime
            | Self::AnimeProducts
            | Self::FullyExposedNipple
            | Self::EroticSetups
            | Self::ImageOfMasturbation
            | Self::FullyExposedAnus
            | Self::ImageOfPenetration
            | Self::FullyExposedGenital => C::Nudity,

            Self::PlantSeedWithImpossibleClaim
            | Self::Plants
            | Self::PlantSeeds
            | Self::PlantSeedWithImpossibleClaimV2 => C::PlantsAndSeeds,

            Self::DangerousNonCpaViolation | Self::DangerousCpaViolation => C::DangerousItems,

            Self::ProductVariance
            | Self::RandomProduct
            | Self::ValueVariance
            | Self::NotDescribeAvailableQuantity
            | Self::SizeColorOptionGaming
            | Self::SurpriseBox => C::AmbiguousListing,

            Self::PrescriptionStrengthItems
            | Self::Penicillin
            | Self::HumanGrowthHormone
            | Self::OtcMedication
            | Self::Chloroform
            | Self::ContactLensSolution
            | Self::EyelashGrowthSerum
            | Self::InjectableItems
            | Self::Contacts => C::MedicalMaterials,

            Self::SpyCameras
            | Self::FullyLoadedTvBoxes
            | Self::OdometerCorrectionTools
            | Self::Jammers => C::IllegalElectronics,

            Self::EuroCurrency
            | Self::CounterfeitCurrency
            | Self::ImitationCurrency
            | Self::UsPropMoney => C::UnverifiedMoney,

            Self::AssaultWeaponConversionPieces
            | Self::GunSilencerComponents
            | Self::GunSilencerMisuse
            | Self::MetalNinjaStars
            | Self::ExplosiveWeapons
            | Self::LaserPointers
            | Self::FirearmsAndGuns
            | Self::GunBuildingKits
            | Self::GunSilencers
            | Self::Ammunition => C::Weapon,

            Self::Seatbelts | Self::ChildHarness | Self::ChildCarseat => C::SafetyEquipment,

            Self::SelfFeedingBabyPillows
            | Self::SelfFeedingBabyBottleClips
            | Self::MagnetsAsToys
            | Self::CpscViolation => C::RecalledToys,

            Self::UnverifiedWarranties
            | Self::UnrealisticHealthClaimProducts
            | Self::UnverifiedLogo
            | Self::MerchantContactOrReferral
            | Self::UnverifiedPriceInformation
            | Self::CompetitorWatermark
            | Self::UnauthorizedPlatformBranding
            | Self::UnverifiedShippingTimeFrame
            | Self::UnverifiedFreeShipping => C::FalseAdvertising,

            Self::Alcohol
            | Self::VitaminsAndSupplements
            | Self::Food
            | Self::PetFood
            | Self::Beverages => C::ConsumptionMaterials,

            Self::LiveAnimal | Self::EndangeredSpecies => C::AnimalProducts,

            Self::Hoverboards
            | Self::Benzene
            | Self::HumanByProducts
            | Self::TireSpikes
            | Self::Glyphosate
            | Self::StandaloneLithiumBattery
            | Self::Butane
            | Self::CockroachChalk
            | Self::Pesticides => C::HazardousMaterials,

            Self::MisleadingClaims
            | Self::Bullion
            | Self::ContainsHarmfulContent
            | Self::MissingKeyRequirements => C::JewelryAndMetals,

            Self::VhsTape
            | Self::VideoGame
            | Self::Records
            | Self::BlueRay
            | Self::Dvd
            | Self::CassetteTape
            | Self::Software
            | Self::LaserDisc => C::UnlicensedMedia,

            Self::EpaEmissionsDefeatUs | Self::ProhibitedCustomsCn | Self::EpaPesticidesUs => {
                C::RegionalRestrictions
            }

            Self::ImageOrTitleChange
            | Self::GradualChange
            | Self::HiddenSexToys
            | Self::BrandingChange => C::ProductModified,

            Self::CnProhibitedProductStunGuns
            | Self::CnProhibitedProductTasers
            | Self::CnProhibitedProductBbGuns
            | Self::CnProhibitedProductAirsoft
            | Self::CnProhibitedProductImitationFirearms => C::CnProhibitedProducts,

            Self::BlurredWatermarks | Self::BlurredTags => C::BlurredInformation,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::str::FromStr;

    use super::*;

    #[test]
    fn all_codes_round_trip_through_from_str() {
        for sub in TaggingSubreason::ALL {
            let parsed = TaggingSubreason::from_str(sub.as_str()).expect("known code");
            assert_eq!(parsed, *sub);
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<&str> = TaggingSubreason::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), TaggingSubreason::ALL.len());
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = TaggingSubreason::from_str("NOT_A_SUBREASON").unwrap_err();
        assert_eq!(err.code(), "ICOPY-2003");
    }

    #[test]
    fn every_parent_has_multiple_children_or_is_narrow() {
        // Sanity over the parent distribution: the big categories dominate.
        let mut children: HashMap<InappropriateReason, usize> = HashMap::new();
        for sub in TaggingSubreason::ALL {
            *children.entry(sub.parent()).or_default() += 1;
        }
        assert!(children[&InappropriateReason::MisleadingListing] >= 15);
        assert!(children[&InappropriateReason::HateCrime] >= 15);
        assert!(children[&InappropriateReason::Nudity] >= 12);
        // No parent outside the category enum is reachable by construction.
        assert!(children.len() <= InappropriateReason::ALL.len());
    }
}
