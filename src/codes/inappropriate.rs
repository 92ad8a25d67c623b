//! Inappropriate-content category codes.

#![allow(missing_docs)]

use crate::codes::code_enum;

code_enum! {
    /// Secondary classification used only under the category-qualified
    /// primary reason, narrowing it to a policy category.
    InappropriateReason, UnknownCategory {
        SafetyEquipment => "SAFETY_EQUIPMENT",
        GraphicViolence => "GRAPHIC_VIOLENCE",
        IllegalElectronics => "ILLEGAL_ELECTRONICS",
        AnimalProducts => "ANIMAL_PRODUCTS",
        FalseAdvertising => "FALSE_ADVERTISING",
        RecalledToys => "RECALLED_TOYS",
        PlantsAndSeeds => "PLANTS_AND_SEEDS",
        UnverifiedMoney => "UNVERIFIED_MONEY",
        Weapon => "WEAPON",
        PriceGouging => "PRICE_GOUGING",
        Smoking => "SMOKING",
        MisleadingListing => "MISLEADING_LISTING",
        RegionalRestrictions => "REGIONAL_RESTRICTIONS",
        Nudity => "NUDITY",
        HateCrime => "HATE_CRIME",
        MedicalMaterials => "MEDICAL_MATERIALS",
        AmbiguousListing => "AMBIGUOUS_LISTING",
        JewelryAndMetals => "JEWELRY_AND_METALS",
        ConsumptionMaterials => "CONSUMPTION_MATERIALS",
        HazardousMaterials => "HAZARDOUS_MATERIALS",
        DistastefulContent => "DISTASTEFUL_CONTENT",
        DangerousItems => "DANGEROUS_ITEMS",
        VirtualGoods => "VIRTUAL_GOODS",
        UnlicensedMedia => "UNLICENSED_MEDIA",
        Lighters => "LIGHTERS",
        PropMoney => "PROP_MONEY",
        BlurredWatermark => "BLURRED_WATERMARK",
        PlatformAdmin => "PLATFORM_ADMIN",
        HarmfulChemicals => "HARMFUL_CHEMICALS",
        CnProhibitedProducts => "CN_PROHIBITED_PRODUCTS",
        Carseat => "CARSEAT",
        TeamLogo => "TEAM_LOGO",
        PicturedWithMajorBrand => "PICTURED_WITH_MAJOR_BRAND",
        PiercingGun => "PIERCING_GUN",
        AdultContent => "ADULT_CONTENT",
        ProductModified => "PRODUCT_MODIFIED",
        CensoredFace => "CENSORED_FACE",
        BlurredLabel => "BLURRED_LABEL",
        Hoverboard => "HOVERBOARD",
        CelebrityPhoto => "CELEBRITY_PHOTO",
        TrickCandles => "TRICK_CANDLES",
        BlurredInformation => "BLURRED_INFORMATION",
        IsMajorBrand => "IS_MAJOR_BRAND",
        Harness => "HARNESS",
        TattooGun => "TATTOO_GUN",
        MisleadingListingAuthenticBrand => "MISLEADING_LISTING_AUTHENTIC_BRAND",
        ContactLenses => "CONTACT_LENSES",
        BikeHelmets => "BIKE_HELMETS",
        PlantSeeds => "PLANT_SEEDS",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn all_codes_round_trip_through_from_str() {
        for category in InappropriateReason::ALL {
            let parsed = InappropriateReason::from_str(category.as_str()).expect("known code");
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<&str> = InappropriateReason::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), InappropriateReason::ALL.len());
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = InappropriateReason::from_str("NOT_A_CATEGORY").unwrap_err();
        assert_eq!(err.code(), "ICOPY-2002");
    }
}
