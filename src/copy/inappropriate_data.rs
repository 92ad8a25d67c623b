//! Overlay copy for inappropriate-content categories.

use crate::codes::inappropriate::InappropriateReason;
use crate::copy::CopyOverlay;
use crate::copy::links::{help_link, policy_link, policy_section_url, prohibited_listings_faq};

/// Standard first paragraph for a flagged listing under a named policy.
fn flagged_body(policy_name: &str, section: u32) -> String {
    format!(
        "This listing has been flagged for violating the marketplace's policies on \
         \"{policy_name}\". For more information regarding our \"{policy_name}\" policy, \
         [click here]({}).",
        policy_section_url(section)
    )
}

impl InappropriateReason {
    /// Overlay record for this category. Entries may override any subset of
    /// fields; several override nothing at all.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn overlay(self) -> CopyOverlay {
        match self {
            Self::SafetyEquipment => CopyOverlay::new()
                .title("Safety Equipment")
                .body(flagged_body("Safety Equipment", 38)),
            Self::GraphicViolence => CopyOverlay::new()
                .title("Graphic Violence")
                .body(format!(
                    "{}\n\nAt this time, the marketplace prohibits the sale of products \
                     that depict graphic violence. This listing may be reactivated if such \
                     images are removed.",
                    flagged_body("Graphic Violence", 48)
                ))
                .policy(policy_link("Graphic Violence Policy", 48))
                .faq(prohibited_listings_faq()),
            Self::IllegalElectronics => CopyOverlay::new()
                .title("Privacy and Technology Violations")
                .body(flagged_body("Privacy and Technology Violations", 27)),
            Self::AnimalProducts => CopyOverlay::new()
                .title("Animal Products")
                .body(flagged_body("Animal Products", 41)),
            Self::FalseAdvertising => CopyOverlay::new()
                .title("False Advertising")
                .body(flagged_body("False Advertising", 25)),
            Self::RecalledToys => CopyOverlay::new()
                .title("Recalled Items")
                .body(flagged_body("Recalled Items", 18)),
            Self::PlantsAndSeeds => CopyOverlay::new()
                .title("Plants and Plant Seeds")
                .body(flagged_body("Plants and Plant Seeds", 44)),
            Self::UnverifiedMoney => CopyOverlay::new()
                .title("Unverified and Counterfeit Currency")
                .body(flagged_body("Unverified and Counterfeit Currency", 39)),
            Self::Weapon => CopyOverlay::new()
                .title("Weapons")
                .body(flagged_body("Weapons", 7)),
            Self::PriceGouging => CopyOverlay::new()
                .title("Price Gouging")
                .body(format!(
                    "{}\n\nProduct listings that are priced significantly higher than \
                     reasonable market value are not permitted on the marketplace. Please \
                     create a new listing that accurately represents the value of the \
                     product being sold.",
                    flagged_body("Price Gouging", 40)
                ))
                .policy(policy_link("Price Gouging Policy", 40))
                .faq(help_link("Pandemic Price Gouging Policy FAQ", "mu1260802749270")),
            Self::Smoking => CopyOverlay::new()
                .title("Drugs and Drug Paraphernalia")
                .body(flagged_body("Drugs and Drug Paraphernalia", 14)),
            Self::MisleadingListing => CopyOverlay::new()
                .title("Misleading Listing")
                .body(flagged_body("Misleading Listings", 33)),
            Self::RegionalRestrictions => CopyOverlay::new()
                .title("Regional Restrictions")
                .body(format!(
                    "This product (and product listing) has been regionally restricted \
                     from sale (and offers for sale) in the indicated region(s). Please do \
                     not list this product in the region(s) specified because of one or \
                     more of the following product compliance reasons (without \
                     limitation): (a) missing regulatory labels and/or warnings; (b) \
                     failed, unverified, or lack of accredited lab testing or conformity \
                     assessment(s); (c) risk of physical injury or property damage; \
                     and/or (d) technical standards violation(s).\n\nIf your product is \
                     not listed in the region(s) specified you can ignore this \
                     infraction.\n\nFor more information regarding regionally restricted \
                     products [click here]({}).",
                    policy_section_url(42)
                ))
                .policy(policy_link("Regional Restrictions Policy", 42))
                .faq(prohibited_listings_faq()),
            Self::Nudity => CopyOverlay::new()
                .title("Graphic Sexual Content")
                .body(flagged_body("Graphic Sexual Content", 46)),
            Self::HateCrime => CopyOverlay::new()
                .title("Hateful Symbols & Messages")
                .body(flagged_body("Hateful Symbols and Messages", 23)),
            Self::MedicalMaterials => CopyOverlay::new()
                .title("Medically Regulated Materials")
                .body(flagged_body("Medically Regulated Materials", 34)),
            Self::AmbiguousListing => CopyOverlay::new()
                .title("Ambiguous Listing")
                .body(flagged_body("Ambiguous Listings", 28)),
            Self::JewelryAndMetals => CopyOverlay::new()
                .title("Jewelry and Metals")
                .body(flagged_body("Jewelry", 49)),
            Self::ConsumptionMaterials => CopyOverlay::new()
                .title("Materials for Consumption")
                .body(flagged_body("Materials for Consumption", 22)),
            Self::HazardousMaterials => CopyOverlay::new()
                .title("Hazardous Materials")
                .body(flagged_body("Hazardous Materials", 35)),
            Self::DistastefulContent => CopyOverlay::new()
                .title("Distasteful Content")
                .body(format!(
                    "{}\n\nAt this time, the marketplace prohibits the sale of products \
                     that depict distasteful imagery. This listing may be reactivated if \
                     such images are removed.",
                    flagged_body("Distasteful Content", 47)
                ))
                .policy(policy_link("Distasteful Content Policy", 47))
                .faq(prohibited_listings_faq()),
            Self::DangerousItems => CopyOverlay::new()
                .title("Dangerous and Unsafe Items")
                .body(flagged_body("Dangerous and Unsafe Items", 46)),
            Self::VirtualGoods => CopyOverlay::new()
                .title("Virtual Goods")
                .body(flagged_body("Virtual Goods", 21)),
            Self::UnlicensedMedia => CopyOverlay::new().title("Unlicensed Media"),
            Self::Lighters => CopyOverlay::new().title("Lighters"),
            Self::PropMoney => CopyOverlay::new().title("Prop Money"),
            Self::BlurredWatermark => CopyOverlay::new().title("Blurred Watermarks").body(
                "At this time, the marketplace does not permit the practice of using \
                 images with blurred watermarks. Merchants are encouraged to use their own \
                 images in listings or only utilize images which they have been given \
                 authorization to use.\n\nTo reactivate this listing, ensure all images \
                 used are transparent and provide a brand authorization for any \
                 copyrighted images that are used.",
            ),
            // admin-initiated takedown; no merchant-facing override
            Self::PlatformAdmin => CopyOverlay::new(),
            Self::HarmfulChemicals => CopyOverlay::new().title("Dangerous Chemicals"),
            Self::CnProhibitedProducts => CopyOverlay::new()
                .title("CN Prohibited Products")
                .body("Product listing is prohibited in your region."),
            Self::Carseat => CopyOverlay::new().title("Child Carseat"),
            Self::TeamLogo => CopyOverlay::new().title("Sporting Trademark").body(
                "The product in your listing has been flagged for the unauthorized use of \
                 a sporting trademark. Proof of authorization to sell is required to list \
                 branded team merchandise.\n\nTo reactivate this listing, provide us with \
                 authorization from the trademark owner or a trademark license from an \
                 authorized party allowing third-party use of the trademark.",
            ),
            Self::PicturedWithMajorBrand => CopyOverlay::new()
                .title("Pictured with boxes/bag/hanger/store front of a major brand")
                .body(
                    "The product listing contains an image with a brand logo. The brand \
                     may not appear on boxes, hangers, bags, store fronts, etc (this list \
                     is not exhaustive).",
                ),
            Self::PiercingGun => CopyOverlay::new().title("Piercing Gun"),
            Self::AdultContent => CopyOverlay::new().title("Adult Content"),
            Self::ProductModified => CopyOverlay::new()
                .title("Product Modified")
                .body("The product was changed completely."),
            Self::CensoredFace => CopyOverlay::new().title("Censored Face").body(
                "The product listing contains an image with a face that has been blurred \
                 out.",
            ),
            Self::BlurredLabel => CopyOverlay::new().title("Blurred Label").body(
                "The product listing contains an image with a label, tag or logo that is \
                 blurred out.",
            ),
            Self::Hoverboard => CopyOverlay::new().title("Hoverboard").body(
                "To relist this product for sale, please contact your account manager and \
                 provide proof that this product meets safety regulations.",
            ),
            Self::CelebrityPhoto => CopyOverlay::new()
                .title("Celebrity Photo")
                .body("The product listing contains an image with a photo of a celebrity."),
            Self::TrickCandles => CopyOverlay::new().title("Trick Candles"),
            Self::BlurredInformation => CopyOverlay::new().title("Blurred Information").body(
                "This listing has been flagged for violating the marketplace's policies \
                 on \"Censored Information\".",
            ),
            Self::IsMajorBrand => CopyOverlay::new()
                .title("Counterfeit and/or IP Violation")
                .body(
                    "The product listing contains a direct copy or imitation of a brand's \
                     logo, design or pattern or uses copyrighted images belonging to \
                     others.",
                ),
            Self::Harness => CopyOverlay::new().title("Child Harness").body(
                "Child harnesses may only be sold within restricted regions by merchants \
                 enrolled in the local-to-local program. Provide authorization \
                 documentation to relist this product.",
            ),
            Self::TattooGun => CopyOverlay::new().title("Tattoo Gun"),
            Self::MisleadingListingAuthenticBrand => CopyOverlay::new()
                .title("Counterfeit and/or IP Violation")
                .body(
                    "This product listing has been detected to violate the merchant \
                     policy on misleading listings by being identified by the merchant as \
                     an authentic branded product, but instead appearing to be \
                     non-authentic. Please provide either a brand or other proof of \
                     authenticity to re-list your branded product.",
                ),
            Self::ContactLenses => CopyOverlay::new().title("Contact Lenses"),
            Self::BikeHelmets => CopyOverlay::new().title("Bike and Motorcycle Helmets"),
            Self::PlantSeeds => CopyOverlay::new().title("Plant Seeds").body(
                "Plant seeds may only be sold within restricted regions by merchants \
                 enrolled in the local-to-local program. Provide authorization \
                 documentation to relist this product.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_categories_embed_their_policy_section_link() {
        let overlay = InappropriateReason::Weapon.overlay();
        let body = overlay.body.expect("weapons body");
        assert!(body.contains("\"Weapons\""));
        assert!(body.contains("/policy/inappropriate-reasons/7)"));
    }

    #[test]
    fn only_platform_admin_is_fully_empty() {
        let empty: Vec<_> = InappropriateReason::ALL
            .iter()
            .filter(|c| c.overlay().is_empty())
            .collect();
        assert_eq!(empty, vec![&InappropriateReason::PlatformAdmin]);
    }

    #[test]
    fn title_only_entries_override_nothing_else() {
        for category in [
            InappropriateReason::Lighters,
            InappropriateReason::PropMoney,
            InappropriateReason::AdultContent,
            InappropriateReason::TattooGun,
        ] {
            let overlay = category.overlay();
            assert!(overlay.title.is_some(), "{category}");
            assert!(overlay.body.is_none(), "{category}");
            assert!(overlay.policy.is_none(), "{category}");
            assert!(overlay.faq.is_none(), "{category}");
        }
    }

    #[test]
    fn rich_categories_override_all_four_fields() {
        for category in [
            InappropriateReason::GraphicViolence,
            InappropriateReason::PriceGouging,
            InappropriateReason::RegionalRestrictions,
            InappropriateReason::DistastefulContent,
        ] {
            let overlay = category.overlay();
            assert!(overlay.title.is_some(), "{category}");
            assert!(overlay.body.is_some(), "{category}");
            assert!(overlay.policy.is_some(), "{category}");
            assert!(overlay.faq.is_some(), "{category}");
        }
    }
}
