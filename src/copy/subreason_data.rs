//! Overlay copy for tagging-violation sub-reasons.
//!
//! Entries cluster into families that share a policy link, FAQ link, and
//! body template; the helpers below keep each family's wording in one place.

use crate::codes::subreason::TaggingSubreason;
use crate::copy::CopyOverlay;
use crate::copy::links::{
    ambiguous_listing_policy, animal_products_policy, consumption_policy, currency_policy,
    dangerous_items_policy, drugs_policy, false_advertising_faq, false_advertising_policy,
    hateful_symbols_policy, hazardous_materials_policy, help_link, jewelry_policy, md_link,
    medical_materials_policy, misleading_listing_faq, misleading_listing_policy, plants_policy,
    policy_section_url, privacy_tech_policy, prohibited_listings_faq, recalled_items_faq,
    recalled_items_policy, safety_equipment_policy, sexual_content_faq, sexual_content_policy,
    virtual_goods_policy, weapons_policy,
};

/// Closing sentence shared by the misleading-listing family.
const MISLEADING_SENTENCE: &str = "Listings which misrepresent products or set false \
     expectations for customers are considered misleading and are in direct violation of the \
     marketplace's policies. Please create a new listing that accurately represents the \
     product being sold.";

fn entry(title: &str, body: impl Into<String>, policy: String, faq: String) -> CopyOverlay {
    CopyOverlay::new().title(title).body(body).policy(policy).faq(faq)
}

fn hate(title: &str) -> CopyOverlay {
    entry(
        title,
        "At this time, the marketplace does not permit the sale of any product which \
         glorifies or endorses hatred, violence, racial, sexual or religious intolerance. \
         Items which promote organizations holding such beliefs are also prohibited. This \
         product may not be relisted.",
        hateful_symbols_policy(),
        prohibited_listings_faq(),
    )
}

fn misleading(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, misleading_listing_policy(), misleading_listing_faq())
}

fn weapon(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, weapons_policy(), prohibited_listings_faq())
}

fn drug(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, drugs_policy(), prohibited_listings_faq())
}

fn medical(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, medical_materials_policy(), prohibited_listings_faq())
}

fn hazard(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, hazardous_materials_policy(), prohibited_listings_faq())
}

fn currency(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, currency_policy(), prohibited_listings_faq())
}

fn virtual_goods(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, virtual_goods_policy(), prohibited_listings_faq())
}

fn consumption(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, consumption_policy(), prohibited_listings_faq())
}

fn animal(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, animal_products_policy(), prohibited_listings_faq())
}

fn plants(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, plants_policy(), prohibited_listings_faq())
}

fn ambiguous(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, ambiguous_listing_policy(), prohibited_listings_faq())
}

fn jewelry(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, jewelry_policy(), prohibited_listings_faq())
}

fn safety(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, safety_equipment_policy(), prohibited_listings_faq())
}

fn electronics(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, privacy_tech_policy(), prohibited_listings_faq())
}

fn recalled(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, recalled_items_policy(), recalled_items_faq())
}

fn nudity(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, sexual_content_policy(), sexual_content_faq())
}

fn false_ad(title: &str, body: impl Into<String>) -> CopyOverlay {
    entry(title, body, false_advertising_policy(), false_advertising_faq())
}

fn dangerous(title: &str) -> CopyOverlay {
    entry(
        title,
        "The marketplace does not permit the sale of products which may potentially or \
         actually be dangerous or unsafe to consumers, their property, and/or that may \
         violate safety standards, laws, or regulations. This product may not be relisted.",
        dangerous_items_policy(),
        prohibited_listings_faq(),
    )
}

fn cn_prohibited(title: &str) -> CopyOverlay {
    CopyOverlay::new()
        .title(title)
        .body("Product listing is prohibited in your region.")
}

fn media(title: &str, noun: &str) -> CopyOverlay {
    CopyOverlay::new().title(title).body(format!(
        "Proof of ownership or authorization to sell is required to list {noun}. In order \
         to relist this product for sale, please provide us with authorization from the \
         rights owner or other authorized party."
    ))
}

fn pornographic(title: &str, what: &str) -> CopyOverlay {
    CopyOverlay::new().title(title).body(format!(
        "Pornographic material such as {what} is not permitted. Compliant listings of \
         health and sensuality products must use images that clearly display the product \
         for sale without the use of gratuitous nudity or obscenity. The listing may be \
         reactivated if such images are removed or appropriately censored."
    ))
}

fn preapproved_body(what: &str) -> String {
    format!(
        "The sale of {what} is prohibited unless you are a pre-approved merchant within \
         specific regions. If you are a pre-approved merchant, please provide authorization \
         documentation to relist this product."
    )
}

fn impossible_seed_claim_body() -> String {
    "The images and/or description for these plant seeds make impossible claims. Misuse of \
     images and other listing elements to falsely promote a product is not permitted. This \
     listing may be reactivated if such images or references are removed."
        .to_string()
}

fn size_misrepresentation_body() -> String {
    format!(
        "The images showcase the product size to be much larger than what is actually being \
         sold in this listing. Please make sure all photos of this listing represent the \
         product actually being sold and do not create a false impression or confusion for \
         your customers. {MISLEADING_SENTENCE}"
    )
}

impl TaggingSubreason {
    /// Overlay record for this sub-reason.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn overlay(self) -> CopyOverlay {
        match self {
            Self::BrandDiscrepancy => misleading(
                "Brand Discrepancy",
                format!(
                    "We received written feedback indicating the product received was not \
                     the brand of the item being advertised in the listing. \
                     {MISLEADING_SENTENCE} {}.",
                    md_link("Learn more", &policy_section_url(33))
                ),
            ),
            Self::ConfederateFlag => hate("Confederate Flag"),
            Self::RecreationalDrugsAndChemicals => drug(
                "Recreational Drugs and Chemicals",
                "At this time, the marketplace prohibits the sale of all recreational \
                 drugs, research chemicals, party drugs, and controlled substances. This \
                 product may not be relisted.",
            ),
            Self::SubscriptionsOrMemberships => virtual_goods(
                "Subscriptions to Channels, Websites, or Other Memberships",
                "All goods sold on the marketplace must be tangible products. The sale of \
                 subscriptions to television channels, websites, or other memberships is \
                 not permitted. This product may not be relisted.",
            ),
            Self::DomesticTerroristsMemorabilia => hate("Domestic Terrorists Memorabilia"),
            Self::HyperrealisticContent => nudity(
                "Hyperrealistic Content",
                "The marketplace does not allow realistic sexual wellness products such as \
                 (but not limited to) life-like or flesh-like sex dolls and/or body parts. \
                 This product may not be relisted.",
            ),
            Self::PlantSeedWithImpossibleClaim | Self::PlantSeedWithImpossibleClaimV2 => {
                plants("Plant Seeds with Impossible Claims", impossible_seed_claim_body())
            }
            Self::DangerousNonCpaViolation => dangerous("Non-CPA Takedown"),
            Self::ProductVariance => ambiguous(
                "Product Variance",
                "There are multiple products being sold in this product listing. Please \
                 make all available options clear and easy to identify for customers and \
                 create a new listing that accurately represents the product being sold.",
            ),
            Self::PrescriptionStrengthItems => medical(
                "Prescription Strength Items",
                "At this time, the marketplace prohibits the sale of prescription strength \
                 items. This product may not be relisted.",
            ),
            Self::NotFocusOfMainImage => misleading(
                "Product is not the focus of the main image",
                format!(
                    "The first image in this listing does not clearly show the product \
                     being sold. The product being sold occupies 25% or less of the main \
                     image and is utilized in relation to another product that is not for \
                     sale. {MISLEADING_SENTENCE}"
                ),
            ),
            Self::ReviewShowWrongProduct => misleading(
                "Customer Feedback About Different Product",
                format!(
                    "The product reviews from our customers indicate the product received \
                     was fundamentally different (e.g., serves a different function, \
                     product is an entirely different category of product or looks \
                     completely different) than the item being advertised. \
                     {MISLEADING_SENTENCE}"
                ),
            ),
            Self::SpyCameras => electronics(
                "Spy Cameras with Sexually Exploitive Surveillance Images",
                "At this time, the marketplace prohibits the sale of surveillance \
                 equipment sold with the explicit intention of sexual or illicit purposes. \
                 This product may be relisted if such images are removed.",
            ),
            Self::TerroristPromotionGroups => hate("Terrorist Promotion Groups"),
            Self::EuroCurrency => currency(
                "Euro Currency",
                "At this time, the marketplace prohibits the sale of euro currency. This \
                 product may not be relisted.",
            ),
            Self::AssaultWeaponConversionPieces => weapon(
                "Assault Weapon Conversion Pieces",
                "At this time, the marketplace prohibits the sale of all firearm parts and \
                 accessories used to convert the machine into an assault weapon. This \
                 product may not be relisted.",
            ),
            Self::SizeMisrepresentationMainImage | Self::SizeMisrepresentation => misleading(
                "Size Misrepresentation (Product Image Only)",
                size_misrepresentation_body(),
            ),
            Self::SizeNotAsAdvertised => misleading(
                "Description & Size Not as Advertised",
                "The description and/or package size does not reflect the same product as \
                 the title and/or images. Please update the title and/or images and create \
                 a new listing that accurately represents the product being sold.",
            ),
            Self::SexuallySuggestiveContent => nudity(
                "Sexually Suggestive Content",
                "The marketplace does not allow listings that include sexually suggestive \
                 content in the title, images, and/or description. If such content is \
                 removed, the listing may be reactivated.",
            ),
            Self::ListingPromotesHidingProhibitedSubstance => drug(
                "Listing Promotes Hiding Prohibited Substance",
                "At this time, the marketplace prohibits the sale of products that promote \
                 the concealment of prohibited substances. If such content is removed, the \
                 listing may be reactivated.",
            ),
            Self::Penicillin => medical(
                "Penicillin",
                "At this time, the marketplace prohibits the sale of penicillin. This \
                 product may not be relisted.",
            ),
            Self::RatingShowWrongProduct => misleading(
                "Customer Images Show Different Product",
                format!(
                    "The product review images from our customers indicate the product \
                     received was fundamentally different (e.g., serves a different \
                     function, product is an entirely different category of product, or \
                     looks completely different) than the item being advertised. \
                     {MISLEADING_SENTENCE}"
                ),
            ),
            Self::UnreasonableSpec => misleading(
                "Unreasonable or Exaggerated Spec",
                "Listings and/or product variations advertising devices with false, \
                 exaggerated, unreasonable, or impossible capacities/specifications are \
                 prohibited on the marketplace. Please create a new listing that \
                 accurately represents the product being sold.",
            ),
            Self::HumanGrowthHormone => medical(
                "Human Growth Hormone",
                "At this time, the marketplace prohibits the sale of human growth hormone. \
                 This product may not be relisted.",
            ),
            Self::Seatbelts => safety(
                "Seatbelts & Seatbelt Extenders",
                preapproved_body("seatbelts and seatbelt extenders"),
            ),
            Self::FullyLoadedTvBoxes => electronics(
                "Fully Loaded TV Boxes",
                "At this time, the marketplace prohibits the sale of media streaming \
                 devices that provide unauthorized access to content. This product may not \
                 be relisted.",
            ),
            Self::GunSilencerComponents => weapon(
                "Gun Silencer Components",
                "At this time, the marketplace prohibits the sale of any material \
                 component/parts that can be used to build a silencer or attach a silencer \
                 to a firearm. This product may not be relisted.",
            ),
            Self::LiveAnimal => animal(
                "Living Animals",
                "At this time, the marketplace prohibits the sale of live animals. This \
                 product may not be relisted.",
            ),
            Self::UnverifiedWarranties => false_ad(
                "Unverified Warranties",
                format!(
                    "At this time, the marketplace prohibits listings containing \
                     unverified warranties or guarantees. {}",
                    preapproved_body("verified warranties")
                ),
            ),
            Self::Alcohol => consumption(
                "Alcohol",
                "At this time, the marketplace prohibits the sale of alcohol. This product \
                 may not be relisted.",
            ),
            Self::Tobacco => drug(
                "Tobacco",
                "At this time, the marketplace prohibits the sale of tobacco and/or \
                 products that contain tobacco. This product may not be relisted.",
            ),
            Self::PoppersAndMuscleRelaxants => drug(
                "Poppers and Muscle Relaxants",
                "At this time, the marketplace prohibits the sale of poppers and other \
                 recreational muscle relaxant drugs. This product may not be relisted.",
            ),
            Self::HatefulImagery => hate("Hateful Imagery"),
            Self::UnrealisticHealthClaimProducts => false_ad(
                "Unrealistic Health Claims",
                "Products or listings which advertise, promote, allude to, and/or depict \
                 any results for health and health-related, or personal care products \
                 without adequate substantiation are not permitted on the marketplace. If \
                 such content is removed, the listing may be reactivated.",
            ),
            Self::GunSilencerMisuse => weapon(
                "Gun Silencer Misuse",
                "At this time, the marketplace prohibits the sale of any item intended for \
                 use as a silencer or commonly misused as a silencer. This product may not \
                 be relisted.",
            ),
            Self::SelfFeedingBabyPillows => recalled(
                "Self Feeding Baby Pillows",
                "At this time, self-feeding baby pillows are prohibited on the \
                 marketplace. This product may not be relisted.",
            ),
            Self::MetalNinjaStars => weapon(
                "Real, Metal Ninja Stars (Throwing Stars)",
                "At this time, the marketplace prohibits the sale of all throwing stars. \
                 This product may not be relisted.",
            ),
            Self::HousekeepingTourPackages => virtual_goods(
                "Housekeeping, Tour Packages, or Other Services",
                "All goods sold on the marketplace must be tangible products. At this \
                 time, the marketplace prohibits the sale of housekeeping, tour packages, \
                 or other services. This product may not be relisted.",
            ),
            Self::UnverifiedLogo => false_ad(
                "Unverified Logos from Credible Agencies",
                "At this time, the marketplace prohibits listings containing unverified \
                 logos from credible agencies. This listing may be reactivated if such \
                 images or references are removed.",
            ),
            Self::RandomProduct => ambiguous(
                "Random / Undefined Product",
                "Listing titles, images, price points, size/color options, style \
                 variations, and descriptions should all align with the product being \
                 sold. Please make all available options clear and easy to identify for \
                 customers and create a new listing that accurately represents the product \
                 being sold.",
            ),
            Self::NudeMinorInNonSexualContext => nudity(
                "Nude Minor in Non-Sexual Context",
                "Listings which contain images of a nude minor (including partial nudity) \
                 are not permitted on the marketplace. The listing may be reactivated if \
                 such images are removed.",
            ),
            Self::MerchantContactOrReferral => false_ad(
                "Merchant Contact or Referral Information",
                "At this time, the marketplace prohibits listings containing merchant \
                 contact or referral information. If such content is removed, the listing \
                 may be reactivated.",
            ),
            Self::RacialCleansing => hate("Racial Cleansing"),
            Self::Plants => plants("Plants", preapproved_body("plants")),
            Self::VitaminsAndSupplements => consumption(
                "Vitamins & Supplements",
                preapproved_body("vitamins and supplements"),
            ),
            Self::Food => consumption("Food", preapproved_body("food")),
            Self::NonClinicalContent => nudity(
                "Non-Clinical Content",
                "The marketplace does not allow sexual wellness product listings where the \
                 product is not the primary focus of the image. Sexual wellness product \
                 listings must include images that clearly depict the product for sale \
                 against a white or transparent backdrop and/or be free of blurring or \
                 censoring. To reactivate this listing, ensure all images comply with \
                 marketplace policies.",
            ),
            Self::EndangeredSpecies => animal(
                "Endangered Species",
                "At this time, the marketplace prohibits the sale of any animal (live or \
                 deceased) that is a threatened or endangered species and/or products \
                 containing or made from endangered species or their parts. This product \
                 may not be relisted.",
            ),
            Self::ModBoxes => drug(
                "Mod Boxes",
                "At this time, the marketplace prohibits the sale of mod boxes and/or any \
                 other electrical accessories used for the consumption of smokable \
                 substances. This product may not be relisted.",
            ),
            Self::UnsupportedMedicalClaims => misleading(
                "Unsupported Medical Claims",
                format!(
                    "The listing advertises the use of unsupported medical claims and/or \
                     images that set false expectations for customers. {MISLEADING_SENTENCE}"
                ),
            ),
            Self::Bullying => hate("Bullying"),
            Self::SexuallyExplicitContent => nudity(
                "Sexually Explicit Content",
                "The marketplace does not allow listings that include sexually explicit \
                 content in the title, images, and/or description. If such content is \
                 removed, the listing may be reactivated.",
            ),
            Self::OtcMedication => medical(
                "OTC Medication",
                preapproved_body("over the counter medication"),
            ),
            Self::Hoverboards => hazard(
                "Hoverboards",
                "At this time, the marketplace prohibits the sale of hoverboards. This \
                 product may not be relisted.",
            ),
            Self::Benzene => hazard(
                "Products that contain Benzene",
                "At this time, the marketplace prohibits the sale of benzene and/or any \
                 product containing benzene. This product may not be relisted.",
            ),
            Self::HumanByProducts => hazard(
                "Human By-Products",
                "At this time, the marketplace prohibits the sale of human by-products. \
                 This product may not be relisted.",
            ),
            Self::CounterfeitCurrency => currency(
                "CPA: Counterfeit Currency",
                "At this time, the marketplace prohibits the sale of counterfeit currency. \
                 This product may not be relisted.",
            ),
            Self::VirtualMoney => virtual_goods(
                "Virtual Money for Online Games",
                "All goods sold on the marketplace must be tangible products. The sale of \
                 virtual money or other digital goods is not permitted. This product may \
                 not be relisted.",
            ),
            Self::Marijuana => drug(
                "Marijuana / Cannabis",
                "At this time, the marketplace prohibits the sale of marijuana, cannabis, \
                 and CBD in all forms. This product may not be relisted.",
            ),
            Self::TireSpikes => hazard(
                "Tire Spikes",
                "At this time, the marketplace prohibits the sale of tire spikes. This \
                 product may not be relisted.",
            ),
            Self::PetFood => consumption("Pet Food", preapproved_body("pet food")),
            Self::EcigaretteVape => drug(
                "E-cigarettes / Vape Pens",
                "At this time, the marketplace prohibits the sale of e-cigarettes, vape \
                 pens, and any other electrical accessories used for the consumption of \
                 smokable substances. This product may not be relisted.",
            ),
            Self::Chloroform => medical(
                "Chloroform",
                "At this time, the marketplace prohibits the sale of chloroform. This \
                 product may not be relisted.",
            ),
            Self::AntiGay => hate("Anti-gay"),
            // FAQ deliberately omits the prohibited-listings link for this code.
            Self::UnverifiedPriceInformation => entry(
                "Unverified Price Information",
                "This listing contains inconsistencies in the product price and falls \
                 outside verifiable market rates. If such content is removed, the listing \
                 may be reactivated.",
                false_advertising_policy(),
                help_link("False Advertising FAQ", "mu360005950894"),
            ),
            Self::TobaccoSeeds => drug(
                "Tobacco / Marijuana / Cannabis / Hemp Seeds",
                "At this time, the marketplace prohibits the sale of tobacco, marijuana, \
                 cannabis, hemp seeds, and/or products that appear to contain such \
                 substances. This product may not be relisted.",
            ),
            Self::ProhibitedSubstancePipe => drug(
                "Prohibited Substance Pipe",
                "At this time, the marketplace prohibits the sale of pipes that can be \
                 used to consume prohibited substances. This product may not be relisted.",
            ),
            Self::CompetitorWatermark => false_ad(
                "Competitor Watermark",
                "At this time, the use of watermarks, logos, images, and links belonging \
                 to other marketplaces is not permitted. Referring users off of the \
                 marketplace is a direct violation of merchant policies. If such content \
                 is removed, the listing may be reactivated.",
            ),
            Self::OdometerCorrectionTools => electronics(
                "Odometer Correction Tools",
                "At this time, the marketplace prohibits the sale of odometer correction \
                 tools. This product may not be relisted.",
            ),
            Self::ProudBoyMemorabilia => hate("Proud Boy Memorabilia"),
            Self::ChildHarness => safety("Child Harness", preapproved_body("child harnesses")),
            Self::PillPresses => drug(
                "Pill Presses",
                "At this time, the marketplace prohibits the sale of pill presses in all \
                 forms. This product may not be relisted.",
            ),
            Self::HitlerImagery => hate("Hitler Imagery"),
            Self::OtherWhiteSupremacyMemorabilia => hate("Other White Supremacy Memorabilia"),
            Self::SelfFeedingBabyBottleClips => recalled(
                "Self Feeding Baby Bottle Clips",
                "At this time, self-feeding baby bottle clips are prohibited on the \
                 marketplace. This product may not be relisted.",
            ),
            Self::UnauthorizedPlatformBranding => false_ad(
                "Unauthorized Use of Platform Branding",
                "At this time, the marketplace prohibits listings containing platform \
                 branding or badges without authorization. If such content is removed, the \
                 listing may be reactivated.",
            ),
            Self::NaziMemorabilia => hate("Nazi Memorabilia"),
            Self::HateSpeech => hate("Hate Speech"),
            Self::MagnetsAsToys => recalled(
                "Buckyballs / Small Magnets Advertised as Toys",
                "At this time, all small magnets and/or products that contain small \
                 magnets are prohibited on the marketplace. This product may not be \
                 relisted.",
            ),
            Self::ImitationCurrency => currency(
                "Imitation Currency Not Properly Labeled",
                "At this time, the marketplace prohibits the sale of imitation currency \
                 that is absent of proper labeling. The product may be relisted if such \
                 content is properly labeled.",
            ),
            Self::ExplosiveWeapons => weapon(
                "Explosive Weapons",
                "At this time, the marketplace prohibits the sale of explosive and/or \
                 combustible weapons. This product may not be relisted.",
            ),
            Self::UsPropMoney => currency(
                "US Prop Money",
                "At this time, the marketplace prohibits the sale of US prop money. This \
                 product may not be relisted.",
            ),
            Self::PricePointUnreasonable => misleading(
                "Price Point Unreasonable",
                "The price of this item is unreasonably low for the product being sold \
                 and is in direct violation of the marketplace's policies. Please create a \
                 new listing that accurately represents the value of the product being \
                 sold.",
            ),
            Self::ContactLensSolution => medical(
                "Contact Lens Solution",
                "At this time, the marketplace prohibits the sale of contact lens \
                 solution. This product may not be relisted.",
            ),
            Self::KkkParaphernalia => hate("KKK Paraphernalia"),
            Self::Beverages => consumption(
                "Beverages",
                preapproved_body("non-alcoholic beverages"),
            ),
            Self::CpscViolation => recalled(
                "CPA Violation",
                "Recalled items reported by Consumer Protection Agencies (CPA) or other \
                 regulatory agencies are not permitted on the marketplace. This product \
                 may not be relisted.",
            ),
            Self::UnverifiedShippingTimeFrame => false_ad(
                "Unverified Shipping Time Frame Information",
                "At this time, the marketplace prohibits listings containing unverified \
                 shipping time frame information. If such content is removed, the listing \
                 may be reactivated.",
            ),
            Self::MisleadingClaims => jewelry(
                "Misleading Claims",
                "Products and/or listings must comply with all applicable laws and \
                 regulations to the product being advertised. The marketplace prohibits \
                 listings with misleading claims and/or statements without adequate \
                 substantiation (including exaggerated claims). The title, description, \
                 price, size/color options, and images used to advertise a product should \
                 clearly and accurately reflect the product being sold. If such content is \
                 removed, the listing may be reactivated.",
            ),
            Self::Glyphosate => hazard(
                "Products containing glyphosate",
                "At this time, the marketplace prohibits the sale of glyphosate and/or any \
                 product containing glyphosate. This product may not be relisted.",
            ),
            Self::GiftCardsOrAccessCodes => virtual_goods(
                "Gift Cards or Access Codes",
                "All goods sold on the marketplace must be tangible products. The sale of \
                 gift cards or access codes is not permitted. This product may not be \
                 relisted.",
            ),
            Self::PlantSeeds => plants(
                "Plant Seeds",
                format!(
                    "This listing has been flagged for violating the marketplace's \
                     policies on \"Plants and Plant Seeds\".\n\n{} {}.",
                    preapproved_body("plant seeds"),
                    md_link("Learn more", &policy_section_url(44))
                ),
            ),
            Self::UnverifiedFreeShipping => false_ad(
                "Unverified Free Shipping Claim",
                "Providing shipping time frame information in the images, title, or \
                 description of a product is prohibited on the marketplace. If such \
                 content is removed, the listing may be reactivated.",
            ),
            Self::StandaloneLithiumBattery => hazard(
                "Lithium standalone and lithium-ion battery",
                "At this time, the marketplace prohibits the sale of standalone lithium or \
                 lithium-ion batteries. This product may not be relisted.",
            ),
            Self::LaserPointers => weapon(
                "High-Powered Laser Pointers",
                "At this time, the marketplace prohibits the sale of high-powered laser \
                 pointers. This product may not be relisted.",
            ),
            Self::ValueVariance => ambiguous(
                "Value Variance",
                "This listing contains multiple products with a difference in value of \
                 product quality and/or price discrepancies. Please make all available \
                 options clear and easy to identify for customers and create a new listing \
                 that accurately represents the product being sold.",
            ),
            Self::SexuallyExplicitMaterial => nudity(
                "Sexually Explicit Material",
                "Compliant listings of health and sensuality products must use images \
                 that clearly display the product for sale without the use of gratuitous \
                 nudity or obscenity. The listing may be reactivated if such images are \
                 removed.",
            ),
            Self::Bullion => jewelry(
                "Bullion",
                "Counterfeit and/or replica bullion is prohibited on the marketplace. \
                 This product may not be relisted.",
            ),
            Self::Jammers => electronics(
                "Jammers",
                "At this time, the marketplace prohibits the sale of signal jammers. This \
                 product may not be relisted.",
            ),
            Self::FirearmsAndGuns => weapon(
                "Firearms / Guns",
                "At this time, the marketplace prohibits the sale of firearms and guns. \
                 This product may not be relisted.",
            ),
            Self::ChildCarseat => safety("Child Car Seat", preapproved_body("child car seats")),
            Self::SexualContentIncludingMinor => nudity(
                "Sexual Content Including Minor",
                "Products and listings which promote, allude, and/or depict sexual \
                 engagement with a minor are not permitted on the marketplace. This \
                 product may not be relisted.",
            ),
            Self::GunBuildingKits => weapon(
                "Gun Building Kits",
                "At this time, the marketplace prohibits the sale of real gun building \
                 kits including instructions, pieces, blueprints, and other materials. \
                 This product may not be relisted.",
            ),
            Self::ImageNotProduct => misleading(
                "All But One of the Images are not of the Product",
                "All images should accurately include the product that is being sold. \
                 Additionally, the main image must always show the product being sold. \
                 Please update all images and create a new listing that accurately \
                 represents the product being sold.",
            ),
            Self::EyelashGrowthSerum => medical(
                "Eyelash Growth Serum",
                "At this time, the marketplace prohibits the sale of eyelash growth serum. \
                 This product may not be relisted.",
            ),
            Self::FeedbackAboutNoProduct => misleading(
                "Customer Feedback About No Product Received",
                format!(
                    "The product reviews or image evidence from our customers indicate \
                     that many did not receive the product, indicating false tracking, \
                     receiving a letter/gift, or receiving an empty package. \
                     {MISLEADING_SENTENCE}"
                ),
            ),
            Self::Cigarette => drug(
                "Cigars and Cigarettes",
                "At this time, the marketplace prohibits the sale of all types of cigars \
                 and cigarettes. This product may not be relisted.",
            ),
            Self::NotDescribeAvailableQuantity => ambiguous(
                "First Image / Title does not explicitly describe each available quantities",
                "The first image and/or title only shows the largest available quantity. \
                 Please clearly advertise the various quantity of products being sold in \
                 this listing in order to make all available options clear and easy to \
                 identify for customers. Please create a new listing that accurately \
                 represents the product being sold.",
            ),
            Self::HatefulCoronavirusProducts => hate("Hateful Coronavirus Products"),
            Self::InjectableItems => medical(
                "Injectable Items",
                "At this time, the marketplace prohibits the sale of injectable items. \
                 This product may not be relisted.",
            ),
            Self::ContainsHarmfulContent => jewelry(
                "Contains Harmful Content",
                "Products that contain (or listings referencing) toxic or harmful, \
                 hazardous, dangerous, or prohibited metals, substances, and/or chemicals \
                 are prohibited on the marketplace. This product may not be relisted.",
            ),
            Self::SizeColorOptionGaming => ambiguous(
                "Size / Color Option Gaming",
                "The drop-down options for size or color include unrealistic options. \
                 Based on the size and color options provided, it is unclear what product \
                 is being sold. Please make all available drop-down options clear and easy \
                 to identify for customers and create a new listing that accurately \
                 represents the product being sold.",
            ),
            Self::HateGroups => hate("Hate Groups"),
            Self::QanonMemorabilia => hate("QAnon Memorabilia"),
            Self::SurpriseBox => ambiguous(
                "Surprise Boxes",
                "At this time, the marketplace does not permit the sale of surprise \
                 boxes, mystery gifts, or shipping random products without a choice. This \
                 product may not be relisted.",
            ),
            Self::CustomerFeedbackAboutFalseSpec => misleading(
                "Customer Feedback About False Spec",
                format!(
                    "Listings and/or product variations advertising devices with false, \
                     exaggerated, unreasonable, or impossible capacities/specifications \
                     (e.g., the sale of storage devices with false or impossible \
                     capacities) are prohibited on the marketplace. {MISLEADING_SENTENCE}"
                ),
            ),
            Self::Butane => hazard(
                "Butane",
                "At this time, the marketplace prohibits the sale of butane. This product \
                 may not be relisted.",
            ),
            Self::PurchasedFollowers => virtual_goods(
                "Purchased Social Media Followers",
                "All goods sold on the marketplace must be tangible products. The sale of \
                 social media boosts or follower packages is not permitted. This product \
                 may not be relisted.",
            ),
            Self::MissingKeyRequirements => jewelry(
                "Missing Key Requirements",
                "Products and/or listings must comply with all applicable laws and \
                 regulations to the product being advertised. The title, description, \
                 price, size/color options, and images used to advertise a product should \
                 clearly and accurately reflect the product being sold. Products or \
                 listings that do not meet authentication requirements, and/or products or \
                 listings with false or fake documentation are not permitted on the \
                 marketplace. If such content is removed, the listing may be reactivated.",
            ),
            Self::GunSilencers => weapon(
                "Gun Silencers",
                "At this time, the marketplace prohibits the sale of all silencers, \
                 suppressors, or other sound moderators (whether intended for firearms or \
                 other items).",
            ),
            Self::Contacts => medical(
                "Contacts",
                "At this time, the marketplace prohibits the sale of contact lenses. This \
                 product may not be relisted.",
            ),
            Self::TitleImageMismatch => misleading(
                "Title and Main Image Discrepancy",
                format!(
                    "The title and/or main image of this listing does not accurately \
                     represent the product being sold. There is conflicting information \
                     between the title and main image. {MISLEADING_SENTENCE}"
                ),
            ),
            Self::CockroachChalk => hazard(
                "Cockroach Chalk",
                "At this time, the marketplace prohibits the sale of products intended to \
                 kill or repel cockroaches (including cockroach chalk, powder and gel). \
                 This product may not be relisted.",
            ),
            Self::HookahPen => drug(
                "Hookah Pens",
                "At this time, the marketplace prohibits the sale of hookah pens and/or \
                 their variants. This product may not be relisted.",
            ),
            Self::VapeLiquid => drug(
                "E-Juice / E-Liquid / Vape Liquid",
                "At this time, the marketplace prohibits the sale of e-juice, e-liquid, \
                 vape liquid, and/or their variants. This product may not be relisted.",
            ),
            Self::DangerousCpaViolation => dangerous("CPA Takedown"),
            Self::Ammunition => weapon(
                "Ammunition",
                "At this time, the marketplace prohibits the sale of ammunition. This \
                 product may not be relisted.",
            ),
            Self::MisleadingKeyFeature => misleading(
                "Missing Key Feature",
                format!(
                    "We received written feedback indicating the product received was \
                     missing a key feature that the item was originally advertised with. \
                     {MISLEADING_SENTENCE}"
                ),
            ),
            Self::UncensoredEroticAnime => nudity(
                "Uncensored Erotic Anime",
                "Pornographic material such as uncensored depictions of erotic anime \
                 products is not permitted. Compliant listings of sexualized anime \
                 products must use images that clearly display the product for sale \
                 without the use of gratuitous nudity or obscenity. The listing may be \
                 reactivated if such images are removed or appropriately censored.",
            ),
            Self::VhsTape => media("VHS Tapes", "VHS tapes"),
            Self::VideoGame => media("Video Games", "video games"),
            Self::EpaEmissionsDefeatUs => CopyOverlay::new()
                .title("EPA emission defeat devices available in the United States"),
            Self::ProhibitedCustomsCn
            | Self::ImageOrTitleChange
            | Self::GradualChange
            | Self::HiddenSexToys
            | Self::BrandingChange => CopyOverlay::new(),
            Self::BlurredLogos => CopyOverlay::new().title("Blurred or Censored Logos").body(
                "At this time, the marketplace does not permit the practice of blurring or \
                 censoring logos to sell unauthorized products.\n\nTo reactivate this \
                 listing, ensure all images used are transparent and provide a brand \
                 authorization for any branded goods being sold.",
            ),
            Self::AnimeProducts => {
                CopyOverlay::new().title("Anime Products without sufficient censorship")
            }
            Self::NotFocusMainImage => CopyOverlay::new()
                .title("Product is not the focus of the main image")
                .body(
                    "The product being sold is not the focus of the first image. The \
                     listing may be reactivated if the first image is changed to display \
                     the image being sold.",
                ),
            Self::CnProhibitedProductStunGuns => cn_prohibited("Stun Guns"),
            Self::FullyExposedNipple => pornographic(
                "Fully Exposed Real Female Nipples",
                "images of real female nipples",
            ),
            Self::Records => media("Records", "records"),
            Self::EroticSetups => CopyOverlay::new().title("Erotic Setups"),
            Self::EpaPesticidesUs => CopyOverlay::new()
                .title("EPA pesticide products available in the United States"),
            Self::BlueRay => media("Blu-rays", "Blu-rays"),
            Self::ImageOfMasturbation => pornographic(
                "Image of Masturbation",
                "depictions and images of masturbation",
            ),
            Self::Dvd => media("DVDs", "DVDs"),
            Self::BlurredWatermarks => CopyOverlay::new().title("Blurred Watermarks").body(
                "At this time, the marketplace does not permit the practice of using \
                 images with blurred watermarks. Merchants are encouraged to use their own \
                 images in listings or only utilize images which they have been given \
                 authorization to use.\n\nTo reactivate this listing, ensure all images \
                 used are transparent and provide a brand authorization for any \
                 copyrighted images that are used.",
            ),
            Self::Pesticides => CopyOverlay::new().title("Pesticides").body(
                "The marketplace only allows the sale of pesticides if they comply with \
                 laws and regulations.",
            ),
            Self::BlurredTags => CopyOverlay::new().title("Blurred or Censored Tags").body(
                "At this time, the marketplace does not permit the practice of blurring or \
                 censoring tags and labels to sell unauthorized products.\n\nTo reactivate \
                 this listing, ensure all images used are transparent and provide a brand \
                 authorization for any branded goods being sold.",
            ),
            Self::Cd => media("CDs", "CDs"),
            Self::FullyExposedAnus => {
                pornographic("Fully Exposed Real Anus", "images of real anuses")
            }
            Self::ImageOfPenetration => {
                pornographic("Image of Penetration", "images of sexual penetration")
            }
            Self::CassetteTape => media("Cassette Tapes", "cassette tapes"),
            Self::CnProhibitedProductTasers => cn_prohibited("Tasers"),
            Self::FullyExposedGenital => pornographic(
                "Fully Exposed, Real Male / Female Genitals",
                "images of real male or female genitalia",
            ),
            Self::CnProhibitedProductBbGuns => cn_prohibited("BB Guns"),
            Self::CnProhibitedProductAirsoft => cn_prohibited("Airsoft"),
            Self::Software => media("Software", "software"),
            Self::LaserDisc => media("Laser Discs", "laser discs"),
            Self::MisleadingWig => CopyOverlay::new().title("Misleading Wig").body(
                "The reviews from our customers show that less than half receive the \
                 product as advertised",
            ),
            Self::CnProhibitedProductImitationFirearms => cn_prohibited("Imitation Firearms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hate_family_shares_copy_except_title() {
        let speech = TaggingSubreason::HateSpeech.overlay();
        let imagery = TaggingSubreason::HatefulImagery.overlay();
        assert_ne!(speech.title, imagery.title);
        assert_eq!(speech.body, imagery.body);
        assert_eq!(speech.policy, imagery.policy);
        assert_eq!(speech.faq, imagery.faq);
    }

    #[test]
    fn structural_only_codes_have_empty_overlays() {
        for sub in [
            TaggingSubreason::ProhibitedCustomsCn,
            TaggingSubreason::ImageOrTitleChange,
            TaggingSubreason::GradualChange,
            TaggingSubreason::HiddenSexToys,
            TaggingSubreason::BrandingChange,
        ] {
            assert!(sub.overlay().is_empty(), "{sub}");
        }
    }

    #[test]
    fn unlicensed_media_family_has_no_links() {
        for sub in [
            TaggingSubreason::VhsTape,
            TaggingSubreason::Dvd,
            TaggingSubreason::Software,
            TaggingSubreason::CassetteTape,
        ] {
            let overlay = sub.overlay();
            assert!(overlay.title.is_some(), "{sub}");
            assert!(
                overlay.body.as_deref().is_some_and(|b| b.contains("rights owner")),
                "{sub}"
            );
            assert!(overlay.policy.is_none(), "{sub}");
            assert!(overlay.faq.is_none(), "{sub}");
        }
    }

    #[test]
    fn misleading_family_links_match_parent_policy_section() {
        let overlay = TaggingSubreason::BrandDiscrepancy.overlay();
        assert!(
            overlay
                .policy
                .as_deref()
                .is_some_and(|p| p.contains("/inappropriate-reasons/33")),
        );
        assert!(
            overlay
                .body
                .as_deref()
                .is_some_and(|b| b.contains("[Learn more](")),
        );
    }

    #[test]
    fn overlay_bodies_never_embed_the_merge_separator() {
        for sub in TaggingSubreason::ALL {
            if let Some(body) = sub.overlay().body {
                assert!(
                    !body.contains("&nbsp;"),
                    "{sub} body would corrupt body accumulation"
                );
            }
        }
    }
}
