//! Markdown link construction over the marketplace's policy and help hosts.
//!
//! All policy/FAQ copy links are built from these two bases; the lint module
//! rejects any table entry whose links point elsewhere.

/// Merchant-facing policy pages.
pub const POLICY_BASE: &str = "https://merchant.example.com/policy";
/// Help-center articles and sections.
pub const HELP_BASE: &str = "https://help.example.com/hc/en-us";
/// Merchant terms of service.
pub const TERMS_URL: &str = "https://merchant.example.com/terms-of-service";
/// Intellectual-property reporting portal.
pub const IP_PORTAL_URL: &str = "https://merchant.example.com/intellectual-property";

/// `[text](url)` markdown.
#[must_use]
pub fn md_link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Policy page for a numbered prohibited-content section.
#[must_use]
pub fn policy_section_url(section: u32) -> String {
    format!("{POLICY_BASE}/inappropriate-reasons/{section}")
}

/// Anchored section of the main merchant policy page.
#[must_use]
pub fn policy_anchor_url(anchor: &str) -> String {
    format!("{POLICY_BASE}#{anchor}")
}

/// Help-center article by id.
#[must_use]
pub fn help_article_url(article: &str) -> String {
    format!("{HELP_BASE}/articles/{article}")
}

/// Help-center section by id.
#[must_use]
pub fn help_section_url(section: &str) -> String {
    format!("{HELP_BASE}/sections/{section}")
}

/// Markdown link to a numbered prohibited-content policy section.
#[must_use]
pub fn policy_link(text: &str, section: u32) -> String {
    md_link(text, &policy_section_url(section))
}

/// Markdown link to an anchored section of the main policy page.
#[must_use]
pub fn policy_anchor_link(text: &str, anchor: &str) -> String {
    md_link(text, &policy_anchor_url(anchor))
}

/// Markdown link to a help-center article.
#[must_use]
pub fn help_link(text: &str, article: &str) -> String {
    md_link(text, &help_article_url(article))
}

/// Markdown link to a help-center section.
#[must_use]
pub fn help_section_link(text: &str, section: &str) -> String {
    md_link(text, &help_section_url(section))
}

// Links shared across many table entries.

pub(crate) fn prohibited_listings_faq() -> String {
    help_link("Prohibited Product Listings FAQ", "205211777")
}

pub(crate) fn misleading_listing_policy() -> String {
    policy_link("Misleading Listing Policy", 33)
}

pub(crate) fn misleading_listing_faq() -> String {
    help_link("Misleading Listing FAQ", "mu360003237193")
}

pub(crate) fn hateful_symbols_policy() -> String {
    policy_link("Hateful Symbols & Messages Policy", 23)
}

pub(crate) fn drugs_policy() -> String {
    policy_link("Drugs and Drug Paraphernalia Policy", 14)
}

pub(crate) fn weapons_policy() -> String {
    policy_link("Weapons Policy", 7)
}

pub(crate) fn sexual_content_policy() -> String {
    policy_link("Graphic Sexual Content Policy", 22)
}

pub(crate) fn sexual_content_faq() -> String {
    format!(
        "{}, {}",
        help_link("Graphic Sexual Content Guidelines", "mu360037656554"),
        prohibited_listings_faq()
    )
}

pub(crate) fn false_advertising_policy() -> String {
    policy_link("False Advertising Policy", 25)
}

pub(crate) fn false_advertising_faq() -> String {
    format!(
        "{}, {}",
        help_link("False Advertising FAQ", "mu360005950894"),
        prohibited_listings_faq()
    )
}

pub(crate) fn medical_materials_policy() -> String {
    policy_link("Medically Regulated Materials Policy", 34)
}

pub(crate) fn hazardous_materials_policy() -> String {
    policy_link("Hazardous Materials Policy", 35)
}

pub(crate) fn consumption_policy() -> String {
    policy_link("Materials for Consumption Policy", 36)
}

pub(crate) fn recalled_items_policy() -> String {
    policy_link("Recalled Items Policy", 18)
}

pub(crate) fn recalled_items_faq() -> String {
    format!(
        "{}, {}",
        prohibited_listings_faq(),
        help_link("What are recalled or prohibited items?", "4421452343959")
    )
}

pub(crate) fn virtual_goods_policy() -> String {
    policy_link("Virtual Goods Policy", 21)
}

pub(crate) fn currency_policy() -> String {
    policy_link("Unverified and Counterfeit Currency Policy", 39)
}

pub(crate) fn privacy_tech_policy() -> String {
    policy_link("Privacy and Technology Violations Policy", 27)
}

pub(crate) fn animal_products_policy() -> String {
    policy_link("Animal Products Policy", 41)
}

pub(crate) fn plants_policy() -> String {
    policy_link("Plants and Plant Seeds Policy", 44)
}

pub(crate) fn ambiguous_listing_policy() -> String {
    policy_link("Ambiguous Listing Policy", 28)
}

pub(crate) fn jewelry_policy() -> String {
    policy_link("Jewelry Policy", 49)
}

pub(crate) fn safety_equipment_policy() -> String {
    policy_link("Safety Equipment Policy", 38)
}

pub(crate) fn dangerous_items_policy() -> String {
    policy_link("Dangerous and Unsafe Items Policy", 46)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_section_url_shape() {
        assert_eq!(
            policy_section_url(33),
            "https://merchant.example.com/policy/inappropriate-reasons/33"
        );
    }

    #[test]
    fn anchored_policy_link_shape() {
        assert_eq!(
            policy_anchor_link("Fulfillment Policy", "fulfillment"),
            "[Fulfillment Policy](https://merchant.example.com/policy#fulfillment)"
        );
    }

    #[test]
    fn help_link_shape() {
        assert_eq!(
            help_link("Prohibited Product Listings FAQ", "205211777"),
            "[Prohibited Product Listings FAQ](https://help.example.com/hc/en-us/articles/205211777)"
        );
    }

    #[test]
    fn help_section_link_shape() {
        assert_eq!(
            help_section_url("4411071551259"),
            "https://help.example.com/hc/en-us/sections/4411071551259"
        );
    }
}
