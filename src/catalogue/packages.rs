//! Curated multi-destination packages shown on the packages page.

/// A static, pre-assembled trip package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPackage {
    /// Package identifier.
    pub id: u64,
    /// Package name.
    pub title: String,
    /// Marketing blurb.
    pub description: String,
    /// Price in whole currency units.
    pub price: u32,
    /// Short tag shown above the title (e.g. "Popular").
    pub badge: String,
    /// Image URL; opaque to the catalogue.
    pub image: String,
    /// Bullet-point inclusions.
    pub features: Vec<String>,
}
