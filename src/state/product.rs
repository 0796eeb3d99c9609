#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

/// One product photo available in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductImage {
    /// Image URL, served from the asset pipeline.
    pub src: String,
    /// Alt text for the thumbnail and stage.
    pub alt: String,
}

impl ProductImage {
    #[must_use]
    pub fn new(src: &str, alt: &str) -> Self {
        Self { src: src.to_owned(), alt: alt.to_owned() }
    }
}

/// Fixed demo product used by the product page.
///
/// Catalog data comes from the commerce backend in the real storefront;
/// this crate only needs something for the viewer to chew on.
#[must_use]
pub fn demo_product() -> Vec<ProductImage> {
    vec![
        ProductImage::new("/img/meridian-chrono-front.jpg", "Meridian chronograph, dial"),
        ProductImage::new("/img/meridian-chrono-side.jpg", "Meridian chronograph, crown side"),
        ProductImage::new("/img/meridian-chrono-back.jpg", "Meridian chronograph, case back"),
        ProductImage::new("/img/meridian-chrono-strap.jpg", "Meridian chronograph, strap detail"),
    ]
}
