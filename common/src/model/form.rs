/// Multipart field carrying the selected category.
pub const CATEGORY_FIELD: &str = "photo-category";
/// Multipart field carrying the photo file.
pub const PHOTO_FIELD: &str = "photo";

/// The two user inputs of the upload form.
///
/// `F` is the file handle of the host environment (`web_sys::File` in the
/// browser, anything cloneable in tests).
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    pub category: String,
    pub photo: F,
}

impl<F> UploadForm<F> {
    pub fn new(category: impl Into<String>, photo: F) -> Self {
        Self {
            category: category.into(),
            photo,
        }
    }
}

/// Categories offered by the upload form selector.
pub const PHOTO_CATEGORIES: &[(&str, &str)] = &[
    ("shopping-list", "Shopping list"),
    ("product", "Product"),
    ("barcode", "Barcode"),
];
