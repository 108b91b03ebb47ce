use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One shopping search result item as returned by the upload endpoint.
///
/// Every field is an opaque display string. Only `image_link` and `link` are
/// interpreted, as an image `src` and an anchor `href` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub title: String,
    pub image_link: String,
    pub price_and_seller: String,
    pub link: String,
    /// Missing on some results; rendered as an empty caption.
    #[serde(default)]
    pub shipping_price: String,
}

/// A shopping query detected on the uploaded photo, paired with its products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingResult {
    pub query: String,
    #[serde(alias = "results", alias = "shoppingResults")]
    pub products: Vec<ProductRecord>,
}

/// Body of a successful upload reply.
///
/// The backend answers with one of two shapes depending on the deployment. The
/// variant is picked from the JSON itself: objects carrying a `query` field make
/// a grouped reply, bare product objects make a flat one. An empty array decodes
/// as `Flat(vec![])`, which renders nothing either way.
///
/// Once the variant is chosen the body is decoded as that variant only, so a
/// bad record reports the offending field instead of a generic mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShoppingResponse {
    Grouped(Vec<ShoppingResult>),
    Flat(Vec<ProductRecord>),
}

impl ShoppingResponse {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if is_grouped(&value) {
            serde_json::from_value(value).map(ShoppingResponse::Grouped)
        } else {
            serde_json::from_value(value).map(ShoppingResponse::Flat)
        }
    }

    /// Total number of product cards this reply renders into.
    pub fn product_count(&self) -> usize {
        match self {
            ShoppingResponse::Grouped(groups) => groups.iter().map(|g| g.products.len()).sum(),
            ShoppingResponse::Flat(products) => products.len(),
        }
    }
}

fn is_grouped(value: &Value) -> bool {
    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .is_some_and(|first| first.contains_key("query"))
}

impl<'de> Deserialize<'de> for ShoppingResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ShoppingResponse::from_value(value).map_err(D::Error::custom)
    }
}
