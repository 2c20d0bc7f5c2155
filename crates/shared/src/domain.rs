use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(BrandId);
id_newtype!(ProductId);

/// A vendor document as served by the storefront API. Fields the client does
/// not model explicitly are kept in `extra` so nothing the server sends is
/// dropped on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub id: BrandId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a brand-scoped product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_record_keeps_unmodeled_vendor_fields() {
        let brand: BrandRecord = serde_json::from_value(serde_json::json!({
            "id": 5,
            "name": "Acme",
            "country": "DE",
            "founded": 1987
        }))
        .expect("decode brand");

        assert_eq!(brand.id, BrandId(5));
        assert_eq!(brand.name, "Acme");
        assert_eq!(brand.extra.get("country"), Some(&Value::from("DE")));
        assert_eq!(brand.extra.get("founded"), Some(&Value::from(1987)));
    }

    #[test]
    fn product_record_tolerates_missing_brand_field() {
        let product: ProductRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Widget",
            "price": 9.99
        }))
        .expect("decode product");

        assert_eq!(product.brand, None);
    }
}
