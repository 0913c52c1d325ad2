use serde::Deserialize;

/// Fields posted by the book registration and edit pages.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookFormDto {
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
}
