use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReviewBody {
    pub rating: i32,
    pub comment: String,
}
