use serde::Deserialize;

/// Query string of the index page. A repeated `q` keeps its first value.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct SearchParams {
    pub q: Option<String>,
}

impl From<Vec<(String, String)>> for SearchParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        SearchParams {
            q: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "q").then_some(value)),
        }
    }
}
