//! API endpoint URL builders

/// Build the venue categories URL
pub fn categories_url(api_url: &str) -> String {
    format!("{}/venues/categories", api_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_url() {
        let url = categories_url("https://api.foursquare.com/v2");
        assert_eq!(url, "https://api.foursquare.com/v2/venues/categories");
    }

    #[test]
    fn test_categories_url_trailing_slash() {
        let url = categories_url("http://localhost:8000/v2/");
        assert_eq!(url, "http://localhost:8000/v2/venues/categories");
    }
}
