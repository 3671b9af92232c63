//! Image URL construction for the catalog's static image host.
//!
//! The upstream serves images from a separate host; a full URL is the
//! configured base joined with a size token and the path carried on each
//! catalog entry. Two tokens are in use: a wide one for backdrop banners and
//! a portrait one for poster thumbnails.

/// Injected image-host settings (see `core::config`).
#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub base_url: String,
    pub backdrop_size: String,
    pub poster_size: String,
}

impl ImageConfig {
    pub fn new(base_url: String, backdrop_size: String, poster_size: String) -> Self {
        Self {
            base_url,
            backdrop_size,
            poster_size,
        }
    }

    /// Full URL for an entry's wide backdrop image.
    /// `path` is the upstream-supplied path, leading slash included.
    pub fn backdrop_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.backdrop_size, path)
    }

    /// Full URL for an entry's portrait poster thumbnail.
    pub fn poster_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.poster_size, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ImageConfig {
        ImageConfig::new(
            "https://images.example/t/p/".to_string(),
            "w533_and_h300_bestv2".to_string(),
            "w220_and_h330_face".to_string(),
        )
    }

    #[test]
    fn test_backdrop_url() {
        assert_eq!(
            test_config().backdrop_url("/2blmxp2pr4BhwQr74AdCfwgfMOb.jpg"),
            "https://images.example/t/p/w533_and_h300_bestv2/2blmxp2pr4BhwQr74AdCfwgfMOb.jpg"
        );
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            test_config().poster_url("/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg"),
            "https://images.example/t/p/w220_and_h330_face/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg"
        );
    }
}
