//! Font stylesheet loading.
//!
//! A font that is not shipped with the platform needs its remote stylesheet
//! linked before it can render.  [`StylesheetFontLoader`] records that link in
//! a shared [`Stylesheet`], which later renders it as an `@import` rule.
//! Linking a URL twice is a no-op that resolves immediately.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

pub use crate::application::ports::{FontLoadError, FontLoader};
use crate::infrastructure::style::Stylesheet;

/// [`FontLoader`] that links stylesheets into a [`Stylesheet`].
pub struct StylesheetFontLoader {
    sheet: Arc<Stylesheet>,
}

impl StylesheetFontLoader {
    pub fn new(sheet: Arc<Stylesheet>) -> Self {
        Self { sheet }
    }
}

#[async_trait]
impl FontLoader for StylesheetFontLoader {
    async fn load_stylesheet(&self, url: &str) -> Result<(), FontLoadError> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(FontLoadError::Fetch {
                url: url.to_string(),
                reason: "unsupported URL scheme".to_string(),
            });
        }

        if self.sheet.link(url) {
            info!("linked font stylesheet {url}");
        } else {
            debug!("font stylesheet already linked: {url}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_core::{FontId, RegistryEntry};

    #[test]
    fn test_load_links_stylesheet_once() {
        // Arrange
        let sheet = Arc::new(Stylesheet::new());
        let loader = StylesheetFontLoader::new(sheet.clone());
        let url = FontId::Roboto
            .descriptor()
            .stylesheet_url
            .expect("roboto is remote");

        // Act
        let first = tokio_test::block_on(loader.load_stylesheet(url));
        let second = tokio_test::block_on(loader.load_stylesheet(url));

        // Assert
        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(sheet.links(), vec![url.to_string()]);
    }

    #[test]
    fn test_load_rejects_non_http_url() {
        let sheet = Arc::new(Stylesheet::new());
        let loader = StylesheetFontLoader::new(sheet.clone());

        let result = tokio_test::block_on(loader.load_stylesheet("file:///etc/passwd"));

        assert!(matches!(result, Err(FontLoadError::Fetch { .. })));
        assert!(sheet.links().is_empty());
    }

    #[tokio::test]
    async fn test_loader_works_behind_trait_object() {
        let sheet = Arc::new(Stylesheet::new());
        let loader: Arc<dyn FontLoader> = Arc::new(StylesheetFontLoader::new(sheet.clone()));

        loader
            .load_stylesheet("https://fonts.example/inter.css")
            .await
            .unwrap();

        assert!(sheet.is_linked("https://fonts.example/inter.css"));
    }
}
