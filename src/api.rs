use reqwest::StatusCode;

use crate::book::{Book, RawBook};
use crate::config::Config;

/// The single failure class of the screen: the record could not be fetched.
/// Transport errors and malformed payloads both surface as `Request`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// URL of the record endpoint for one book id.
pub fn book_url(config: &Config, id: &str) -> String {
    format!(
        "{}/{}/{}",
        config.api_base_url.trim_end_matches('/'),
        config.variant.endpoint(),
        id
    )
}

/// Resolves a bare cover filename against the image base URL.
pub fn image_url(image_base_url: &str, fragment: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), fragment)
}

/// Fetches one record and resolves its cover fragment before handing it
/// back, so callers only ever see the fully-qualified URL.
pub async fn fetch_book(
    client: &reqwest::Client,
    url: &str,
    image_base_url: &str,
) -> Result<Book, FetchError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let raw: RawBook = response.json().await?;
    Ok(raw.resolve(image_base_url))
}

/// Downloads the cover bytes for display. The record stays on screen no
/// matter what happens here, so failures are logged and reported as `None`.
pub async fn fetch_cover(client: &reqwest::Client, url: &str) -> Option<Vec<u8>> {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(err) => {
                tracing::warn!(error = %err, url = %url, "could not read cover image body");
                None
            }
        },
        Ok(response) => {
            tracing::warn!(status = %response.status(), url = %url, "cover request rejected");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, url = %url, "could not fetch cover image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Variant;

    #[test]
    fn book_url_joins_base_endpoint_and_id() {
        let config = Config::default();
        assert_eq!(
            book_url(&config, "42"),
            "https://bibliotecaetecmaua.azurewebsites.net/api/LivrosSedeApi/42"
        );
    }

    #[test]
    fn book_url_tracks_the_variant_endpoint() {
        let config = Config {
            variant: Variant::Biblioteca,
            ..Config::default()
        };
        assert!(book_url(&config, "42").ends_with("/LivrosBibliotecaApi/42"));
    }

    #[test]
    fn book_url_tolerates_trailing_slash_in_base() {
        let config = Config {
            api_base_url: "https://biblioteca.example/api/".into(),
            ..Config::default()
        };
        assert_eq!(
            book_url(&config, "7"),
            "https://biblioteca.example/api/LivrosSedeApi/7"
        );
    }

    #[test]
    fn image_url_is_base_plus_fragment() {
        assert_eq!(
            image_url("https://biblioteca.example/Content/Images", "dune.jpg"),
            "https://biblioteca.example/Content/Images/dune.jpg"
        );
        assert_eq!(
            image_url("https://biblioteca.example/Content/Images/", "dune.jpg"),
            "https://biblioteca.example/Content/Images/dune.jpg"
        );
    }
}
