//! Thumbnail download and preparation.
//!
//! Every thumbnail is decoded, resized to a fixed size and framed with a gray
//! border, so successful downloads and the fallback image line up on screen.

use crate::client::build_http_client;
use crate::config::AppConfig;
use crate::error::FinderError;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

pub const BORDER_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);
const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([220, 220, 220, 255]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSource {
    /// Downloaded from the recipe's image URL
    Remote(String),
    /// The fallback image stood in for a failed download
    Fallback,
}

/// A decoded, resized and bordered RGBA image ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    image: Arc<RgbaImage>,
    pub source: ThumbnailSource,
}

impl Thumbnail {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Packed RGBA pixels, row by row
    pub fn rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ThumbnailSource::Fallback
    }
}

/// Decode → resize → border.
pub fn prepare_thumbnail(
    bytes: &[u8],
    width: u32,
    height: u32,
    border: u32,
) -> Result<RgbaImage, FinderError> {
    let img = image::load_from_memory(bytes)?;
    let resized = img.resize_exact(width, height, FilterType::Triangle).to_rgba8();
    Ok(add_border(&resized, border))
}

/// Surround `img` with a `border` pixel wide gray frame
pub fn add_border(img: &RgbaImage, border: u32) -> RgbaImage {
    let mut framed = RgbaImage::from_pixel(
        img.width() + 2 * border,
        img.height() + 2 * border,
        BORDER_COLOR,
    );
    imageops::replace(&mut framed, img, border as i64, border as i64);
    framed
}

/// Downloads recipe images, substituting a shared fallback on failure
pub struct ImageFetcher {
    client: Client,
    width: u32,
    height: u32,
    border: u32,
    fallback: Thumbnail,
}

impl ImageFetcher {
    /// Create a fetcher whose fallback is a plain placeholder
    pub fn new(client: Client, size: (u32, u32), border: u32) -> Self {
        let (width, height) = size;
        let placeholder = RgbaImage::from_pixel(width, height, PLACEHOLDER_COLOR);
        Self::with_fallback_image(client, size, border, placeholder)
    }

    /// Create a fetcher with a known fallback image, which is resized and
    /// bordered like any downloaded thumbnail
    pub fn with_fallback_image(
        client: Client,
        size: (u32, u32),
        border: u32,
        fallback: RgbaImage,
    ) -> Self {
        let (width, height) = size;
        let resized = imageops::resize(&fallback, width, height, FilterType::Triangle);
        ImageFetcher {
            client,
            width,
            height,
            border,
            fallback: Thumbnail {
                image: Arc::new(add_border(&resized, border)),
                source: ThumbnailSource::Fallback,
            },
        }
    }

    /// Create a fetcher and download the fallback image up front.
    ///
    /// If the fallback itself cannot be fetched a placeholder takes its place.
    pub async fn load(client: Client, fallback_url: &str, size: (u32, u32), border: u32) -> Self {
        let mut fetcher = Self::new(client, size, border);
        match fetcher.fetch(fallback_url).await {
            Ok(thumbnail) => {
                fetcher.fallback = Thumbnail {
                    source: ThumbnailSource::Fallback,
                    ..thumbnail
                };
            }
            Err(e) => warn!(
                "Failed to load fallback image {}: {}, using placeholder",
                fallback_url, e
            ),
        }
        fetcher
    }

    /// Create a fetcher from configuration; `default_size` comes from the
    /// selected API and is overridden by `images.width` / `images.height`
    pub async fn from_config(
        config: &AppConfig,
        default_size: (u32, u32),
    ) -> Result<Self, FinderError> {
        let client = build_http_client(config.timeout.map(Duration::from_secs))?;
        let size = (
            config.images.width.unwrap_or(default_size.0),
            config.images.height.unwrap_or(default_size.1),
        );
        Ok(Self::load(client, &config.images.fallback_url, size, config.images.border).await)
    }

    pub fn fallback(&self) -> Thumbnail {
        self.fallback.clone()
    }

    /// Download and prepare one thumbnail
    pub async fn fetch(&self, url: &str) -> Result<Thumbnail, FinderError> {
        if url.is_empty() {
            return Err(FinderError::MissingImageUrl);
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FinderError::StatusError(status));
        }
        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);

        let image = prepare_thumbnail(&bytes, self.width, self.height, self.border)?;
        Ok(Thumbnail {
            image: Arc::new(image),
            source: ThumbnailSource::Remote(url.to_string()),
        })
    }

    /// Download one thumbnail, falling back to the default image on any error
    pub async fn fetch_or_fallback(&self, url: &str) -> Thumbnail {
        match self.fetch(url).await {
            Ok(thumbnail) => thumbnail,
            Err(e) => {
                warn!("Failed to load image {:?}: {}", url, e);
                self.fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use mockito::Server;
    use std::io::Cursor;

    fn make_test_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgba8(width, height);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("encode test PNG");
        buf
    }

    #[test]
    fn test_add_border() {
        let img = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let framed = add_border(&img, 3);
        assert_eq!(framed.dimensions(), (10, 8));
        assert_eq!(*framed.get_pixel(0, 0), BORDER_COLOR);
        assert_eq!(*framed.get_pixel(3, 3), Rgba([255, 0, 0, 255]));
        assert_eq!(*framed.get_pixel(7, 4), BORDER_COLOR);
    }

    #[test]
    fn test_prepare_thumbnail_resizes_then_borders() {
        let png = make_test_png(640, 480);
        let thumb = prepare_thumbnail(&png, 150, 150, 10).unwrap();
        assert_eq!(thumb.dimensions(), (170, 170));
    }

    #[test]
    fn test_prepare_thumbnail_rejects_garbage() {
        let result = prepare_thumbnail(b"not an image", 150, 150, 10);
        assert!(matches!(result, Err(FinderError::ImageError(_))));
    }

    #[test]
    fn test_fallback_is_bordered_like_remote_images() {
        let fetcher = ImageFetcher::with_fallback_image(
            Client::new(),
            (150, 150),
            10,
            RgbaImage::new(800, 600),
        );
        let fallback = fetcher.fallback();
        assert!(fallback.is_fallback());
        assert_eq!((fallback.width(), fallback.height()), (170, 170));
        assert_eq!(fallback.rgba().len(), 170 * 170 * 4);
    }

    #[tokio::test]
    async fn test_fetch_or_fallback() {
        let mut server = Server::new_async().await;
        let _ok = server
            .mock("GET", "/ok.png")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(make_test_png(20, 10))
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/missing.png")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = ImageFetcher::new(Client::new(), (150, 150), 10);

        let url = format!("{}/ok.png", server.url());
        let thumb = fetcher.fetch_or_fallback(&url).await;
        assert_eq!(thumb.source, ThumbnailSource::Remote(url));
        assert_eq!((thumb.width(), thumb.height()), (170, 170));

        let thumb = fetcher
            .fetch_or_fallback(&format!("{}/missing.png", server.url()))
            .await;
        assert!(thumb.is_fallback());
        assert_eq!((thumb.width(), thumb.height()), (170, 170));

        assert!(fetcher.fetch_or_fallback("").await.is_fallback());
    }

    #[tokio::test]
    async fn test_load_downloads_fallback() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/not-found.jpg")
            .with_status(200)
            .with_body(make_test_png(300, 200))
            .create_async()
            .await;

        let url = format!("{}/not-found.jpg", server.url());
        let fetcher = ImageFetcher::load(Client::new(), &url, (350, 300), 10).await;
        let fallback = fetcher.fallback();
        assert!(fallback.is_fallback());
        assert_eq!((fallback.width(), fallback.height()), (370, 320));
        mock.assert_async().await;
    }
}
