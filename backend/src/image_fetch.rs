//! Downloads the placeholder photography used by the site and stores it as
//! size-capped JPEGs next to the frontend assets.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, ColorType};
use thiserror::Error;

pub const DEFAULT_SIZE: u32 = 800;
pub const DEFAULT_QUALITY: u8 = 80;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to download image: {0}")]
    Status(reqwest::StatusCode),
    #[error("no data received from the server")]
    Empty,
    #[error("could not process image: {0}")]
    Image(#[from] image::ImageError),
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderImage {
    pub category: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

impl PlaceholderImage {
    pub fn file_name(&self) -> String {
        format!("{}-{}.jpg", self.category, self.name)
    }
}

const fn placeholder(category: &'static str, name: &'static str, url: &'static str) -> PlaceholderImage {
    PlaceholderImage { category, name, url }
}

pub const PLACEHOLDER_IMAGES: &[PlaceholderImage] = &[
    placeholder("hero", "pellets", "https://picsum.photos/800/800?random=1"),
    placeholder("hero", "farming", "https://picsum.photos/800/800?random=2"),
    placeholder("benefits", "farmers", "https://picsum.photos/800/800?random=3"),
    placeholder("benefits", "companies", "https://picsum.photos/800/800?random=4"),
    placeholder("benefits", "environment", "https://picsum.photos/800/800?random=5"),
    placeholder("howItWorks", "step1", "https://picsum.photos/800/800?random=6"),
    placeholder("howItWorks", "step2", "https://picsum.photos/800/800?random=7"),
    placeholder("howItWorks", "step3", "https://picsum.photos/800/800?random=8"),
    placeholder("about", "team", "https://picsum.photos/800/800?random=9"),
    placeholder("about", "mission", "https://picsum.photos/800/800?random=10"),
    placeholder("cta", "background", "https://picsum.photos/800/800?random=11"),
    placeholder("contact", "map", "https://picsum.photos/800/800?random=12"),
];

#[derive(Debug, Clone, Copy)]
pub struct OptimizeOptions {
    /// Bounding box edge; images are scaled to fit inside it.
    pub size: u32,
    pub quality: u8,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Decodes any supported format, fits it inside `size`x`size` keeping the
/// aspect ratio and re-encodes it as JPEG.
pub fn optimize(bytes: &[u8], options: OptimizeOptions) -> Result<Vec<u8>, FetchError> {
    let decoded = image::load_from_memory(bytes)?;
    let resized = decoded.resize(options.size, options.size, FilterType::Lanczos3);
    let rgb = resized.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut out, options.quality);
        encoder.encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)?;
    }
    Ok(out.into_inner())
}

pub fn http_client() -> Result<reqwest::Client, FetchError> {
    // reqwest follows redirects on its own
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

pub async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(bytes.to_vec())
}

pub async fn fetch_one(
    client: &reqwest::Client,
    image: &PlaceholderImage,
    out_dir: &Path,
    options: OptimizeOptions,
) -> Result<PathBuf, FetchError> {
    let bytes = download(client, image.url).await?;
    let jpeg = tokio::task::spawn_blocking(move || optimize(&bytes, options))
        .await
        .map_err(|e| FetchError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))??;
    let path = out_dir.join(image.file_name());
    tokio::fs::write(&path, jpeg).await?;
    Ok(path)
}

#[derive(Debug, Default, PartialEq)]
pub struct FetchReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<String>,
}

/// Fetches every image in turn. A failure is logged and does not stop the
/// remaining downloads.
pub async fn fetch_all(
    client: &reqwest::Client,
    images: &[PlaceholderImage],
    out_dir: &Path,
    options: OptimizeOptions,
) -> Result<FetchReport, FetchError> {
    tokio::fs::create_dir_all(out_dir).await?;

    let mut report = FetchReport::default();
    for image in images {
        match fetch_one(client, image, out_dir, options).await {
            Ok(path) => {
                tracing::info!("Downloaded and optimized: {}", path.display());
                report.saved.push(path);
            }
            Err(e) => {
                tracing::error!("Error downloading {}-{}: {}", image.category, image.name, e);
                report.failed.push(image.file_name());
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView, ImageOutputFormat, RgbImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([139, 195, 74])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn file_names_follow_category_and_name() {
        assert_eq!(PLACEHOLDER_IMAGES.len(), 12);
        assert_eq!(PLACEHOLDER_IMAGES[0].file_name(), "hero-pellets.jpg");
        assert_eq!(PLACEHOLDER_IMAGES[11].file_name(), "contact-map.jpg");
    }

    #[test]
    fn large_images_are_scaled_to_fit() {
        let jpeg = optimize(&png(1600, 1200), OptimizeOptions::default()).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (800, 600));
        assert_eq!(image::guess_format(&jpeg).unwrap(), image::ImageFormat::Jpeg);
    }

    #[test]
    fn garbage_is_an_image_error() {
        let err = optimize(b"definitely not an image", OptimizeOptions::default()).unwrap_err();
        assert!(matches!(err, FetchError::Image(_)));
    }

    #[tokio::test]
    async fn unreachable_images_are_reported_not_fatal() {
        let out = tempfile::tempdir().unwrap();
        let client = http_client().unwrap();
        let images = [placeholder("test", "nowhere", "http://127.0.0.1:9/missing.jpg")];

        let report = fetch_all(&client, &images, out.path(), OptimizeOptions::default())
            .await
            .unwrap();
        assert!(report.saved.is_empty());
        assert_eq!(report.failed, vec!["test-nowhere.jpg".to_string()]);
    }
}
