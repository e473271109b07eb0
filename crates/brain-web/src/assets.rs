//! Fetches every manifest entry concurrently. Each request settles exactly
//! once, loaded or failed; failures are logged and never retried.

use brain_core::assets::{Asset, AssetKind, AssetManifest};
use brain_core::font::TypefaceFont;
use brain_core::loading::{LoadOutcome, LoadProgress};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// RGBA8 pixels ready for upload.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Default)]
pub struct LoadedAssets {
    pub model: Option<String>,
    pub xray_texture: Option<DecodedImage>,
    pub spark_texture: Option<DecodedImage>,
    pub sky_faces: [Option<DecodedImage>; 6],
    pub font: Option<TypefaceFont>,
}

enum Payload {
    Text(String),
    Image(DecodedImage),
    Font(TypefaceFont),
}

async fn fetch_response(url: &str) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    Ok(resp)
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = fetch_response(url).await?;
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = fetch_response(url).await?;
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub fn decode_png(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

async fn fetch_asset(asset: Asset) -> anyhow::Result<Payload> {
    match asset.kind {
        AssetKind::Model => Ok(Payload::Text(fetch_text(asset.url).await?)),
        AssetKind::Font => {
            let json = fetch_text(asset.url).await?;
            Ok(Payload::Font(TypefaceFont::parse(&json)?))
        }
        AssetKind::XRayTexture | AssetKind::SparkTexture | AssetKind::SkyFace(_) => {
            let bytes = fetch_bytes(asset.url).await?;
            Ok(Payload::Image(decode_png(&bytes)?))
        }
    }
}

fn store(assets: &mut LoadedAssets, kind: AssetKind, payload: Payload) {
    match (kind, payload) {
        (AssetKind::Model, Payload::Text(t)) => assets.model = Some(t),
        (AssetKind::Font, Payload::Font(f)) => assets.font = Some(f),
        (AssetKind::XRayTexture, Payload::Image(i)) => assets.xray_texture = Some(i),
        (AssetKind::SparkTexture, Payload::Image(i)) => assets.spark_texture = Some(i),
        (AssetKind::SkyFace(n), Payload::Image(i)) => {
            if let Some(slot) = assets.sky_faces.get_mut(n as usize) {
                *slot = Some(i);
            }
        }
        (kind, _) => log::warn!("[loader] unexpected payload for {:?}", kind),
    }
}

/// Start every request; `progress` and `assets` fill in as they settle.
pub fn load_all(
    manifest: &AssetManifest,
    progress: Rc<RefCell<LoadProgress>>,
    assets: Rc<RefCell<LoadedAssets>>,
) {
    let entries = manifest.entries();
    *progress.borrow_mut() = LoadProgress::new(entries.len() as u32);
    for asset in entries {
        let progress = progress.clone();
        let assets = assets.clone();
        spawn_local(async move {
            let outcome = match fetch_asset(asset).await {
                Ok(payload) => {
                    store(&mut assets.borrow_mut(), asset.kind, payload);
                    LoadOutcome::Loaded
                }
                Err(e) => {
                    log::error!("[loader] failed {}: {:?}", asset.url, e);
                    LoadOutcome::Failed
                }
            };
            let mut p = progress.borrow_mut();
            p.record(outcome);
            log::info!(
                "[loader] {} {} ({} of {})",
                if outcome == LoadOutcome::Loaded { "loaded" } else { "failed" },
                asset.url,
                p.settled(),
                p.total()
            );
            if p.is_complete() {
                log::info!("[loader] all assets settled, {} failed", p.failed());
            }
        });
    }
}
