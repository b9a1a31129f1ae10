use crate::core::model::{buffer_slots, decode_mesh, progress_items, BufferSlot};
use crate::core::{ModelError, ModelMesh};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode a glTF/GLB model. `on_progress(loaded, total)` fires after
/// each fetched item: the model file first, then any external buffers.
pub async fn load_model(
    window: &web::Window,
    path: &str,
    mut on_progress: impl FnMut(usize, usize),
) -> anyhow::Result<ModelMesh> {
    let bytes = fetch_bytes(window, path).await?;
    let gltf = gltf::Gltf::from_slice(&bytes).map_err(ModelError::from)?;
    let slots = buffer_slots(&gltf.document, path);
    let total = progress_items(&slots);
    let mut loaded = 1;
    on_progress(loaded, total);

    let mut buffers = Vec::with_capacity(slots.len());
    for (i, slot) in slots.iter().enumerate() {
        let data = match slot {
            BufferSlot::Blob => gltf.blob.clone().ok_or(ModelError::MissingBuffer(i))?,
            BufferSlot::Fetch(url) => {
                let data = fetch_bytes(window, url).await?;
                loaded += 1;
                on_progress(loaded, total);
                data
            }
        };
        buffers.push(data);
    }

    Ok(decode_mesh(&gltf.document, &buffers)?)
}
