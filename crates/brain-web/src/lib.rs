#![cfg(target_arch = "wasm32")]
use brain_core::assets::AssetManifest;
use brain_core::constants::BUBBLE_COUNT;
use brain_core::loading::LoadProgress;
use brain_core::mesh::{merge_meshes, parse_obj};
use brain_core::rising::sample_bubbles;
use brain_core::xray::XRayMesh;
use brain_core::{BrainScene, StartMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod assets;
mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod overlay;
mod panel;
mod render;

use constants::{CANVAS_ID, SCENE_SEED};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("brain-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mode = StartMode::from_query(&window.location().search().unwrap_or_default());
    if mode == StartMode::Skip {
        log::info!("[intro] skip requested by query");
        dom::strip_query();
    }

    let progress = Rc::new(RefCell::new(LoadProgress::new(0)));
    let loaded = Rc::new(RefCell::new(assets::LoadedAssets::default()));
    assets::load_all(&AssetManifest::default(), progress.clone(), loaded.clone());

    overlay::drive_progress(progress, move || {
        spawn_local(async move {
            if let Err(e) = build_scene(document, canvas, loaded, mode).await {
                log::error!("[particles] scene setup failed: {:?}", e);
            }
        });
    });
    Ok(())
}

/// Everything after the last asset settles: geometry, GPU, chrome, input,
/// then the intro itself.
async fn build_scene(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    loaded: Rc<RefCell<assets::LoadedAssets>>,
    mode: StartMode,
) -> anyhow::Result<()> {
    let assets = std::mem::take(&mut *loaded.borrow_mut());
    // the background stays black; the cube faces only count toward loading
    let sky = assets.sky_faces.iter().flatten().count();
    log::info!("[loader] {} of 6 skybox faces decoded", sky);
    let model = assets
        .model
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("brain model did not load"))?;
    let nodes = parse_obj(model)?;
    let (w, h) = dom::viewport_size();
    let scene = BrainScene::new(&nodes, SCENE_SEED, w, h)?;

    let merged = merge_meshes(&nodes);
    let xray_mesh = XRayMesh::from_triangles(&merged);
    let bubbles = sample_bubbles(&merged, BUBBLE_COUNT, SCENE_SEED.wrapping_add(1));
    let gpu = frame::init_gpu(
        &canvas,
        render::SceneGeometry {
            particles: scene.particles.vertices(),
            bubbles: &bubbles,
            xray: &xray_mesh,
            spark_texture: assets.spark_texture.as_ref(),
            xray_texture: assets.xray_texture.as_ref(),
        },
    )
    .await;

    let chrome = nav::Chrome::new(document.clone(), assets.font);
    let app = Rc::new(RefCell::new(app::App::new(scene, chrome)));

    panel::wire(&document, app.clone());
    events::wire_global_keydown(app.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app: app.clone(),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    app.borrow_mut().begin(mode);
    Ok(())
}
