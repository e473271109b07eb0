mod bubbles;
mod helpers;
mod particles;
mod post;
mod targets;
mod xray;

use crate::assets::DecodedImage;
use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};
use brain_core::particles::{ParticleUniforms, ParticleVertex};
use brain_core::rising::{BubbleUniforms, BubbleVertex};
use brain_core::xray::{XRayMesh, XRayUniforms};
use brain_core::BrainScene;
use web_sys as web;
use wgpu;

use bubbles::BubbleLayer;
use particles::ParticleLayer;
use post::{PostBindGroups, PostResources, PostUniforms};
use targets::{RenderTargets, HDR_FORMAT};
use xray::XRayLayer;

/// Geometry and textures uploaded once when the GPU comes up.
pub struct SceneGeometry<'s> {
    pub particles: &'s [ParticleVertex],
    pub bubbles: &'s [BubbleVertex],
    pub xray: &'s XRayMesh,
    pub spark_texture: Option<&'s DecodedImage>,
    pub xray_texture: Option<&'s DecodedImage>,
}

/// Everything the shaders read for one frame.
pub struct FrameUniforms {
    pub particles: ParticleUniforms,
    pub bubbles: BubbleUniforms,
    /// None while the overlay is hidden.
    pub xray: Option<XRayUniforms>,
    pub time: f32,
}

impl FrameUniforms {
    pub fn from_scene(scene: &BrainScene, time: f32) -> Self {
        let cam = scene.camera.camera();
        let view = cam.view_matrix();
        let view_proj = cam.view_projection();
        Self {
            particles: scene.particles.uniforms(view_proj, view, scene.viewport()),
            bubbles: scene.rising.uniforms(view_proj, time),
            xray: scene
                .xray
                .visible
                .then(|| scene.xray.uniforms(view_proj, scene.particles.view_vector(), time)),
            time,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    particles: ParticleLayer,
    bubbles: BubbleLayer,
    xray: XRayLayer,

    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        geometry: SceneGeometry<'_>,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = |label: &str, src: &str| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(src.into()),
            })
        };
        let particles_shader = shader("particles_shader", brain_core::PARTICLES_WGSL);
        let bubbles_shader = shader("bubbles_shader", brain_core::BUBBLES_WGSL);
        let xray_shader = shader("xray_shader", brain_core::XRAY_WGSL);
        let post_shader = shader("post_shader", brain_core::POST_WGSL);

        let particles =
            ParticleLayer::new(&device, &particles_shader, geometry.particles, HDR_FORMAT);
        let bubbles = BubbleLayer::new(
            &device,
            &queue,
            &bubbles_shader,
            geometry.bubbles,
            geometry.spark_texture,
            HDR_FORMAT,
        );
        let xray = XRayLayer::new(
            &device,
            &queue,
            &xray_shader,
            geometry.xray,
            geometry.xray_texture,
            HDR_FORMAT,
        );

        let targets = RenderTargets::new(&device, width, height);
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = PostBindGroups::new(&device, &post, &targets);

        log::info!("[gpu] ready {}x{} ({:?})", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            bubbles,
            xray,
            targets,
            post,
            post_groups,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_groups = PostBindGroups::new(&self.device, &self.post, &self.targets);
        }
    }

    pub fn render(&mut self, frame_uniforms: &FrameUniforms) -> Result<(), wgpu::SurfaceError> {
        self.particles.write(&self.queue, &frame_uniforms.particles);
        self.bubbles.write(&self.queue, &frame_uniforms.bubbles);
        if let Some(x) = &frame_uniforms.xray {
            self.xray.write(&self.queue, x);
        }
        self.post.write(
            &self.queue,
            PostUniforms {
                resolution: [self.width as f32 / 2.0, self.height as f32 / 2.0],
                time: frame_uniforms.time,
                exposure: 1.0,
                blur_dir: [0.0, 0.0],
                bloom_strength: BLOOM_STRENGTH,
                threshold: BLOOM_THRESHOLD,
            },
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.particles.draw(&mut rpass);
            self.bubbles.draw(&mut rpass);
            if frame_uniforms.xray.is_some() {
                self.xray.draw(&mut rpass);
            }
        }

        // bright pass -> bloom_a, blur h -> bloom_b, blur v -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.hdr,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
