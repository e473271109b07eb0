use super::helpers;
use crate::assets::DecodedImage;
use brain_core::xray::{XRayMesh, XRayUniforms, XRayVertex};
use wgpu;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Indexed brain surface drawn with the fresnel glow shader.
pub(crate) struct XRayLayer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bg: wgpu::BindGroup,
    texture_bg: wgpu::BindGroup,
    _lightning: wgpu::Texture,
}

impl XRayLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        shader: &wgpu::ShaderModule,
        mesh: &XRayMesh,
        lightning: Option<&DecodedImage>,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let uniform_bgl = helpers::uniform_layout(
            device,
            "xray_bgl0",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let texture_bgl = helpers::texture_layout(device, "xray_bgl1");
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "xray_uniforms",
            std::mem::size_of::<XRayUniforms>(),
        );
        let uniform_bg =
            helpers::uniform_bind_group(device, "xray_bg0", &uniform_bgl, &uniform_buffer);
        let (lightning_tex, lightning_view) =
            helpers::upload_image(device, queue, "xray_texture", lightning);
        // the lightning scrolls vertically and wraps
        let sampler = helpers::linear_sampler(device, "xray_sampler", wgpu::AddressMode::Repeat);
        let texture_bg = helpers::texture_bind_group(
            device,
            "xray_bg1",
            &texture_bgl,
            &lightning_view,
            &sampler,
        );

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("xray_pl"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<XRayVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        };
        let pipeline = helpers::make_scene_pipeline(
            device,
            "xray_pipeline",
            &layout,
            shader,
            &[vertex_layout],
            wgpu::PrimitiveTopology::TriangleList,
            color_format,
        );
        let vertex_buffer = helpers::buffer_init(
            device,
            "xray_vertices",
            bytemuck::cast_slice(&mesh.vertices),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = helpers::buffer_init(
            device,
            "xray_indices",
            bytemuck::cast_slice(&mesh.indices),
            wgpu::BufferUsages::INDEX,
        );
        if mesh.is_empty() {
            log::warn!("[gpu] x-ray mesh has no triangles, overlay disabled");
        } else {
            log::info!(
                "[gpu] x-ray mesh {} vertices, {} triangles",
                mesh.vertices.len(),
                mesh.indices.len() / 3
            );
        }
        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            uniform_bg,
            texture_bg,
            _lightning: lightning_tex,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &XRayUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw<'p>(&'p self, rpass: &mut wgpu::RenderPass<'p>) {
        if self.index_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniform_bg, &[]);
        rpass.set_bind_group(1, &self.texture_bg, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
