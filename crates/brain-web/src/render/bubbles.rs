use super::helpers;
use crate::assets::DecodedImage;
use brain_core::rising::{BubbleUniforms, BubbleVertex};
use wgpu;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    1 => Float32x4, // position, speed
    2 => Float32x2, // phase, size
];

/// Rising particles and sparkles, textured with the spark sprite.
pub(crate) struct BubbleLayer {
    pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bg: wgpu::BindGroup,
    texture_bg: wgpu::BindGroup,
    _spark: wgpu::Texture,
}

impl BubbleLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        shader: &wgpu::ShaderModule,
        vertices: &[BubbleVertex],
        spark: Option<&DecodedImage>,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let uniform_bgl = helpers::uniform_layout(
            device,
            "bubbles_bgl0",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let texture_bgl = helpers::texture_layout(device, "bubbles_bgl1");
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "bubbles_uniforms",
            std::mem::size_of::<BubbleUniforms>(),
        );
        let uniform_bg =
            helpers::uniform_bind_group(device, "bubbles_bg0", &uniform_bgl, &uniform_buffer);
        let (spark_tex, spark_view) = helpers::upload_image(device, queue, "spark_texture", spark);
        let sampler = helpers::linear_sampler(device, "spark_sampler", wgpu::AddressMode::ClampToEdge);
        let texture_bg =
            helpers::texture_bind_group(device, "bubbles_bg1", &texture_bgl, &spark_view, &sampler);

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("bubbles_pl"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BubbleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        };
        let pipeline = helpers::make_scene_pipeline(
            device,
            "bubbles_pipeline",
            &layout,
            shader,
            &[helpers::quad_layout(), instance_layout],
            wgpu::PrimitiveTopology::TriangleList,
            color_format,
        );
        let quad_vb = helpers::buffer_init(
            device,
            "bubbles_quad",
            bytemuck::cast_slice(&helpers::QUAD_CORNERS),
            wgpu::BufferUsages::VERTEX,
        );
        let instance_vb = helpers::buffer_init(
            device,
            "bubbles_instances",
            bytemuck::cast_slice(vertices),
            wgpu::BufferUsages::VERTEX,
        );
        Self {
            pipeline,
            quad_vb,
            instance_vb,
            count: vertices.len() as u32,
            uniform_buffer,
            uniform_bg,
            texture_bg,
            _spark: spark_tex,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &BubbleUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw<'p>(&'p self, rpass: &mut wgpu::RenderPass<'p>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniform_bg, &[]);
        rpass.set_bind_group(1, &self.texture_bg, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..helpers::QUAD_CORNERS.len() as u32, 0..self.count);
    }
}
