use super::helpers;
use brain_core::particles::{ParticleUniforms, ParticleVertex};
use wgpu;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    1 => Float32x4, // start, scale
    2 => Float32x4, // end, delay
    3 => Float32x4, // start colour, duration
    4 => Float32x4, // end colour
];

/// The brain swarm: one instanced sprite per particle.
pub(crate) struct ParticleLayer {
    pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ParticleLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        vertices: &[ParticleVertex],
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let bgl = helpers::uniform_layout(device, "particles_bgl", wgpu::ShaderStages::VERTEX);
        let uniform_buffer = helpers::uniform_buffer(
            device,
            "particles_uniforms",
            std::mem::size_of::<ParticleUniforms>(),
        );
        let bind_group = helpers::uniform_bind_group(device, "particles_bg", &bgl, &uniform_buffer);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        };
        let pipeline = helpers::make_scene_pipeline(
            device,
            "particles_pipeline",
            &layout,
            shader,
            &[helpers::quad_layout(), instance_layout],
            wgpu::PrimitiveTopology::TriangleList,
            color_format,
        );
        let quad_vb = helpers::buffer_init(
            device,
            "particles_quad",
            bytemuck::cast_slice(&helpers::QUAD_CORNERS),
            wgpu::BufferUsages::VERTEX,
        );
        let instance_vb = helpers::buffer_init(
            device,
            "particles_instances",
            bytemuck::cast_slice(vertices),
            wgpu::BufferUsages::VERTEX,
        );
        log::info!("[gpu] particle layer with {} instances", vertices.len());
        Self {
            pipeline,
            quad_vb,
            instance_vb,
            count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ParticleUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw<'p>(&'p self, rpass: &mut wgpu::RenderPass<'p>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..helpers::QUAD_CORNERS.len() as u32, 0..self.count);
    }
}
