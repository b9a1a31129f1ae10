use crate::core::constants::*;
use crate::core::{Camera, DisplayedObject, ModelMesh};
use glam::{Mat3, Mat4};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_matrix: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) hemi_sky: [f32; 4],
    pub(crate) hemi_ground: [f32; 4],
    pub(crate) dir_color: [f32; 4],
    pub(crate) dir_to_light: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    pub(crate) params: [f32; 4],
}

fn light(hex: u32, intensity: f32) -> [f32; 4] {
    let [r, g, b] = srgb_hex_to_linear(hex);
    [r * intensity, g * intensity, b * intensity, 1.0]
}

impl SceneUniforms {
    /// Pack camera, object transform and the fixed lighting rig.
    pub(crate) fn new(camera: &Camera, object: Option<&DisplayedObject>) -> Self {
        let model = object.map(|o| o.model_matrix()).unwrap_or(Mat4::IDENTITY);
        let normal = if model.determinant().abs() > f32::EPSILON {
            Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose())
        } else {
            Mat4::IDENTITY
        };
        let to_light = DIRECTIONAL_LIGHT_POSITION.normalize();
        let [fr, fg, fb] = srgb_hex_to_linear(BACKGROUND_COLOR);
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: normal.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: light(AMBIENT_LIGHT_COLOR, AMBIENT_LIGHT_INTENSITY),
            hemi_sky: light(HEMISPHERE_LIGHT_SKY, HEMISPHERE_LIGHT_INTENSITY),
            hemi_ground: light(HEMISPHERE_LIGHT_GROUND, HEMISPHERE_LIGHT_INTENSITY),
            dir_color: light(DIRECTIONAL_LIGHT_COLOR, DIRECTIONAL_LIGHT_INTENSITY),
            dir_to_light: to_light.extend(0.0).to_array(),
            fog_color: [fr, fg, fb, 1.0],
            params: [FOG_NEAR, FOG_FAR, MATERIAL_METALNESS, MATERIAL_ROUGHNESS],
        }
    }
}

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("model_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MODEL_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = super::helpers::make_model_pipeline(device, &pl, &shader, color_format);
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    SceneResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}

/// GPU copies of the decoded model.
pub(crate) struct ModelBuffers {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

pub(crate) fn upload_model(device: &wgpu::Device, mesh: &ModelMesh) -> ModelBuffers {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("model_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("model_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    ModelBuffers {
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}
