use glam::{Mat3, Mat4, Vec3, Vec4};

// glTF decoding into a single flattened triangle mesh, plus the bounds and
// progress helpers used while bootstrapping the asset.

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("buffer {0} has no data")]
    MissingBuffer(usize),
    #[error("model contains no triangle geometry")]
    Empty,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.include(p);
        }
        b
    }

    #[inline]
    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Centre of the box; the origin for an empty box.
    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Flattened, world-baked geometry of the whole default scene.
#[derive(Clone, Debug)]
pub struct ModelMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds: Bounds,
}

/// Where each glTF buffer's bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferSlot {
    /// The binary chunk of a `.glb`.
    Blob,
    /// A URI to fetch, already resolved against the model path.
    Fetch(String),
}

pub fn buffer_slots(document: &gltf::Document, model_path: &str) -> Vec<BufferSlot> {
    document
        .buffers()
        .map(|b| match b.source() {
            gltf::buffer::Source::Bin => BufferSlot::Blob,
            gltf::buffer::Source::Uri(uri) => BufferSlot::Fetch(resolve_uri(model_path, uri)),
        })
        .collect()
}

/// Number of fetches needed for a model: the file itself plus external buffers.
pub fn progress_items(slots: &[BufferSlot]) -> usize {
    1 + slots
        .iter()
        .filter(|s| matches!(s, BufferSlot::Fetch(_)))
        .count()
}

/// Resolve a glTF-relative URI against the model's own path.
pub fn resolve_uri(model_path: &str, uri: &str) -> String {
    if uri.starts_with("data:") || uri.starts_with('/') || uri.contains("://") {
        return uri.to_string();
    }
    match model_path.rfind('/') {
        Some(i) => format!("{}{}", &model_path[..=i], uri),
        None => uri.to_string(),
    }
}

/// Whole-number load percentage, `round(loaded / total * 100)`.
pub fn progress_percent(loaded: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let pct = (loaded as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

pub fn progress_label(percent: u32) -> String {
    format!("Loading Model... {}%", percent)
}

/// Walk the default scene and bake every triangle primitive into one mesh.
pub fn decode_mesh(document: &gltf::Document, buffers: &[Vec<u8>]) -> Result<ModelMesh, ModelError> {
    let mut mesh = ModelMesh {
        vertices: Vec::new(),
        indices: Vec::new(),
        bounds: Bounds::empty(),
    };
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());
    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                visit_node(&node, Mat4::IDENTITY, buffers, &mut mesh);
            }
        }
        // No scene: treat every mesh as sitting at the origin
        None => {
            for m in document.meshes() {
                append_mesh(&m, Mat4::IDENTITY, buffers, &mut mesh);
            }
        }
    }
    if mesh.indices.is_empty() {
        return Err(ModelError::Empty);
    }
    Ok(mesh)
}

fn visit_node(node: &gltf::Node<'_>, parent: Mat4, buffers: &[Vec<u8>], out: &mut ModelMesh) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;
    if let Some(m) = node.mesh() {
        append_mesh(&m, world, buffers, out);
    }
    for child in node.children() {
        visit_node(&child, world, buffers, out);
    }
}

fn append_mesh(mesh: &gltf::Mesh<'_>, world: Mat4, buffers: &[Vec<u8>], out: &mut ModelMesh) {
    let normal_matrix = if world.determinant().abs() > f32::EPSILON {
        Mat3::from_mat4(world).inverse().transpose()
    } else {
        Mat3::IDENTITY
    };

    for prim in mesh.primitives() {
        if prim.mode() != gltf::mesh::Mode::Triangles {
            log::warn!(
                "[model] skipping {:?} primitive in mesh {:?}",
                prim.mode(),
                mesh.name()
            );
            continue;
        }
        let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.as_slice()));
        let positions: Vec<Vec3> = match reader.read_positions() {
            Some(iter) => iter.map(|p| world.transform_point3(Vec3::from(p))).collect(),
            None => continue,
        };
        if positions.is_empty() {
            continue;
        }
        let local_indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(iter) => iter
                .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                .collect(),
            None => smooth_normals(&positions, &local_indices),
        };
        let base = Vec4::from(prim.material().pbr_metallic_roughness().base_color_factor());
        let colors: Vec<Vec4> = match reader.read_colors(0) {
            Some(c) => c.into_rgba_f32().map(|c| Vec4::from(c) * base).collect(),
            None => vec![base; positions.len()],
        };

        let first = out.vertices.len() as u32;
        for (i, p) in positions.iter().enumerate() {
            out.bounds.include(*p);
            let n = normals.get(i).copied().unwrap_or(Vec3::Y);
            let c = colors.get(i).copied().unwrap_or(base);
            out.vertices.push(Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                color: c.to_array(),
            });
        }
        let count = positions.len() as u32;
        for tri in local_indices.chunks_exact(3) {
            if tri.iter().all(|&i| i < count) {
                out.indices.extend(tri.iter().map(|&i| first + i));
            }
        }
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
pub fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                Vec3::Y
            } else {
                n
            }
        })
        .collect()
}
