//! Shader compile + link.
//!
//! WGSL sources are parsed and validated with `naga` before anything reaches
//! the device, so a broken shader surfaces as a [`ShaderError`] carrying the
//! diagnostic text instead of a device-level panic.
//!
//! A program is one vertex unit plus one fragment unit. Linking checks that
//! the stages line up: every location the fragment stage reads must be
//! written by the vertex stage with the same type, and shared bindings must
//! agree.

use std::borrow::Cow;
use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// Pipeline stage a shader unit is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }

    fn to_wgpu(self) -> wgpu::ShaderStages {
        match self {
            ShaderStage::Vertex => wgpu::ShaderStages::VERTEX,
            ShaderStage::Fragment => wgpu::ShaderStages::FRAGMENT,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    /// The source did not parse or validate, or lacks an entry point for its stage.
    #[error("an error occurred compiling the {stage} shader `{label}`:\n{log}")]
    Compile {
        label: String,
        stage: ShaderStage,
        log: String,
    },

    /// The two units do not form a usable program.
    #[error("unable to link the shader program `{label}`: {log}")]
    Link { label: String, log: String },
}

/// A validated shader unit with a resolved entry point.
pub struct CompiledShader {
    label: String,
    stage: ShaderStage,
    source: Cow<'static, str>,
    module: naga::Module,
    entry_point: String,
}

impl CompiledShader {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    fn entry(&self) -> Option<&naga::EntryPoint> {
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.name == self.entry_point)
    }
}

impl fmt::Debug for CompiledShader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledShader")
            .field("label", &self.label)
            .field("stage", &self.stage)
            .field("entry_point", &self.entry_point)
            .finish_non_exhaustive()
    }
}

/// Compiles one shader unit: WGSL text to a validated module, or a compile error.
pub fn compile_shader(
    label: &str,
    stage: ShaderStage,
    source: impl Into<Cow<'static, str>>,
) -> Result<CompiledShader, ShaderError> {
    let source = source.into();
    let compile_err = |log: String| ShaderError::Compile {
        label: label.to_string(),
        stage,
        log,
    };

    let module = naga::front::wgsl::parse_str(&source)
        .map_err(|e| compile_err(e.emit_to_string(&source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| compile_err(e.emit_to_string(&source)))?;

    let mut candidates = module
        .entry_points
        .iter()
        .filter(|ep| ep.stage == stage.to_naga());

    let entry_point = candidates
        .next()
        .map(|ep| ep.name.clone())
        .ok_or_else(|| compile_err(format!("no {stage} entry point")))?;

    if candidates.next().is_some() {
        log::debug!("shader `{label}` has several {stage} entry points; using `{entry_point}`");
    }

    log::debug!("compiled {stage} shader `{label}` (entry `{entry_point}`)");

    Ok(CompiledShader {
        label: label.to_string(),
        stage,
        source,
        module,
        entry_point,
    })
}

/// Uniform binding resolved by name.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UniformLocation {
    pub group: u32,
    pub binding: u32,
    /// Size of the uniform's type in bytes.
    pub size: u32,
    /// Stages that declare the uniform.
    pub visibility: wgpu::ShaderStages,
}

/// A vertex + fragment pair whose interfaces have been checked against each other.
#[derive(Debug)]
pub struct LinkedProgram {
    label: String,
    vertex: CompiledShader,
    fragment: CompiledShader,
}

/// Links two compiled units into a program.
pub fn link_program(
    label: &str,
    vertex: CompiledShader,
    fragment: CompiledShader,
) -> Result<LinkedProgram, ShaderError> {
    let link_err = |log: String| ShaderError::Link {
        label: label.to_string(),
        log,
    };

    for (unit, expected) in [(&vertex, ShaderStage::Vertex), (&fragment, ShaderStage::Fragment)] {
        if unit.stage != expected {
            return Err(link_err(format!(
                "expected a {expected} shader, got {} shader `{}`",
                unit.stage, unit.label
            )));
        }
    }

    let (Some(vs_entry), Some(fs_entry)) = (vertex.entry(), fragment.entry()) else {
        return Err(link_err("entry point vanished after compilation".to_string()));
    };

    let mut written = Vec::new();
    if let Some(result) = &vs_entry.function.result {
        collect_locations(&vertex.module, result.ty, result.binding.as_ref(), &mut written);
    }

    let mut read = Vec::new();
    for arg in &fs_entry.function.arguments {
        collect_locations(&fragment.module, arg.ty, arg.binding.as_ref(), &mut read);
    }

    for (location, input_ty) in &read {
        let Some((_, output_ty)) = written.iter().find(|(loc, _)| loc == location) else {
            return Err(link_err(format!(
                "fragment input at location {location} is not written by the vertex stage"
            )));
        };
        if output_ty != input_ty {
            return Err(link_err(format!(
                "location {location} is {} in the vertex stage but {} in the fragment stage",
                describe_type(output_ty),
                describe_type(input_ty)
            )));
        }
    }

    for (vs_name, vs_binding) in resource_bindings(&vertex.module) {
        for (fs_name, fs_binding) in resource_bindings(&fragment.module) {
            if vs_binding == fs_binding && vs_name != fs_name {
                return Err(link_err(format!(
                    "binding @group({}) @binding({}) is `{vs_name}` in the vertex stage but `{fs_name}` in the fragment stage",
                    vs_binding.group, vs_binding.binding
                )));
            }
        }
    }

    log::debug!("linked program `{label}`");

    Ok(LinkedProgram {
        label: label.to_string(),
        vertex,
        fragment,
    })
}

/// Compiles both units and links them.
pub fn build_program(
    label: &str,
    vertex_source: impl Into<Cow<'static, str>>,
    fragment_source: impl Into<Cow<'static, str>>,
) -> Result<LinkedProgram, ShaderError> {
    let vertex = compile_shader(&format!("{label} vertex"), ShaderStage::Vertex, vertex_source)?;
    let fragment = compile_shader(&format!("{label} fragment"), ShaderStage::Fragment, fragment_source)?;
    link_program(label, vertex, fragment)
}

impl LinkedProgram {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vertex(&self) -> &CompiledShader {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledShader {
        &self.fragment
    }

    /// Location of the named vertex input, if the vertex entry point reads it.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        let entry = self.vertex.entry()?;
        entry
            .function
            .arguments
            .iter()
            .find_map(|arg| find_named_location(&self.vertex.module, arg.name.as_deref(), arg.ty, arg.binding.as_ref(), name))
    }

    /// Binding of the named uniform in either stage.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        let mut found: Option<UniformLocation> = None;

        for unit in [&self.vertex, &self.fragment] {
            let module = &unit.module;
            let hit = module.global_variables.iter().find(|(_, gv)| {
                gv.space == naga::AddressSpace::Uniform && gv.name.as_deref() == Some(name)
            });
            let Some((_, gv)) = hit else { continue };
            let Some(binding) = &gv.binding else { continue };

            let size = module.types[gv.ty].inner.size(module.to_ctx());
            let loc = found.get_or_insert(UniformLocation {
                group: binding.group,
                binding: binding.binding,
                size,
                visibility: wgpu::ShaderStages::NONE,
            });
            loc.visibility |= unit.stage.to_wgpu();
        }

        found
    }

    /// Creates the device-side shader modules `(vertex, fragment)`.
    pub fn create_modules(&self, device: &wgpu::Device) -> (wgpu::ShaderModule, wgpu::ShaderModule) {
        let make = |unit: &CompiledShader| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(unit.label.as_str()),
                source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(unit.source.as_ref())),
            })
        };
        (make(&self.vertex), make(&self.fragment))
    }
}

fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    out: &mut Vec<(u32, naga::TypeInner)>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => {
            out.push((*location, module.types[ty].inner.clone()))
        }
        Some(_) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for m in members {
                    collect_locations(module, m.ty, m.binding.as_ref(), out);
                }
            }
        }
    }
}

fn describe_type(inner: &naga::TypeInner) -> String {
    let scalar = |s: &naga::Scalar| {
        let kind = match s.kind {
            naga::ScalarKind::Float | naga::ScalarKind::AbstractFloat => "f",
            naga::ScalarKind::Sint | naga::ScalarKind::AbstractInt => "i",
            naga::ScalarKind::Uint => "u",
            naga::ScalarKind::Bool => return "bool".to_string(),
        };
        format!("{kind}{}", u32::from(s.width) * 8)
    };

    match inner {
        naga::TypeInner::Scalar(s) => scalar(s),
        naga::TypeInner::Vector { size, scalar: s } => format!("vec{}<{}>", *size as u8, scalar(s)),
        other => format!("{other:?}"),
    }
}

fn find_named_location(
    module: &naga::Module,
    arg_name: Option<&str>,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    wanted: &str,
) -> Option<u32> {
    match binding {
        Some(naga::Binding::Location { location, .. }) if arg_name == Some(wanted) => Some(*location),
        Some(_) => None,
        None => match &module.types[ty].inner {
            naga::TypeInner::Struct { members, .. } => members.iter().find_map(|m| {
                find_named_location(module, m.name.as_deref(), m.ty, m.binding.as_ref(), wanted)
            }),
            _ => None,
        },
    }
}

fn resource_bindings(module: &naga::Module) -> Vec<(String, naga::ResourceBinding)> {
    module
        .global_variables
        .iter()
        .filter_map(|(_, gv)| {
            let binding = gv.binding.clone()?;
            Some((gv.name.clone().unwrap_or_default(), binding))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = include_str!("shaders/quad_vertex.wgsl");
    const FS: &str = include_str!("shaders/quad_fragment.wgsl");

    const VS_WITH_COLOR: &str = r#"
        struct VsOut {
            @builtin(position) position: vec4<f32>,
            @location(0) color: vec4<f32>,
        };

        @vertex
        fn vs_main(@location(0) position: vec2<f32>) -> VsOut {
            var out: VsOut;
            out.position = vec4<f32>(position, 0.0, 1.0);
            out.color = vec4<f32>(1.0);
            return out;
        }
    "#;

    const FS_READS_LOCATION_1: &str = r#"
        @fragment
        fn fs_main(@location(1) tint: vec4<f32>) -> @location(0) vec4<f32> {
            return tint;
        }
    "#;

    const VS_WRITES_VEC2: &str = r#"
        struct VsOut {
            @builtin(position) position: vec4<f32>,
            @location(0) uv: vec2<f32>,
        };

        @vertex
        fn vs_main(@location(0) position: vec2<f32>) -> VsOut {
            var out: VsOut;
            out.position = vec4<f32>(position, 0.0, 1.0);
            out.uv = position;
            return out;
        }
    "#;

    const FS_READS_VEC4: &str = r#"
        @fragment
        fn fs_main(@location(0) tint: vec4<f32>) -> @location(0) vec4<f32> {
            return tint;
        }
    "#;

    // ── compile ───────────────────────────────────────────────────────────

    #[test]
    fn compiles_quad_shaders() {
        let vs = compile_shader("quad vertex", ShaderStage::Vertex, VS).unwrap();
        let fs = compile_shader("quad fragment", ShaderStage::Fragment, FS).unwrap();
        assert_eq!(vs.entry_point(), "vs_main");
        assert_eq!(fs.entry_point(), "fs_main");
    }

    #[test]
    fn syntax_error_reports_label_and_log() {
        let err = compile_shader("broken", ShaderStage::Fragment, "fn fs_main( {").unwrap_err();
        match &err {
            ShaderError::Compile { label, stage, log } => {
                assert_eq!(label, "broken");
                assert_eq!(*stage, ShaderStage::Fragment);
                assert!(!log.is_empty());
            }
            other => panic!("expected compile error, got {other:?}"),
        }
        assert!(err.to_string().contains("`broken`"));
    }

    #[test]
    fn validation_error_is_a_compile_error() {
        // Returns a vec3 where a vec4 is declared.
        let src = "@fragment fn fs_main() -> @location(0) vec4<f32> { return vec3<f32>(1.0); }";
        let err = compile_shader("bad type", ShaderStage::Fragment, src).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { .. }));
    }

    #[test]
    fn missing_stage_entry_point_fails_compile() {
        let err = compile_shader("not a vertex shader", ShaderStage::Vertex, FS).unwrap_err();
        match err {
            ShaderError::Compile { log, .. } => assert!(log.contains("no vertex entry point")),
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    // ── link ──────────────────────────────────────────────────────────────

    #[test]
    fn links_quad_program() {
        let program = build_program("quad", VS, FS).unwrap();
        assert_eq!(program.label(), "quad");
        assert_eq!(program.vertex().stage(), ShaderStage::Vertex);
        assert_eq!(program.fragment().stage(), ShaderStage::Fragment);
    }

    #[test]
    fn swapped_units_fail_link() {
        let vs = compile_shader("v", ShaderStage::Vertex, VS).unwrap();
        let fs = compile_shader("f", ShaderStage::Fragment, FS).unwrap();
        let err = link_program("swapped", fs, vs).unwrap_err();
        match err {
            ShaderError::Link { label, log } => {
                assert_eq!(label, "swapped");
                assert!(log.contains("expected a vertex shader"));
            }
            other => panic!("expected link error, got {other:?}"),
        }
    }

    #[test]
    fn unwritten_fragment_input_fails_link() {
        let err = build_program("mismatch", VS_WITH_COLOR, FS_READS_LOCATION_1).unwrap_err();
        match err {
            ShaderError::Link { log, .. } => assert!(log.contains("location 1")),
            other => panic!("expected link error, got {other:?}"),
        }
    }

    #[test]
    fn struct_outputs_satisfy_fragment_inputs() {
        let fs = r#"
            @fragment
            fn fs_main(@location(0) tint: vec4<f32>) -> @location(0) vec4<f32> {
                return tint;
            }
        "#;
        assert!(build_program("varying", VS_WITH_COLOR, fs).is_ok());
    }

    #[test]
    fn conflicting_bindings_fail_link() {
        let vs = r#"
            @group(0) @binding(0) var<uniform> u_offset: vec4<f32>;

            @vertex
            fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
                return vec4<f32>(position, 0.0, 1.0) + u_offset;
            }
        "#;
        let err = build_program("clash", vs, FS).unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
    }

    // ── lookups ───────────────────────────────────────────────────────────

    #[test]
    fn attribute_lookup_by_name() {
        let program = build_program("quad", VS, FS).unwrap();
        assert_eq!(program.attribute_location("position"), Some(0));
        assert_eq!(program.attribute_location("normal"), None);
    }

    #[test]
    fn uniform_lookup_by_name() {
        let program = build_program("quad", VS, FS).unwrap();
        let loc = program.uniform_location("u_color").unwrap();
        assert_eq!((loc.group, loc.binding), (0, 0));
        assert_eq!(loc.size, 16);
        assert_eq!(loc.visibility, wgpu::ShaderStages::FRAGMENT);
        assert!(program.uniform_location("u_missing").is_none());
    }

    #[test]
    fn mismatched_varying_type_fails_link() {
        let vs = compile_shader("uv vertex", ShaderStage::Vertex, VS_WRITES_VEC2).unwrap();
        let fs = compile_shader("tint fragment", ShaderStage::Fragment, FS_READS_VEC4).unwrap();

        match link_program("mismatch", vs, fs).unwrap_err() {
            ShaderError::Link { label, log } => {
                assert_eq!(label, "mismatch");
                assert!(log.contains("location 0"), "{log}");
                assert!(log.contains("vec2<f32>") && log.contains("vec4<f32>"), "{log}");
            }
            other => panic!("expected link error, got {other:?}"),
        }
    }

    #[test]
    fn matching_varying_type_links() {
        let vs = compile_shader("color vertex", ShaderStage::Vertex, VS_WITH_COLOR).unwrap();
        let fs = compile_shader("tint fragment", ShaderStage::Fragment, FS_READS_VEC4).unwrap();
        assert!(link_program("matched", vs, fs).is_ok());
    }

    #[test]
    fn describes_vector_types() {
        let v = naga::TypeInner::Vector {
            size: naga::VectorSize::Tri,
            scalar: naga::Scalar::F32,
        };
        assert_eq!(describe_type(&v), "vec3<f32>");
        assert_eq!(describe_type(&naga::TypeInner::Scalar(naga::Scalar::U32)), "u32");
    }
}
