// Host-side checks that the WGSL shader parses, validates and agrees with the
// Rust-side uniform and instance layouts.

mod common;

use common::scene::cloud::ParticleInstance;
use common::scene::state::ParticleUniforms;

const PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

fn module() -> naga::Module {
    naga::front::wgsl::parse_str(PARTICLES_WGSL).expect("particles.wgsl parses")
}

#[test]
fn shader_validates() {
    let module = module();
    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .expect("particles.wgsl validates");
}

#[test]
fn uniform_struct_matches_rust_layout() {
    let module = module();
    let (members, span) = module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(name), naga::TypeInner::Struct { members, span }) if name == "Uniforms" => {
                Some((members.clone(), *span))
            }
            _ => None,
        })
        .expect("Uniforms struct");
    assert_eq!(span as usize, std::mem::size_of::<ParticleUniforms>());

    let names: Vec<_> = members.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(
        names,
        ["view_proj", "view", "color", "frame", "viewport", "wave", "wave_fade", "repulsion"]
    );
    let offsets: Vec<u32> = members.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, [0, 64, 128, 144, 160, 176, 192, 208]);
}

#[test]
fn entry_points_match_pipeline_names() {
    let module = module();
    let names: Vec<_> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_particles"));
    assert!(names.contains(&"fs_particles"));
}

#[test]
fn instance_attribute_is_one_vec4() {
    let module = module();
    let vs = module
        .entry_points
        .iter()
        .find(|e| e.name == "vs_particles")
        .expect("vertex entry point");
    let arg = vs
        .function
        .arguments
        .iter()
        .find(|a| matches!(a.binding, Some(naga::Binding::Location { location: 0, .. })))
        .expect("@location(0) input");
    match module.types[arg.ty].inner {
        naga::TypeInner::Vector { size, scalar } => {
            assert_eq!(size, naga::VectorSize::Quad);
            assert_eq!(scalar, naga::Scalar::F32);
        }
        ref other => panic!("unexpected instance input type {other:?}"),
    }
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 16);
}
