//! Validates the bundled WGSL shaders with naga, so a shader typo fails in
//! CI instead of at pipeline creation.

const BAKED: &str = include_str!("../src/shaders/baked.wgsl");
const POLE_LIGHT: &str = include_str!("../src/shaders/pole_light.wgsl");
const PORTAL: &str = include_str!("../src/shaders/portal.wgsl");
const FIREFLIES: &str = include_str!("../src/shaders/fireflies.wgsl");

fn validate_wgsl(source: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(())
}

#[test]
fn test_baked_shader_validates() {
    validate_wgsl(BAKED).expect("baked shader should be valid");
}

#[test]
fn test_pole_light_shader_validates() {
    validate_wgsl(POLE_LIGHT).expect("pole light shader should be valid");
}

#[test]
fn test_portal_shader_validates() {
    validate_wgsl(PORTAL).expect("portal shader should be valid");
}

#[test]
fn test_fireflies_shader_validates() {
    validate_wgsl(FIREFLIES).expect("fireflies shader should be valid");
}

#[test]
fn test_shaders_declare_both_entry_points() {
    for source in [BAKED, POLE_LIGHT, PORTAL, FIREFLIES] {
        let module = naga::front::wgsl::parse_str(source).expect("shader should parse");
        let names: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(names.contains(&"vs_main"), "missing vs_main in {:?}", names);
        assert!(names.contains(&"fs_main"), "missing fs_main in {:?}", names);
    }
}
