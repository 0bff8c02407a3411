use knob_mesh::export::read_stl_binary;
use knob_mesh::{generate_knob, KnobStyle, ShaftMode, ShapeParameters};
use std::io::Cursor;

#[test]
fn roundtrip_plain_knob() {
    let params = ShapeParameters {
        top_fillet_radius: 0.0,
        top_fillet_height: 0.0,
        ..Default::default()
    };
    let knob = generate_knob(&params).unwrap();

    let mut bytes = Vec::new();
    knob.write_stl(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 84 + 50 * knob.triangle_count());

    let back = read_stl_binary(Cursor::new(bytes)).unwrap();
    assert_eq!(back.triangle_count(), knob.triangle_count());

    let relative = (back.signed_volume() - knob.mesh().signed_volume()).abs()
        / knob.mesh().signed_volume();
    assert!(relative < 1e-5, "volume drifted by {relative}");
}

#[test]
fn roundtrip_through_file() {
    let params = ShapeParameters {
        style: KnobStyle::Lobed,
        dome: true,
        shaft_mode: ShaftMode::NutTrap,
        through_hole: true,
        ..Default::default()
    };
    let knob = generate_knob(&params).unwrap();

    let path = std::env::temp_dir().join(format!("knob-mesh-{}.stl", std::process::id()));
    let file = std::fs::File::create(&path).unwrap();
    knob.write_stl(std::io::BufWriter::new(file)).unwrap();

    let back = read_stl_binary(std::fs::File::open(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back.triangle_count(), knob.triangle_count());
}
