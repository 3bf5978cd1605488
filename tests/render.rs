use softengine::colors;
use softengine::loader::load_babylon_str;
use softengine::math::vec2::Vec2;
use softengine::prelude::*;
use softengine::render::draw_triangle;

const SHADE_BYTES: [u8; 4] = [63, 63, 63, 255];

fn camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)
}

fn right_triangle() -> Mesh {
    Mesh::new(
        "right",
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        vec![Face::new(0, 1, 2)],
    )
}

fn render_once(meshes: &[Mesh]) -> FrameBuffer {
    let mut device = Device::new(640, 480, ImageSurface::new());
    device.clear();
    device.render(&camera(), meshes);
    device.present().unwrap();
    device.back_buffer().clone()
}

fn row(fb: &FrameBuffer, y: i32) -> Vec<i32> {
    (0..fb.width() as i32).filter(|&x| !fb.is_clear(x, y)).collect()
}

#[test]
fn right_triangle_matches_analytic_coverage() {
    let fb = render_once(&[right_triangle()]);

    // The origin lands on the screen center and the x axis is mirrored
    // by the left-handed view.
    assert_eq!(fb.pixel(320, 200), Some(SHADE_BYTES));
    assert_eq!(fb.pixel(300, 230), Some(SHADE_BYTES));
    assert!(fb.is_clear(321, 200));
    assert!(fb.is_clear(210, 130));
    assert!(fb.is_clear(330, 230));

    // About 116.77 pixels per world unit at this distance.
    assert_eq!(row(&fb, 200), (243..=320).collect::<Vec<_>>());
    assert_eq!(row(&fb, 240), vec![203]);
    assert!(row(&fb, 241).is_empty());
    assert!(row(&fb, 122).is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let first = render_once(&[right_triangle()]);
    let second = render_once(&[right_triangle()]);
    assert_eq!(first, second);
}

#[test]
fn surface_receives_exact_back_buffer() {
    let mut device = Device::new(640, 480, ImageSurface::new());
    device.clear();
    device.render(&camera(), &[right_triangle()]);
    device.present().unwrap();
    let image = device.surface().image();
    assert_eq!(image.get_pixel(300, 230).0, SHADE_BYTES);
    assert_eq!(image.as_raw().as_slice(), device.back_buffer().as_bytes());
}

#[test]
fn later_face_overwrites_earlier_face() {
    // Same triangle twice: face 1 is drawn last and wins everywhere.
    let mesh = Mesh::new(
        "twice",
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        vec![Face::new(0, 1, 2), Face::new(0, 1, 2)],
    );
    let fb = render_once(&[mesh]);
    let expected = colors::face_shade(1, 2).to_bytes();
    assert_eq!(fb.pixel(300, 230), Some(expected));
    assert_ne!(expected, colors::face_shade(0, 2).to_bytes());
}

#[test]
fn later_mesh_overwrites_earlier_mesh() {
    let mut near = right_triangle();
    near.position = Vec3::new(0.0, 0.0, 5.0);
    let mut far = Mesh::new(
        "far",
        vec![
            Vec3::new(-2.0, -2.0, 0.0),
            Vec3::new(2.0, -2.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(-2.0, 2.0, 0.0),
        ],
        vec![Face::new(0, 2, 3), Face::new(0, 1, 2)],
    );
    far.position = Vec3::new(0.0, 0.0, -5.0);

    // No depth test: the far mesh is drawn second and covers the near one.
    let fb = render_once(&[near.clone(), far.clone()]);
    assert_eq!(fb.pixel(250, 200), Some(colors::face_shade(1, 2).to_bytes()));

    let fb = render_once(&[far, near]);
    assert_eq!(fb.pixel(250, 200), Some(SHADE_BYTES));
}

#[test]
fn babylon_scene_renders_like_built_mesh() {
    let json = r#"{
        "meshes": [{
            "name": "right",
            "uvCount": 0,
            "position": [0, 0, 0],
            "vertices": [0,0,0, 0,0,1,  1,0,0, 0,0,1,  0,1,0, 0,0,1],
            "indices": [0, 1, 2]
        }]
    }"#;
    let meshes = load_babylon_str(json).unwrap();
    assert_eq!(render_once(&meshes), render_once(&[right_triangle()]));
}

#[test]
fn scanline_fill_is_mirror_symmetric() {
    let mut fb = FrameBuffer::new(16, 16);
    draw_triangle(
        &mut fb,
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(5.0, 10.0, 0.0),
        colors::WHITE,
    );
    for y in 0..16 {
        for x in 0..=10 {
            assert_eq!(fb.is_clear(x, y), fb.is_clear(10 - x, y), "({x}, {y})");
        }
    }
    // Flat-top spans run right to left and are skipped; only the apex row
    // has a non-empty span.
    assert!(!fb.is_clear(5, 10));
}

#[test]
fn draw_point_outside_never_mutates() {
    let mut device = Device::new(8, 8, ImageSurface::new());
    device.clear();
    let before = device.back_buffer().clone();
    for point in [
        Vec2::new(-1.0, 0.0),
        Vec2::new(8.0, 0.0),
        Vec2::new(0.0, 8.0),
        Vec2::new(f32::NAN, 1.0),
        Vec2::new(1.0e9, -1.0e9),
    ] {
        device.draw_point(point, colors::WHITE);
    }
    assert_eq!(device.back_buffer(), &before);
}

#[test]
fn wireframe_uses_only_yellow() {
    let mut device = Device::new(640, 480, ImageSurface::new());
    device.set_render_mode(RenderMode::Wireframe);
    device.clear();
    device.render(&camera(), &[right_triangle()]);
    let fb = device.back_buffer();
    let yellow = colors::WIREFRAME.to_bytes();
    assert_eq!(fb.pixel(320, 240), Some(yellow));
    assert!(fb.is_clear(300, 230));
    for y in 0..480 {
        for x in 0..640 {
            if let Some(px) = fb.pixel(x, y) {
                assert!(px == yellow || px == [0, 0, 0, 0]);
            }
        }
    }
}
