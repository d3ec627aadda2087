//! End-to-end widget scenarios driven through the public API, rendered to
//! real pixels on the software raster surface.

use markboard::Config;
use markboard::draw::Icon;
use markboard::input::{InputState, Mode, MouseButton};
use markboard::surface::PixmapSurface;

fn new_state() -> InputState {
    InputState::from_config(&Config::default())
}

fn new_surface() -> PixmapSurface {
    PixmapSurface::new(200, 200).expect("surface")
}

fn alpha_at(surface: &PixmapSurface, x: u32, y: u32) -> u8 {
    surface.pixmap().pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
}

fn red_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("png encoding");
    bytes
}

#[test]
fn drawing_a_line_paints_it_and_commits_on_release() {
    let mut state = new_state();
    let mut surface = new_surface();
    state.set_mode(Mode::Line);

    state.on_mouse_press(&mut surface, MouseButton::Left, 10, 100);
    state.on_mouse_motion(&mut surface, 150, 100);
    state.on_mouse_release(MouseButton::Left, 150, 100);

    // The preview already shows the committed picture
    assert!(alpha_at(&surface, 80, 100) > 0);
    assert_eq!(state.frame.len(), 1);

    // A host repaint shows the same line from the store
    state.render(&mut surface);
    assert!(alpha_at(&surface, 80, 100) > 0);
    assert_eq!(alpha_at(&surface, 80, 50), 0);
}

#[test]
fn arrows_grow_wings_at_the_tip() {
    let mut state = new_state();
    let mut surface = new_surface();
    state.set_mode(Mode::Arrow);

    state.on_mouse_press(&mut surface, MouseButton::Left, 20, 100);
    state.on_mouse_release(MouseButton::Left, 120, 100);
    state.render(&mut surface);

    // Shaft
    assert!(alpha_at(&surface, 70, 100) > 0);
    // Both wings open back from the tip at (120, 100)
    assert!(alpha_at(&surface, 113, 104) > 0);
    assert!(alpha_at(&surface, 113, 96) > 0);
    // Nothing past the tip
    assert_eq!(alpha_at(&surface, 135, 100), 0);
}

#[test]
fn erase_click_at_an_endpoint_removes_the_shape() {
    let mut state = new_state();
    let mut surface = new_surface();
    state.set_mode(Mode::Line);
    state.on_mouse_press(&mut surface, MouseButton::Left, 10, 10);
    state.on_mouse_release(MouseButton::Left, 100, 10);
    state.render(&mut surface);
    assert!(alpha_at(&surface, 55, 10) > 0);

    state.set_mode(Mode::Eraser);
    state.on_mouse_press(&mut surface, MouseButton::Left, 10, 10);

    assert!(state.frame.is_empty());
    assert_eq!(alpha_at(&surface, 55, 10), 0);
}

#[test]
fn erase_click_at_the_midpoint_leaves_the_shape_visible() {
    let mut state = new_state();
    let mut surface = new_surface();
    state.set_mode(Mode::Arrow);
    state.on_mouse_press(&mut surface, MouseButton::Left, 0, 50);
    state.on_mouse_release(MouseButton::Left, 100, 50);

    state.set_mode(Mode::Eraser);
    state.on_mouse_press(&mut surface, MouseButton::Left, 50, 50);

    assert_eq!(state.frame.len(), 1);
    assert!(alpha_at(&surface, 30, 50) > 0);
}

#[test]
fn stamped_icons_appear_then_vanish_on_the_next_redraw() {
    let mut state = new_state();
    let mut surface = new_surface();

    let icon = Icon::decode(&red_png()).expect("decode icon");
    state.set_icon(icon);
    assert_eq!(state.mode(), Mode::Move);

    state.on_mouse_press(&mut surface, MouseButton::Left, 20, 20);

    // A 50x50 stamp with top-left at (20, 20); the store is untouched
    assert!(alpha_at(&surface, 45, 45) > 0);
    assert_eq!(alpha_at(&surface, 90, 90), 0);
    assert!(state.frame.is_empty());

    // An unrelated erase triggers a redraw, which wipes the stamp
    state.set_mode(Mode::Eraser);
    state.on_mouse_press(&mut surface, MouseButton::Left, 180, 180);
    assert_eq!(alpha_at(&surface, 45, 45), 0);
}

#[test]
fn selecting_a_non_image_file_installs_nothing() {
    let mut state = new_state();
    let mut surface = new_surface();

    // Host-side decode fails, so no icon is ever installed
    assert!(Icon::decode(b"<html>not an image</html>").is_err());

    state.on_mouse_press(&mut surface, MouseButton::Left, 20, 20);
    assert_eq!(alpha_at(&surface, 45, 45), 0);
    assert!(state.frame.is_empty());
}

#[test]
fn config_values_flow_into_the_controller() {
    let config: Config = {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [drawing]
            default_mode = "line"

            [eraser]
            tolerance = 30

            [icon]
            stamp_size = 64
            "#,
        )
        .expect("write config");
        Config::load_from_path(&path).expect("load config")
    };

    let state = InputState::from_config(&config);
    assert_eq!(state.mode(), Mode::Line);
    assert_eq!(state.eraser_tolerance, 30);
    assert_eq!(state.stamp_size, 64);
}
