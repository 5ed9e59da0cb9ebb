use std::cell::Cell;
use std::rc::Rc;

use drawkit_engine::chain::{Size, Stage};
use drawkit_engine::manager::{DrawManager, RasterDrawManager};
use drawkit_engine::paint::Color;
use drawkit_engine::raster::{RasterCanvas, SoftwareBackend};

fn manager(size: Size) -> (RasterDrawManager<SoftwareBackend>, Rc<Cell<u32>>) {
    let draws = Rc::new(Cell::new(0));
    let counter = draws.clone();
    let m = RasterDrawManager::new(SoftwareBackend::new(), size, move |canvas: &mut RasterCanvas| {
        counter.set(counter.get() + 1);
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    });
    (m, draws)
}

#[test]
fn dispose_is_safe_before_initiate_and_when_repeated() {
    let (mut m, _) = manager(Size::new(8, 8));
    m.dispose();
    m.initiate().unwrap();
    m.dispose();
    m.dispose();
    assert!(!m.has_canvas());
    assert!(m.chain_state().is_empty());
}

#[test]
fn draw_clears_to_clear_color_then_runs_callback() {
    let (mut m, draws) = manager(Size::new(4, 4));
    m.set_clear_color(Color::from_argb(0xFF00_00FF));
    m.initiate().unwrap();

    m.draw();

    assert_eq!(draws.get(), 1);
    let canvas = m.canvas().unwrap();
    assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(3, 3), Some([0, 0, 255, 255]));
}

#[test]
fn draw_without_canvas_skips_callback() {
    let (mut m, draws) = manager(Size::new(4, 4));
    m.draw();
    m.initiate().unwrap();
    m.dispose();
    m.draw();
    assert_eq!(draws.get(), 0);
    assert_eq!(m.backend().canvases_created(), 1);
}

#[test]
fn resize_recreates_canvas_at_new_size() {
    let (mut m, _) = manager(Size::new(4, 4));
    m.initiate().unwrap();

    m.resize(10, 6).unwrap();

    assert_eq!(m.canvas().map(RasterCanvas::size), Some(Size::new(10, 6)));
    assert_eq!(m.backend().canvases_created(), 2);
}

#[test]
fn resize_before_initiate_only_records_size() {
    let (mut m, _) = manager(Size::new(4, 4));
    m.resize(7, 3).unwrap();
    assert!(!m.is_initiated());
    assert!(!m.has_canvas());
    assert_eq!(m.backend().canvases_created(), 0);

    m.initiate().unwrap();
    assert!(m.is_initiated());
    assert_eq!(m.canvas().map(RasterCanvas::size), Some(Size::new(7, 3)));
}

#[test]
fn zero_size_fails_at_canvas_stage() {
    let (mut m, _) = manager(Size::new(0, 4));
    let err = m.initiate().unwrap_err();
    assert_eq!(err.stage(), Stage::Canvas);
    assert!(!m.has_canvas());
}

#[test]
fn renderer_info_names_software_api() {
    let (m, _) = manager(Size::new(1, 1));
    assert!(m.renderer_info().starts_with("GraphicsApi: SOFTWARE\nOS: "));
}

#[test]
fn manager_survives_repeated_cycles() {
    let (mut m, draws) = manager(Size::new(2, 2));
    for _ in 0..2 {
        m.initiate().unwrap();
        m.draw();
        m.draw();
        m.dispose();
    }
    assert_eq!(draws.get(), 4);
    assert_eq!(m.backend().canvases_created(), 2);
}
