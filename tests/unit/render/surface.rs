use super::*;
use crate::render::recording::{DrawCommand, RecordingSurface};

fn draw_in_scope(surface: &mut dyn RasterSurface) -> FigurineResult<()> {
    let mut scope = TransformScope::push(surface, Vec2::new(10.0, 20.0), 90.0)?;
    assert_eq!(scope.transform_depth(), 1);
    scope.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::BLACK)?;
    scope.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Rgba8::BLACK)?;
    Ok(())
}

#[test]
fn scope_pops_on_success() {
    let mut s = RecordingSurface::new(64, 64);
    draw_in_scope(&mut s).unwrap();
    assert_eq!(s.transform_depth(), 0);
    assert_eq!(s.commands().len(), 2);
}

#[test]
fn scope_pops_when_a_draw_fails() {
    let mut s = RecordingSurface::new(64, 64).failing_at(1);
    assert!(draw_in_scope(&mut s).is_err());
    assert_eq!(s.transform_depth(), 0);
    assert_eq!(s.commands().len(), 1);
}

#[test]
fn draws_after_scope_use_identity() {
    let mut s = RecordingSurface::new(64, 64);
    draw_in_scope(&mut s).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), Rgba8::WHITE)
        .unwrap();
    match s.commands().last().unwrap() {
        DrawCommand::FillRect { transform, .. } => assert_eq!(*transform, Affine::IDENTITY),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn local_transform_rotates_then_translates() {
    let t = local_transform(Vec2::new(100.0, 50.0), 90.0);
    let p = t * Point::new(10.0, 0.0);
    // +90 degrees in raster space turns +x into +y.
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 60.0).abs() < 1e-9);
}

#[test]
fn nested_scopes_compose() {
    let mut s = RecordingSurface::new(64, 64);
    {
        let mut outer = TransformScope::push(&mut s, Vec2::new(5.0, 0.0), 0.0).unwrap();
        let mut inner = TransformScope::push(&mut *outer, Vec2::new(0.0, 7.0), 0.0).unwrap();
        assert_eq!(inner.transform_depth(), 2);
        inner
            .stroke_line(Point::ZERO, Point::new(1.0, 0.0), 1.0, Rgba8::BLACK)
            .unwrap();
    }
    assert_eq!(s.transform_depth(), 0);
    match &s.commands()[0] {
        DrawCommand::StrokeLine { transform, .. } => {
            assert_eq!(*transform * Point::ZERO, Point::new(5.0, 7.0));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn unbalanced_pop_is_an_error() {
    let mut s = RecordingSurface::new(8, 8);
    assert!(matches!(
        s.pop_transform(),
        Err(crate::foundation::error::FigurineError::Render(_))
    ));
}
