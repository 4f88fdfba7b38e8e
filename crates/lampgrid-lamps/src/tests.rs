use super::*;
use crate::correct::frame_edge_gaps;
use crate::tiling::tiling_bounds;
use lampgrid_geom::Point;

// 50x50 session grid of 20-unit cells, like the default editor session.
fn session_with_block(x0: usize, y0: usize, w: usize, h: usize) -> Grid {
    let mut g = Grid::new(50, 50, 20.0);
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            g.set_selected(x, y, true);
        }
    }
    g
}

fn distinct(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v.dedup();
    v
}

#[test]
fn empty_selection_yields_no_lamps() {
    let g = Grid::new(50, 50, 20.0);
    let spec = LampSpec::default();
    assert!(tile(&g, &spec).is_empty());
    assert!(align(&g, &spec).is_empty());
    assert!(evaluate_and_filter(&g, &spec).is_empty());
    assert!(correct(&g, &spec).is_empty());
}

#[test]
fn ten_by_ten_vertical_end_to_end() {
    let g = session_with_block(20, 20, 10, 10);
    let spec = LampSpec::default();

    let tiled = tile(&g, &spec);
    let xs = distinct(tiled.iter().map(|l| l.light_origin.x));
    let ys = distinct(tiled.iter().map(|l| l.light_origin.y));
    assert_eq!(xs.len(), 10);
    assert_eq!(ys.len(), 7);
    assert_eq!(tiled.len(), 70);
    assert_eq!(tiled[0].light_origin, Point::new(400.0, 400.0));
    assert_eq!(tiled[0].frame_origin, Point::new(409.0, 405.0));

    let aligned = align(&g, &spec);
    let ys = distinct(aligned.iter().map(|l| l.light_origin.y));
    assert_eq!(ys, vec![395.0, 425.0, 455.0, 485.0, 515.0, 545.0, 575.0]);

    let evaluated = evaluate_and_filter(&g, &spec);
    assert_eq!(evaluated.len(), 70);
    for l in &evaluated {
        let y = l.light_origin.y;
        let expect = if y == 395.0 || y == 575.0 { 0.84 } else { 1.0 };
        assert_eq!(l.coverage, Some(expect), "lamp at {:?}", l.light_origin);
    }

    // The frame inset (5 units) equals half the tiling slack, so the edge
    // frames already sit on the area boundary and nothing slides.
    let corrected = correct(&g, &spec);
    assert_eq!(corrected.len(), 70);
    for (c, a) in corrected.iter().zip(&aligned) {
        assert_eq!(c.coverage, None);
        assert!(!c.moved);
        assert_eq!(c.light_origin, a.light_origin);
        assert_eq!(c.frame_origin, a.frame_origin);
    }
}

#[test]
fn ten_by_eleven_edge_rows_slide_inward() {
    let g = session_with_block(20, 20, 10, 11);
    let spec = LampSpec::default();

    let evaluated = evaluate_and_filter(&g, &spec);
    assert_eq!(evaluated.len(), 80);
    let ys = distinct(evaluated.iter().map(|l| l.light_origin.y));
    assert_eq!(ys.first(), Some(&390.0));
    assert_eq!(ys.last(), Some(&600.0));
    for l in &evaluated {
        let edge = l.light_origin.y == 390.0 || l.light_origin.y == 600.0;
        assert_eq!(l.coverage, Some(if edge { 0.68 } else { 1.0 }));
    }

    let corrected = correct(&g, &spec);
    assert_eq!(corrected.len(), 80);
    let building = g.building_mask();
    let ext = spec.extents(g.cell_size);
    let mut moved = 0;
    for (before, after) in evaluated.iter().zip(&corrected) {
        assert_eq!(after.coverage, None);
        let y = before.light_origin.y;
        if y == 390.0 {
            assert!(after.moved);
            assert_eq!(after.light_origin.y, 395.0);
            assert_eq!(after.frame_origin.y, 400.0);
        } else if y == 600.0 {
            assert!(after.moved);
            assert_eq!(after.light_origin.y, 595.0);
            assert_eq!(after.frame_origin.y, 600.0);
        } else {
            assert_eq!(*after, before.with_coverage(None));
        }
        assert_eq!(after.light_origin.x, before.light_origin.x);
        if after.moved {
            moved += 1;
            let gaps_before = frame_edge_gaps(before, &ext, spec.orientation, &building);
            let gaps_after = frame_edge_gaps(after, &ext, spec.orientation, &building);
            assert!(gaps_after.len() < gaps_before.len());
            assert!(gaps_after.is_empty());
        }
    }
    assert_eq!(moved, 20);
}

#[test]
fn horizontal_swaps_axes() {
    let g = session_with_block(20, 20, 10, 10);
    let spec = LampSpec {
        orientation: Orientation::Horizontal,
        ..LampSpec::default()
    };
    let aligned = align(&g, &spec);
    let xs = distinct(aligned.iter().map(|l| l.light_origin.x));
    let ys = distinct(aligned.iter().map(|l| l.light_origin.y));
    assert_eq!(xs.len(), 7);
    assert_eq!(ys.len(), 10);
    assert_eq!(xs[0], 395.0);
    assert_eq!(aligned[0].frame_origin, Point::new(400.0, 409.0));

    let corrected = correct(&g, &spec);
    assert_eq!(corrected.len(), 70);
    assert!(corrected.iter().all(|l| !l.moved));
}

#[test]
fn horizontal_edge_columns_slide_along_x() {
    // 11 columns wide: 8 light columns of 30 overshoot by 20.
    let g = session_with_block(20, 20, 11, 10);
    let spec = LampSpec {
        orientation: Orientation::Horizontal,
        ..LampSpec::default()
    };
    let corrected = correct(&g, &spec);
    assert_eq!(corrected.len(), 80);
    let left: Vec<&Lamp> = corrected.iter().filter(|l| l.light_origin.x == 395.0).collect();
    let right: Vec<&Lamp> = corrected.iter().filter(|l| l.light_origin.x == 595.0).collect();
    assert_eq!(left.len(), 10);
    assert_eq!(right.len(), 10);
    assert!(left.iter().chain(right.iter()).all(|l| l.moved));
    assert_eq!(corrected.iter().filter(|l| l.moved).count(), 20);
}

#[test]
fn aligned_tiling_is_centered_on_building() {
    let g = session_with_block(3, 7, 9, 4);
    let spec = LampSpec::default();
    let ctx = PlacementCtx::new(&g, &spec).unwrap();
    let aligned = align(&g, &spec);
    let t = tiling_bounds(&aligned, &ctx.ext).unwrap();
    let d = t.center() - ctx.bounds.center();
    assert!(d.x.abs() < 1e-9 && d.y.abs() < 1e-9);
}

#[test]
fn full_pipeline_is_idempotent() {
    let mut g = session_with_block(10, 12, 7, 5);
    g.set_selected(17, 14, true);
    g.set_selected(9, 12, true);
    let spec = LampSpec {
        coverage_threshold: 30.0,
        ..LampSpec::default()
    };
    assert_eq!(correct(&g, &spec), correct(&g, &spec));
}

#[test]
fn stages_can_be_overridden() {
    struct NoCorrection;
    impl PlacementStrategy for NoCorrection {
        fn correct(&self, _ctx: &PlacementCtx<'_>, lamps: Vec<Lamp>) -> Vec<Lamp> {
            lamps
        }
    }
    let g = session_with_block(20, 20, 10, 11);
    let spec = LampSpec::default();
    let out = NoCorrection.run(&g, &spec, Stage::Correct);
    assert_eq!(out, evaluate_and_filter(&g, &spec));
    assert!(out.iter().all(|l| !l.moved && l.coverage.is_some()));
}

#[test]
fn threshold_drops_thin_edges() {
    let g = session_with_block(20, 20, 10, 11);
    let spec = LampSpec {
        coverage_threshold: 70.0,
        ..LampSpec::default()
    };
    // Edge rows sit at 0.68 and fall under 70%.
    assert_eq!(evaluate_and_filter(&g, &spec).len(), 60);
    assert!(correct(&g, &spec).iter().all(|l| !l.moved));
}

#[test]
fn spec_validation() {
    assert_eq!(LampSpec::default().validate(), Ok(()));
    let bad = LampSpec {
        frame_height: -1.0,
        ..LampSpec::default()
    };
    assert_eq!(
        bad.validate(),
        Err(SpecError::NonPositive {
            field: "frame_height",
            value: -1.0
        })
    );
    let bad = LampSpec {
        coverage_threshold: 120.0,
        ..LampSpec::default()
    };
    assert_eq!(bad.validate(), Err(SpecError::Threshold(120.0)));
}

#[test]
fn stage_order_and_names() {
    assert!(Stage::Tile < Stage::Align && Stage::Evaluate < Stage::Correct);
    let names: Vec<&str> = Stage::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, vec!["tile", "align", "evaluate", "correct"]);
}
