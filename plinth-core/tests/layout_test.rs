use plinth_core::geometry::{Point, Rect, Size};
use plinth_core::layout::{Alignment, HorizontalAlignment, Property, Rule, VerticalAlignment};

fn sizes(rects: &[Rect]) -> Vec<Size> {
    rects.iter().map(|r| r.size).collect()
}

#[test]
fn edge_alignment_preserves_sizes() {
    let mut rects = vec![Rect::from_xywh(10, 5, 30, 20), Rect::from_xywh(0, 40, 50, 10)];
    let before = sizes(&rects);

    Rule::AlignTops(7).apply(&mut rects);
    assert_eq!(rects[0].top(), 7);
    assert_eq!(rects[1].top(), 7);

    Rule::AlignLefts(3).apply(&mut rects);
    assert_eq!(rects[0].left(), 3);
    assert_eq!(rects[1].left(), 3);

    Rule::AlignBottoms(50).apply(&mut rects);
    assert_eq!(rects[0].bottom(), 50);
    assert_eq!(rects[1].bottom(), 50);
    assert_eq!(rects[0].top(), 30);
    assert_eq!(rects[1].top(), 40);

    Rule::AlignRights(100).apply(&mut rects);
    assert_eq!(rects[0].right(), 100);
    assert_eq!(rects[1].right(), 100);

    assert_eq!(sizes(&rects), before);
}

#[test]
fn centering_uses_integer_halves() {
    let mut rects = vec![Rect::from_xywh(0, 0, 30, 10), Rect::from_xywh(0, 0, 51, 11)];
    Rule::AlignCenterX(50).apply(&mut rects);
    Rule::AlignCenterY(50).apply(&mut rects);
    assert_eq!(rects[0].origin, Point::new(35, 45));
    assert_eq!(rects[1].origin, Point::new(25, 45));
}

#[test]
fn dimension_alignment_clamps_at_zero() {
    let mut rects = vec![Rect::from_xywh(4, 4, 30, 20)];
    Rule::AlignWidths(-5).apply(&mut rects);
    Rule::AlignHeights(-5).apply(&mut rects);
    assert_eq!(rects[0].size, Size::ZERO);
    assert_eq!(rects[0].origin, Point::new(4, 4));
}

#[test]
fn horizontal_distribution_spaces_in_order() {
    let mut rects = vec![
        Rect::from_xywh(90, 2, 30, 10),
        Rect::from_xywh(0, 4, 50, 10),
        Rect::from_xywh(7, 6, 20, 10),
    ];
    Rule::DistributeHorizontally { left: 10, spacing: 4 }.apply(&mut rects);

    assert_eq!(rects[0].left(), 10);
    assert_eq!(rects[1].left(), 44);
    assert_eq!(rects[2].left(), 98);
    // Gaps are exactly the spacing; tops are untouched.
    assert_eq!(rects[1].left() - rects[0].right(), 4);
    assert_eq!(rects[2].left() - rects[1].right(), 4);
    assert_eq!(rects.iter().map(Rect::top).collect::<Vec<_>>(), vec![2, 4, 6]);

    // Span equals the sum of widths plus one gap per interior boundary.
    assert_eq!(Property::FullWidth.measure(&rects), 30 + 50 + 20 + 2 * 4);
}

#[test]
fn vertical_distribution_spaces_in_order() {
    let mut rects = vec![Rect::from_xywh(1, 99, 10, 10), Rect::from_xywh(2, 0, 10, 20)];
    Rule::DistributeVertically { top: 0, spacing: 5 }.apply(&mut rects);

    assert_eq!(rects[0].top(), 0);
    assert_eq!(rects[1].top(), 15);
    assert_eq!(rects.iter().map(Rect::left).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(Property::FullHeight.measure(&rects), 10 + 20 + 5);
}

#[test]
fn distribution_keeps_zero_sized_entries_in_sequence() {
    let mut rects = vec![
        Rect::from_xywh(0, 0, 10, 5),
        Rect::from_xywh(0, 0, 0, 5),
        Rect::from_xywh(0, 0, 10, 5),
    ];
    Rule::DistributeHorizontally { left: 0, spacing: 3 }.apply(&mut rects);
    assert_eq!(rects.iter().map(Rect::left).collect::<Vec<_>>(), vec![0, 13, 16]);
}

#[test]
fn empty_sequence_is_a_no_op() {
    let mut rects: Vec<Rect> = Vec::new();
    Rule::DistributeHorizontally { left: 10, spacing: 4 }.apply(&mut rects);
    Rule::AlignTops(7).apply(&mut rects);
    assert!(rects.is_empty());

    assert_eq!(Property::MaxWidth.measure(&rects), 0);
    assert_eq!(Property::MaxHeight.measure(&rects), 0);
    assert_eq!(Property::FullWidth.measure(&rects), 0);
    assert_eq!(Property::FullHeight.measure(&rects), 0);
}

#[test]
fn max_properties_pick_the_largest_child() {
    let rects = vec![Rect::from_xywh(0, 0, 30, 25), Rect::from_xywh(5, 5, 50, 20)];
    assert_eq!(Property::MaxWidth.measure(&rects), 50);
    assert_eq!(Property::MaxHeight.measure(&rects), 25);
}

#[test]
fn full_span_is_independent_of_order_and_origin() {
    let rects = vec![Rect::from_xywh(40, 30, 10, 5), Rect::from_xywh(10, 0, 10, 5)];
    assert_eq!(Property::FullWidth.measure(&rects), 40);
    assert_eq!(Property::FullHeight.measure(&rects), 35);
}

#[test]
fn stretch_alignment_fills_the_reference_rect() {
    let source = Rect::from_xywh(5, 5, 90, 40);
    let mut rects = vec![Rect::from_xywh(0, 0, 30, 20), Rect::from_xywh(70, 9, 50, 10)];
    Alignment::stretch().apply(&mut rects, source);
    assert_eq!(rects, vec![source, source]);
}

#[test]
fn non_stretch_alignment_preserves_sizes() {
    let source = Rect::from_xywh(5, 5, 90, 40);
    let mut rects = vec![Rect::from_xywh(0, 0, 20, 10), Rect::from_xywh(0, 0, 20, 30)];
    let before = sizes(&rects);

    Alignment::new(HorizontalAlignment::Left, VerticalAlignment::Bottom)
        .apply(&mut rects, source);
    assert_eq!(sizes(&rects), before);
    assert_eq!(rects[0].left(), 5);
    assert_eq!(rects[1].left(), 5);
    assert_eq!(rects[0].bottom(), 45);
    assert_eq!(rects[1].bottom(), 45);

    Alignment::new(HorizontalAlignment::Right, VerticalAlignment::Center)
        .apply(&mut rects, source);
    assert_eq!(rects[0].right(), 95);
    assert_eq!(rects[1].right(), 95);
    assert_eq!(rects[0].center_y(), 25);
    assert_eq!(rects[1].center_y(), 25);
}
