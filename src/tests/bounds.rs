use super::{resolve_bounds, SectionBounds};
use crate::error::WatchError;
use crate::geometry::{ScrollMetrics, Scroller, StaticGeometry};

fn metrics() -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: 0,
        visible_height: 120,
        full_height: 300,
    }
}

/// Container with sections at the given (top, height) pairs, in that order.
fn geometry(extents: &[(i64, i64)]) -> (StaticGeometry, usize, Vec<usize>) {
    let mut geo = StaticGeometry::default();
    let container = geo.push_scroller(None, 0, 300, metrics());
    let sections = extents
        .iter()
        .map(|&(top, height)| geo.push_node(Some(container), top, height))
        .collect();
    (geo, container, sections)
}

#[test]
fn test_bounds_measure_top_and_bottom() {
    let (geo, container, sections) = geometry(&[(0, 100), (100, 150), (250, 50)]);

    let bounds = resolve_bounds(&geo, &sections, Scroller::Elem(container), false).unwrap();

    assert_eq!(
        bounds,
        vec![
            SectionBounds { index: 0, top: 0, bottom: 100 },
            SectionBounds { index: 1, top: 100, bottom: 250 },
            SectionBounds { index: 2, top: 250, bottom: 300 },
        ]
    );
}

#[test]
fn test_bounds_sorted_by_top_keep_input_identity() {
    // Sections supplied out of document order: indexes refer back to the
    // caller's order, sorting only affects position in the result.
    let (geo, container, sections) = geometry(&[(250, 50), (0, 100), (100, 150)]);

    let bounds = resolve_bounds(&geo, &sections, Scroller::Elem(container), false).unwrap();

    assert_eq!(bounds[0].index, 1);
    assert_eq!(bounds[1].index, 2);
    assert_eq!(bounds[2].index, 0);
    assert!(bounds.windows(2).all(|w| w[0].top <= w[1].top));
}

#[test]
fn test_equal_tops_preserve_relative_input_order() {
    let (geo, container, sections) = geometry(&[(50, 10), (50, 20), (50, 30)]);

    let bounds = resolve_bounds(&geo, &sections, Scroller::Elem(container), false).unwrap();

    let indexes: Vec<usize> = bounds.iter().map(|b| b.index).collect();
    assert_eq!(indexes, vec![0, 1, 2], "stable sort must not reorder ties");
}

#[test]
fn test_resolving_twice_is_stable() {
    let (geo, container, sections) = geometry(&[(100, 150), (0, 100), (250, 50)]);

    let first = resolve_bounds(&geo, &sections, Scroller::Elem(container), false).unwrap();
    let second = resolve_bounds(&geo, &sections, Scroller::Elem(container), false).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_multi_hop_offsets_accumulate() {
    let mut geo = StaticGeometry::default();
    let container = geo.push_scroller(None, 0, 300, metrics());
    let wrapper = geo.push_node(Some(container), 40, 200);
    let section = geo.push_node(Some(wrapper), 10, 60);

    let bounds = resolve_bounds(&geo, &[section], Scroller::Elem(container), false).unwrap();

    assert_eq!(bounds[0].top, 50);
    assert_eq!(bounds[0].bottom, 110);
}

#[test]
fn test_clamp_closes_gaps_between_sections() {
    let (geo, container, sections) = geometry(&[(0, 50), (100, 100), (250, 50)]);

    let bounds = resolve_bounds(&geo, &sections, Scroller::Elem(container), true).unwrap();

    assert_eq!(bounds[0].bottom, 99, "clamped to one above the next top");
    assert_eq!(bounds[1].bottom, 249);
    assert_eq!(bounds[2].bottom, 300, "last keeps its measured bottom");
}

#[test]
fn test_zero_height_section_fails_fast() {
    let (geo, container, sections) = geometry(&[(0, 100), (100, 0)]);

    let result = resolve_bounds(&geo, &sections, Scroller::Elem(container), false);
    assert!(matches!(
        result,
        Err(WatchError::DegenerateSection { index: 1 })
    ));
}
