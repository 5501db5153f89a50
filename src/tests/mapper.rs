use super::ActiveIndexMapper;
use crate::candidate::{Candidate, Focus};
use crate::view::View;
use std::cell::RefCell;
use std::rc::Rc;

fn single(index: usize) -> Focus<usize> {
    Focus::Single(Candidate {
        index,
        intersection: None,
        section: index,
    })
}

#[test]
fn test_sink_fires_only_on_real_changes() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut mapper = ActiveIndexMapper::new(3, move |item| sink.borrow_mut().push(item));

    mapper.handle(&single(1));
    mapper.handle(&single(1));
    mapper.handle(&single(2));

    assert_eq!(*calls.borrow(), vec![Some(1), Some(2)]);
    assert_eq!(mapper.current(), Some(2));
}

#[test]
fn test_out_of_range_sections_map_to_no_active_item() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut mapper = ActiveIndexMapper::new(2, move |item| sink.borrow_mut().push(item));

    mapper.handle(&single(5));

    assert_eq!(*calls.borrow(), vec![None]);
    assert_eq!(mapper.current(), Some(5), "the section is still tracked");
}

#[test]
fn test_multi_focus_activates_the_first_candidate() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut mapper = ActiveIndexMapper::new(3, move |item| sink.borrow_mut().push(item));

    let focus = Focus::Multiple(vec![
        Candidate {
            index: 1,
            intersection: None,
            section: 1,
        },
        Candidate {
            index: 2,
            intersection: None,
            section: 2,
        },
    ]);
    mapper.handle(&focus);

    assert_eq!(*calls.borrow(), vec![Some(1)]);
}

#[test]
fn test_empty_multi_focus_changes_nothing() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut mapper = ActiveIndexMapper::new(3, move |item| sink.borrow_mut().push(item));

    mapper.handle(&Focus::<usize>::Multiple(Vec::new()));

    assert!(calls.borrow().is_empty());
    assert_eq!(mapper.current(), None);
}

#[test]
fn test_into_callback_keeps_tracking() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mapper = ActiveIndexMapper::new(3, move |item| sink.borrow_mut().push(item));
    let mut callback = mapper.into_callback();

    let view = View { top: 0, bottom: 100 };
    callback(&single(0), view);
    callback(&single(0), view);
    callback(&single(2), view);

    assert_eq!(*calls.borrow(), vec![Some(0), Some(2)]);
}
