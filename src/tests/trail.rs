use super::{FocusEvent, FocusTrail};
use crate::candidate::{Candidate, Focus};
use crate::view::View;

fn titles() -> Vec<String> {
    vec!["One".to_string(), "Two".to_string(), "Three".to_string()]
}

#[test]
fn test_single_focus_records_one_section() {
    let mut trail = FocusTrail::default();
    let focus = Focus::Single(Candidate {
        index: 1,
        intersection: None,
        section: 1_usize,
    });

    trail.record(&focus, View { top: 140, bottom: 260 }, &titles());

    assert_eq!(trail.events.len(), 1);
    assert_eq!(trail.events[0].sections, vec![1]);
    assert_eq!(trail.events[0].title, "Two");
    assert_eq!(trail.events[0].view_top, 140);
    assert_eq!(trail.events[0].view_bottom, 260);
}

#[test]
fn test_multi_focus_records_every_section() {
    let mut trail = FocusTrail::default();
    let focus = Focus::Multiple(vec![
        Candidate {
            index: 1,
            intersection: None,
            section: 1_usize,
        },
        Candidate {
            index: 2,
            intersection: None,
            section: 2_usize,
        },
    ]);

    trail.record(&focus, View { top: 0, bottom: 100 }, &titles());

    assert_eq!(trail.events[0].sections, vec![1, 2]);
    assert_eq!(trail.events[0].title, "Two", "titled after the first");
}

#[test]
fn test_unknown_titles_record_as_untitled() {
    let mut trail = FocusTrail::default();
    let focus = Focus::Single(Candidate {
        index: 9,
        intersection: None,
        section: 9_usize,
    });

    trail.record(&focus, View { top: 0, bottom: 100 }, &titles());

    assert_eq!(trail.events[0].title, "");
}

#[test]
fn test_trail_round_trips_through_json() {
    let trail = FocusTrail {
        events: vec![FocusEvent {
            sections: vec![0],
            title: "One".to_string(),
            view_top: 0,
            view_bottom: 120,
        }],
    };

    let json = serde_json::to_string(&trail).unwrap();
    let back: FocusTrail = serde_json::from_str(&json).unwrap();

    assert_eq!(back.events.len(), 1);
    assert_eq!(back.events[0].sections, vec![0]);
    assert_eq!(back.events[0].title, "One");
}
