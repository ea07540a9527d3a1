//! Integration tests for the public API.
//!
//! These walk through whole scenarios: several views over one backing array,
//! external mutation, and the point at which each view observes it.

use rangeview_core::{
    Backing, BoundedView, DynamicRangeView, FromFirst, RefreshPolicy, ViewError, after_first,
    from_first,
};
use smallvec::SmallVec;

#[test]
fn test_full_view_push_grows_backing() {
    let backing = Backing::new(vec![1, 2, 3, 4, 5, 6]);
    let mut view = DynamicRangeView::new(&backing).expect("view over valid backing");
    assert_eq!(view.len().unwrap(), backing.len().unwrap());

    let old_len = view.len().unwrap();
    view.push(42).unwrap();
    assert_eq!(view.len().unwrap(), old_len + 1);
    assert_eq!(backing.to_vec().unwrap().last(), Some(&42));
}

#[test]
fn test_fixed_view_mirrors_backing_for_every_range() {
    let backing = Backing::new(vec![10, 20, 30, 40, 50]);
    let all = backing.to_vec().unwrap();
    for begin in 0..=all.len() {
        for end in begin..=all.len() {
            let view = BoundedView::new(&backing, begin, end).unwrap();
            assert_eq!(view.len(), end - begin);
            for i in 0..view.len() {
                assert_eq!(*view.get(i).unwrap(), all[begin + i]);
            }
        }
    }
}

#[test]
fn test_sentinel_scenario() {
    let backing = Backing::new(vec![1, 2, -1, 4, 5, 6]);
    let tail = DynamicRangeView::with_strategy(
        &backing,
        after_first(|x: &i32| *x == -1),
        RefreshPolicy::default(),
    )
    .unwrap();
    assert_eq!(tail.to_vec().unwrap(), vec![4, 5, 6]);
    assert_eq!(tail.len().unwrap(), 3);

    backing.push(7).unwrap();
    tail.refresh().unwrap();
    assert_eq!(tail.to_vec().unwrap(), vec![4, 5, 6, 7]);
    assert_eq!(tail.len().unwrap(), 4);
}

#[test]
fn test_mixed_views_scenario() {
    let backing = Backing::new(vec![1, 2, -1, 4, 5, 6]);

    let head = BoundedView::new(&backing, 0, 2).unwrap();
    let whole = DynamicRangeView::new(&backing).unwrap();
    let tail = DynamicRangeView::with_strategy(
        &backing,
        after_first(|x: &i32| *x == -1),
        RefreshPolicy::default(),
    )
    .unwrap();
    let middle = BoundedView::new(&backing, 1, 5).unwrap();

    let mut grown = head;
    grown.push(3).unwrap();

    assert_eq!(whole.to_vec().unwrap(), vec![1, 2, 3, -1, 4, 5, 6]);
    assert_eq!(whole.len().unwrap(), 7);
    assert_eq!(whole.as_bounded().len(), 7);

    assert_eq!(grown.to_vec().unwrap(), vec![1, 2, 3]);
    assert_eq!(head.to_vec().unwrap(), vec![1, 2]);

    // The strategy view re-finds its anchor; the fixed one just shifts.
    assert_eq!(tail.len().unwrap(), 3);
    assert_eq!(tail.to_vec().unwrap(), vec![4, 5, 6]);
    assert_eq!(middle.to_vec().unwrap(), vec![2, 3, -1, 4]);
}

#[test]
fn test_fixed_push_and_whole_refresh() {
    let backing = Backing::new(vec![1, 2, 3, 4, 5, 6]);
    let whole = DynamicRangeView::with_strategy(
        &backing,
        rangeview_core::WholeArray,
        RefreshPolicy::NEVER,
    )
    .unwrap();
    let mut v2 = BoundedView::new(&backing, 2, 3).unwrap();
    assert_eq!(v2.to_vec().unwrap(), vec![3]);

    v2.push(30).unwrap();
    assert_eq!(backing.to_vec().unwrap(), vec![1, 2, 3, 30, 4, 5, 6]);
    assert_eq!(v2.to_vec().unwrap(), vec![3, 30]);
    assert_eq!(v2.len(), 2);

    assert_eq!(whole.len().unwrap(), 6);
    whole.refresh().unwrap();
    assert_eq!(whole.len().unwrap(), 7);
}

#[test]
fn test_pop_on_empty_view_reports_out_of_range() {
    let backing = Backing::new(vec![1, 2, 3]);
    let mut empty = BoundedView::new(&backing, 1, 1).unwrap();
    assert_eq!(
        empty.pop(),
        Err(ViewError::OutOfRange { index: 0, len: 0 })
    );
    assert_eq!(empty.bounds(), 1..1);
    assert_eq!(backing.to_vec().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_views_in_a_container() {
    let backings: Vec<Backing<Vec<i32>>> =
        (0..5).map(|_| Backing::new(vec![1, 2, 3, 4, 5, 6])).collect();
    let views: Vec<DynamicRangeView<'_, Vec<i32>>> = backings
        .iter()
        .map(|backing| DynamicRangeView::new(backing).unwrap())
        .collect();

    backings[0].push(-1).unwrap();

    let sizes: Vec<usize> = views.iter().map(|view| view.len().unwrap()).collect();
    assert_eq!(sizes, vec![7, 6, 6, 6, 6]);
}

#[test]
fn test_from_first_on_smallvec() {
    let backing: Backing<SmallVec<[char; 16]>> = Backing::new("key=value".chars().collect());
    let value: DynamicRangeView<'_, _, FromFirst<_>> = DynamicRangeView::with_strategy(
        &backing,
        from_first(|c: &char| *c == '='),
        RefreshPolicy::default(),
    )
    .unwrap();
    assert_eq!(value.to_vec().unwrap().into_iter().collect::<String>(), "=value");

    backing.borrow_mut().unwrap().retain(|c| *c != '=');
    assert_eq!(value.len().unwrap(), 0);
}
