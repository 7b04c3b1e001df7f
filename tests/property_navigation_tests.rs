mod common;

use common::full_deck;
use marketing_deck::charts::ChartKind;
use marketing_deck::deck::TOTAL_PAGES;
use proptest::prelude::*;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
enum Op {
    Advance,
    Retreat,
    JumpTo(usize),
    Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Advance),
        Just(Op::Retreat),
        (0usize..TOTAL_PAGES + 5).prop_map(Op::JumpTo),
        (0u64..300).prop_map(Op::Tick),
    ]
}

proptest! {
    #[test]
    fn index_stays_in_range_with_one_active_page(ops in prop::collection::vec(op(), 0..64)) {
        let mut now = Instant::now();
        let mut nav = full_deck();

        for op in ops {
            let before = nav.current_page();
            match op {
                Op::Advance => {
                    let moved = nav.advance(now);
                    prop_assert_eq!(moved, before + 1 < TOTAL_PAGES);
                }
                Op::Retreat => {
                    let moved = nav.retreat(now);
                    prop_assert_eq!(moved, before > 0);
                }
                Op::JumpTo(target) => {
                    let moved = nav.jump_to(target, now);
                    prop_assert_eq!(moved, target < TOTAL_PAGES);
                    if !moved {
                        prop_assert_eq!(nav.current_page(), before);
                    }
                }
                Op::Tick(ms) => {
                    now += Duration::from_millis(ms);
                    nav.run_due(now);
                }
            }

            let current = nav.current_page();
            prop_assert!(current < TOTAL_PAGES);
            prop_assert_eq!(nav.view().active_pages(), vec![current]);

            let affordances = nav.view().affordances.clone().expect("affordances applied");
            prop_assert_eq!(affordances.previous_enabled, current != 0);
            prop_assert_eq!(affordances.next_enabled, current != TOTAL_PAGES - 1);
            prop_assert_eq!(affordances.position_label, format!("Page {} of {}", current + 1, TOTAL_PAGES));
        }
    }

    #[test]
    fn never_two_charts_on_one_surface(ops in prop::collection::vec(op(), 0..64)) {
        let mut now = Instant::now();
        let mut nav = full_deck();

        for op in ops {
            match op {
                Op::Advance => { nav.advance(now); }
                Op::Retreat => { nav.retreat(now); }
                Op::JumpTo(target) => { nav.jump_to(target, now); }
                Op::Tick(ms) => {
                    now += Duration::from_millis(ms);
                    nav.run_due(now);
                }
            }
        }
        nav.run_due(now + Duration::from_secs(1));

        let backend = nav.provisioner().backend();
        prop_assert!(backend.max_live_per_surface <= 1);
        prop_assert!(nav.scheduler().is_empty());
        for kind in ChartKind::ALL {
            let surface = kind.surface();
            let expected = usize::from(backend.constructed(surface) > 0);
            prop_assert_eq!(backend.live(surface), expected);
            prop_assert_eq!(nav.provisioner().chart(surface).is_some(), expected == 1);
        }
    }
}
