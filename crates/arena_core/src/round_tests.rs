use super::*;
use crate::matchmaker::ScanOrder;
use crate::rules::ArenaRules;
use proptest::prelude::*;

fn seeded(population: u32) -> BucketStore {
    (0..population).map(Participant::new).collect()
}

fn engine(order: ScanOrder) -> RoundEngine {
    RoundEngine::new(Matchmaker::new(ArenaRules::default(), order))
}

/// Non-empty buckets as (record, size), sorted by record
fn final_counts(store: &BucketStore) -> Vec<(Record, usize)> {
    let mut counts: Vec<_> = store
        .iter()
        .filter(|(_, occupants)| !occupants.is_empty())
        .map(|(record, occupants)| (record, occupants.len()))
        .collect();
    counts.sort();
    counts
}

#[test]
fn test_round_moves_one_up_and_one_across() {
    let mut store = seeded(5);
    let outcome = run_round(&mut store, Record::ZERO).unwrap();

    assert_eq!(outcome.record, Record::ZERO);
    assert_ne!(outcome.winner.id(), outcome.loser.id());
    assert_eq!(outcome.winner.record(), Record::new(1, 0));
    assert_eq!(outcome.loser.record(), Record::new(0, 1));

    assert_eq!(store.size(Record::ZERO), 3);
    assert_eq!(store.size(Record::new(1, 0)), 1);
    assert_eq!(store.size(Record::new(0, 1)), 1);
    assert_eq!(store.total(), 5);
    assert_eq!(store.occupancy(), 5);
}

#[test]
fn test_round_on_short_bucket_leaves_store_untouched() {
    let mut store = seeded(1);
    assert_eq!(
        run_round(&mut store, Record::ZERO),
        Err(ArenaError::EmptyBucket {
            record: Record::ZERO
        })
    );
    assert_eq!(store.size(Record::ZERO), 1);
    assert_eq!(store.total(), 1);
}

#[test]
fn test_two_participants_finish_after_one_round() {
    let mut store = seeded(2);
    let mut engine = engine(ScanOrder::Insertion);

    let first = engine.step(&mut store).unwrap();
    assert!(first.is_some());
    assert_eq!(engine.state(), EngineState::Running);

    assert_eq!(engine.step(&mut store).unwrap(), None);
    assert_eq!(engine.state(), EngineState::Done);
    assert_eq!(engine.rounds_played(), 1);

    assert_eq!(
        final_counts(&store),
        vec![(Record::new(0, 1), 1), (Record::new(1, 0), 1)]
    );
}

#[test]
fn test_single_participant_plays_no_rounds() {
    let mut store = seeded(1);
    let mut engine = engine(ScanOrder::Insertion);
    assert_eq!(engine.run(&mut store).unwrap(), 0);
    assert_eq!(engine.state(), EngineState::Done);
    assert_eq!(final_counts(&store), vec![(Record::ZERO, 1)]);
}

#[test]
fn test_step_after_done_is_a_no_op() {
    let mut store = seeded(4);
    let mut engine = engine(ScanOrder::Insertion);
    engine.run(&mut store).unwrap();
    let rounds = engine.rounds_played();

    assert_eq!(engine.step(&mut store).unwrap(), None);
    assert_eq!(engine.rounds_played(), rounds);
}

#[test]
fn test_known_round_counts() {
    for (population, rounds) in [(3, 1), (4, 5), (8, 15), (16, 40)] {
        let mut store = seeded(population);
        assert_eq!(
            engine(ScanOrder::Insertion).run(&mut store).unwrap(),
            rounds,
            "population {}",
            population
        );
    }
}

#[test]
fn test_sixteen_participants_final_buckets() {
    let mut store = seeded(16);
    engine(ScanOrder::Insertion).run(&mut store).unwrap();
    assert_eq!(
        final_counts(&store),
        vec![
            (Record::new(0, 3), 2),
            (Record::new(1, 3), 3),
            (Record::new(2, 3), 3),
            (Record::new(3, 2), 1),
            (Record::new(3, 3), 2),
            (Record::new(4, 0), 1),
            (Record::new(4, 2), 1),
            (Record::new(4, 3), 1),
            (Record::new(5, 1), 1),
            (Record::new(5, 2), 1),
        ]
    );
}

#[test]
fn test_round_limit_is_enforced() {
    let mut store = seeded(16);
    let mut engine = engine(ScanOrder::Insertion).with_round_limit(10);
    assert_eq!(
        engine.run(&mut store),
        Err(ArenaError::RoundLimitExceeded { limit: 10 })
    );
    assert_eq!(engine.rounds_played(), 10);
    assert_eq!(store.total(), 16);
}

#[test]
fn test_exact_round_limit_still_finishes() {
    let mut store = seeded(16);
    let mut engine = engine(ScanOrder::Insertion).with_round_limit(40);
    assert_eq!(engine.run(&mut store), Ok(40));
}

fn scan_order() -> impl Strategy<Value = ScanOrder> {
    prop_oneof![
        Just(ScanOrder::Insertion),
        Just(ScanOrder::Ascending),
        Just(ScanOrder::Descending),
        any::<u64>().prop_map(|seed| ScanOrder::Shuffled { seed }),
    ]
}

fn live_record() -> impl Strategy<Value = Record> {
    (0u16..12, 0u16..3).prop_map(|(wins, losses)| Record::new(wins, losses))
}

proptest! {
    #[test]
    fn prop_every_round_conserves_and_splits(population in 2u32..200, order in scan_order()) {
        let mut store = seeded(population);
        let mut engine = engine(order);

        loop {
            let before = store.clone();
            let Some(outcome) = engine.step(&mut store).unwrap() else {
                break;
            };
            let record = outcome.record;
            prop_assert_eq!(store.total(), before.total());
            prop_assert_eq!(store.occupancy(), store.total());
            prop_assert_eq!(store.size(record), before.size(record) - 2);
            prop_assert_eq!(store.size(record.win()), before.size(record.win()) + 1);
            prop_assert_eq!(store.size(record.lose()), before.size(record.lose()) + 1);
        }
    }

    #[test]
    fn prop_terminates_within_bound(population in 2u32..500, order in scan_order()) {
        let mut store = seeded(population);
        let limit = population as u64 * 15;
        let mut engine = engine(order).with_round_limit(limit);
        let rounds = engine.run(&mut store).unwrap();
        prop_assert!(rounds <= limit);

        let rules = ArenaRules::default();
        for (record, occupants) in store.iter() {
            prop_assert!(
                occupants.len() < 2 || record.is_terminal(&rules),
                "bucket {} left with {} occupants",
                record,
                occupants.len()
            );
        }
    }

    #[test]
    fn prop_scan_order_does_not_change_outcome(population in 1u32..300, order in scan_order()) {
        let mut reference = seeded(population);
        let reference_rounds = engine(ScanOrder::Insertion).run(&mut reference).unwrap();

        let mut store = seeded(population);
        let rounds = engine(order).run(&mut store).unwrap();

        prop_assert_eq!(rounds, reference_rounds);
        prop_assert_eq!(final_counts(&store), final_counts(&reference));
    }

    #[test]
    fn prop_insertion_permutation_does_not_change_outcome(
        records in prop::collection::vec(live_record(), 1..120)
            .prop_flat_map(|records| {
                let shuffled = Just(records.clone()).prop_shuffle();
                (Just(records), shuffled)
            }),
        order in scan_order(),
    ) {
        let (original, permuted) = records;

        let mut reference: BucketStore = original
            .iter()
            .enumerate()
            .map(|(id, &record)| Participant::with_record(id as u32, record))
            .collect();
        engine(ScanOrder::Insertion).run(&mut reference).unwrap();

        let mut store: BucketStore = permuted
            .iter()
            .enumerate()
            .map(|(id, &record)| Participant::with_record(id as u32, record))
            .collect();
        engine(order).run(&mut store).unwrap();

        prop_assert_eq!(final_counts(&store), final_counts(&reference));
    }
}
