//! Kernel properties over sampled inventories: packing, purity, resource safety.

use arcosphere_kernel::carrier::inventory::InventoryV1;
use arcosphere_kernel::carrier::packed::PackedKeyV1;
use arcosphere_kernel::carrier::polarization::Polarization;
use arcosphere_kernel::operators::apply::{apply, ApplyFailure};
use arcosphere_kernel::operators::catalog::{operation, OperationId};

fn samples() -> Vec<InventoryV1> {
    let mut out = vec![
        InventoryV1::new(),
        InventoryV1::uniform(1),
        InventoryV1::uniform(5),
        InventoryV1::uniform(255),
        InventoryV1::from_counts([0, 1, 2, 3, 4, 5, 6, 7]),
        InventoryV1::from_counts([255, 0, 255, 0, 255, 0, 255, 0]),
    ];
    let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
    for _ in 0..64 {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        out.push(InventoryV1::unpack(PackedKeyV1::from_u64(x)));
    }
    out
}

#[test]
fn pack_unpack_round_trip() {
    for s in samples() {
        assert_eq!(InventoryV1::unpack(s.pack()), s);
        assert_eq!(PackedKeyV1::from_u64(s.pack().as_u64()), s.pack());
    }
}

#[test]
fn distinct_inventories_have_distinct_keys() {
    let base = InventoryV1::uniform(3);
    for pol in Polarization::ALL {
        let bumped = base.with_count(pol, 4);
        assert_ne!(bumped.pack(), base.pack(), "{pol}");
    }
}

#[test]
fn apply_is_pure_and_repeatable() {
    for s in samples() {
        let before = s;
        for id in OperationId::all() {
            let a = apply(&s, id);
            let b = apply(&s, id);
            assert_eq!(a, b, "{id} on {s:?}");
            assert_eq!(s, before);
        }
    }
}

#[test]
fn apply_conserves_total_or_fails() {
    for s in samples() {
        for id in OperationId::all() {
            match apply(&s, id) {
                Ok(next) => assert_eq!(next.total(), s.total(), "{id} on {s:?}"),
                Err(ApplyFailure::InsufficientCount {
                    polarization,
                    required,
                    available,
                }) => {
                    assert!(available < required);
                    assert_eq!(s.count(polarization), available);
                    assert!(operation(id).takes.contains(&polarization));
                }
                Err(ApplyFailure::CountOverflow { polarization }) => {
                    assert!(operation(id).makes.contains(&polarization));
                }
            }
        }
    }
}

#[test]
fn apply_fails_exactly_when_takes_exceed_counts() {
    for s in samples() {
        for id in OperationId::all() {
            let op = operation(id);
            let short = Polarization::ALL.iter().any(|&pol| {
                let need = op.takes.iter().filter(|&&p| p == pol).count();
                usize::from(s.count(pol)) < need
            });
            if short {
                assert!(
                    matches!(apply(&s, id), Err(ApplyFailure::InsufficientCount { .. })),
                    "{id} on {s:?}"
                );
            }
        }
    }
}
