//! Per-request user labels.
//!
//! A label is drawn fresh on every request from `[1, user_id]` and encoded as
//! a short word sequence, so labels cannot be linked across requests while
//! every observation for one user in one response still shares a single
//! recognizable label. The randomness source is supplied by the caller so
//! tests can seed it.

use rand::Rng;

const WORDS: [&str; 64] = [
    "acorn", "amber", "aspen", "badger", "basil", "birch", "bramble", "brook",
    "cedar", "cinder", "clover", "coral", "crane", "cricket", "dahlia", "dew",
    "ember", "fable", "fennel", "fern", "finch", "flint", "gale", "garnet",
    "ginger", "grove", "hazel", "heron", "holly", "ivory", "jasper", "juniper",
    "kestrel", "lark", "laurel", "lichen", "linden", "lotus", "maple", "marsh",
    "meadow", "mica", "moss", "myrtle", "nettle", "oriole", "otter", "pebble",
    "pine", "plover", "quartz", "reed", "rowan", "sage", "sorrel", "sparrow",
    "spruce", "tansy", "thistle", "umber", "vetch", "willow", "wren", "yarrow",
];

/// Draw a display label for `user_id` from the request's randomness source.
pub fn label<R: Rng>(rng: &mut R, user_id: i64) -> String {
    let ceiling = user_id.max(1) as u64;
    encode(rng.gen_range(1..=ceiling))
}

fn encode(mut value: u64) -> String {
    let base = WORDS.len() as u64;
    let mut parts = Vec::new();
    loop {
        parts.push(WORDS[(value % base) as usize]);
        value /= base;
        if value == 0 {
            break;
        }
    }
    parts.reverse();
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn encode_is_positional() {
        assert_eq!(encode(1), "amber");
        assert_eq!(encode(63), "yarrow");
        // 64 = [1, 0] in base 64
        assert_eq!(encode(64), "amber-acorn");
        assert_eq!(encode(64 * 64 + 2), "amber-acorn-aspen");
    }

    #[test]
    fn seeded_rng_gives_a_reproducible_label() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(label(&mut a, 5_000), label(&mut b, 5_000));
    }

    #[test]
    fn distinct_seeds_relabel() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        // With user ids this large a collision would be remarkable.
        assert_ne!(label(&mut a, i64::MAX), label(&mut b, i64::MAX));
    }

    #[test]
    fn user_one_always_maps_to_the_first_word() {
        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(label(&mut rng, 1), "amber");
    }
}
