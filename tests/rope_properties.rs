//! Property-based tests for the rope's structural operations.
//!
//! Uses proptest to verify the invariants that must hold across all valid inputs,
//! over both single-leaf ropes and ropes assembled from many concatenated pieces.

use persistent_rope::Rope;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary Unicode strings (proptest default char set).
fn text() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

/// Generate a string together with a pattern of piece sizes used to assemble a
/// multi-branch rope holding the same text.
fn chunked_text() -> impl Strategy<Value = (String, Vec<usize>)> {
    (text(), prop::collection::vec(1usize..=5, 1..8))
}

/// Build a rope from `text` by concatenating pieces of the given sizes, so the tree
/// has many leaves and branches rather than being a single leaf.
fn build_chunked(text: &str, sizes: &[usize]) -> Rope {
    let points: Vec<char> = text.chars().collect();
    let mut rope = Rope::default();
    let mut pos = 0;
    let mut turn = 0;

    while pos < points.len() {
        let size = sizes[turn % sizes.len()];
        let end = (pos + size).min(points.len());
        let piece: String = points[pos..end].iter().collect();

        rope = rope.concat(&Rope::new(&piece));
        pos = end;
        turn += 1;
    }

    rope
}

// ============================================================================
// Construction
// ============================================================================

proptest! {
    /// A new rope holds exactly the code points of its source string.
    #[test]
    fn construction_round_trips(s in text()) {
        let rope = Rope::new(&s);

        prop_assert_eq!(rope.len(), s.chars().count());
        prop_assert_eq!(rope.to_text(), s);
    }

    /// Assembling the same text from pieces changes the shape, not the content.
    #[test]
    fn chunked_construction_preserves_text((s, sizes) in chunked_text()) {
        let rope = build_chunked(&s, &sizes);

        prop_assert_eq!(rope.len(), s.chars().count());
        prop_assert_eq!(rope.to_text(), s.clone());
        prop_assert_eq!(rope, Rope::new(&s));
    }
}

// ============================================================================
// Concat and split
// ============================================================================

proptest! {
    /// Concatenation is associative on the text it produces.
    #[test]
    fn concat_is_associative_on_text(a in text(), b in text(), c in text()) {
        let (ra, rb, rc) = (Rope::new(&a), Rope::new(&b), Rope::new(&c));

        prop_assert_eq!(
            ra.concat(&rb).concat(&rc).to_text(),
            ra.concat(&rb.concat(&rc)).to_text()
        );
    }

    /// Concatenation never modifies either operand.
    #[test]
    fn concat_leaves_operands_untouched(a in text(), b in text()) {
        let ra = Rope::new(&a);
        let rb = Rope::new(&b);
        let joined = ra.concat(&rb);

        prop_assert_eq!(joined.len(), ra.len() + rb.len());
        prop_assert_eq!(ra.to_text(), a);
        prop_assert_eq!(rb.to_text(), b);
    }

    /// Splitting at any position and concatenating the halves reconstructs the text.
    #[test]
    fn split_concat_round_trips((s, sizes) in chunked_text(), at in any::<prop::sample::Index>()) {
        let rope = build_chunked(&s, &sizes);
        let split_at = at.index(rope.len() + 1);
        let (near, far) = rope.split(split_at);

        prop_assert_eq!(near.len(), split_at);
        prop_assert_eq!(far.len(), rope.len() - split_at);
        prop_assert_eq!(near.concat(&far).to_text(), s);
    }

    /// A split never modifies the rope it was asked to split.
    #[test]
    fn split_leaves_the_original_untouched((s, sizes) in chunked_text(), at in any::<prop::sample::Index>()) {
        let rope = build_chunked(&s, &sizes);
        let split_at = at.index(rope.len() + 1);
        let _ = rope.split(split_at);

        prop_assert_eq!(rope.to_text(), s);
    }
}

// ============================================================================
// Reading
// ============================================================================

proptest! {
    /// Indexing agrees with a single-element report at every position.
    #[test]
    fn index_matches_single_report((s, sizes) in chunked_text(), at in any::<prop::sample::Index>()) {
        let rope = build_chunked(&s, &sizes);
        prop_assume!(!rope.is_empty());

        let idx = at.index(rope.len()) + 1;
        let single = rope.report(idx, 1).unwrap();

        prop_assert_eq!(rope.index(idx).unwrap(), single[0]);
    }

    /// Reporting the whole rope is the definition of the text conversion.
    #[test]
    fn full_report_equals_to_text((s, sizes) in chunked_text()) {
        let rope = build_chunked(&s, &sizes);
        let full: String = rope.report(1, rope.len()).unwrap().into_iter().collect();

        prop_assert_eq!(full, rope.to_text());
    }

    /// Substr agrees with slicing the source string by code point.
    #[test]
    fn substr_matches_string_slice(
        (s, sizes) in chunked_text(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>()
    ) {
        let rope = build_chunked(&s, &sizes);
        prop_assume!(!rope.is_empty());

        let start = a.index(rope.len()) + 1;
        let count = b.index(rope.len() - start + 2);
        let expected: String = s.chars().skip(start - 1).take(count).collect();

        prop_assert_eq!(rope.substr(start, count).unwrap().to_text(), expected);
    }

    /// Delete agrees with splicing the source string by code point.
    #[test]
    fn delete_matches_string_splice(
        (s, sizes) in chunked_text(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>()
    ) {
        let rope = build_chunked(&s, &sizes);
        prop_assume!(!rope.is_empty());

        let start = a.index(rope.len()) + 1;
        let count = b.index(rope.len() - start + 2);
        let expected: String = s.chars().take(start - 1)
            .chain(s.chars().skip(start - 1 + count))
            .collect();

        prop_assert_eq!(rope.delete(start, count).unwrap().to_text(), expected);
    }
}

// ============================================================================
// Derived edits
// ============================================================================

proptest! {
    /// Inserting a string and then deleting the same span restores the text.
    #[test]
    fn insert_then_delete_is_identity(
        (s, sizes) in chunked_text(),
        ins in text(),
        at in any::<prop::sample::Index>()
    ) {
        let rope = build_chunked(&s, &sizes);
        let pos = at.index(rope.len() + 1);

        let inserted = rope.insert(pos, &ins).unwrap();
        let restored = inserted.delete(pos + 1, ins.chars().count()).unwrap();

        prop_assert_eq!(restored.to_text(), rope.to_text());
    }

    /// Inserting never modifies the rope it was derived from.
    #[test]
    fn insert_leaves_the_original_untouched(
        (s, sizes) in chunked_text(),
        ins in text(),
        at in any::<prop::sample::Index>()
    ) {
        let rope = build_chunked(&s, &sizes);
        let pos = at.index(rope.len() + 1);
        let _ = rope.insert(pos, &ins).unwrap();

        prop_assert_eq!(rope.to_text(), s);
    }
}
