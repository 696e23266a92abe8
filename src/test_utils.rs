//! Useful random generators.
use proptest::prelude::*;

/// Small alphabet, so patterns actually turn up in the sequences.
pub fn arb_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
	proptest::collection::vec(0u8..4, 0..=max_len)
}

pub fn arb_pattern(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
	proptest::collection::vec(0u8..4, 1..=max_len)
}

pub fn arb_text(max_len: usize) -> impl Strategy<Value = String> {
	proptest::collection::vec(prop::sample::select(vec!['a', 'b', ' ', 'é']), 0..=max_len)
		.prop_map(|chars| chars.into_iter().collect())
}

pub fn arb_chunks(
	outer_max: usize,
	inner_max: usize,
) -> impl Strategy<Value = Vec<Vec<u8>>> {
	proptest::collection::vec(
		proptest::collection::vec(any::<u8>(), 0..=inner_max),
		0..=outer_max,
	)
}
