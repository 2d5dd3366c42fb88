use crate::{corpus::Problem, matcher::MatchHit};

/// Orders hits by descending score.
///
/// `sort_by` is stable, and `matcher::scan` yields hits in corpus insertion
/// order, so equal scores keep their original relative order.
pub fn rank<'a, I>(hits: I) -> Vec<&'a Problem>
where
	I: IntoIterator<Item = MatchHit<'a>>,
{
	let mut hits = hits.into_iter().collect::<Vec<_>>();

	hits.sort_by(|a, b| b.score.cmp(&a.score));

	hits.into_iter().map(|hit| hit.record).collect()
}
