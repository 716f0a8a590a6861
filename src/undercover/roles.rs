//! Role assignment for undercover matches
//!
//! This module deals secret roles and words to a roster of names. The
//! rules guarantee that the bad guys (undercovers plus Mr. White) never
//! outnumber half of the table at deal time: Mr. White is the first to
//! be dropped when the requested count would break the bound, and the
//! undercover count itself is clamped as a last resort.

use itertools::Itertools;

use crate::{catalog::Topic, constants::undercover::MYSTERY_WORD};

use super::{Player, Role};

/// Maximum number of non-citizen roles for a table of `player_count`
///
/// Citizens must hold at least half of the seats, rounded up.
pub fn max_bad_guys(player_count: usize) -> usize {
    player_count / 2
}

/// Deals roles and secret words to the given names
///
/// The names are shuffled into a uniformly random seat order. One
/// Mr. White is included whenever he fits under the [`max_bad_guys`]
/// bound together with the requested undercovers; his seat is drawn
/// uniformly and independently of the shuffle, and he does not count
/// against the undercover quota. The first `undercover_count` non-White
/// seats become undercovers with the decoy word; everyone else is a
/// citizen with the real word. Mr. White gets [`MYSTERY_WORD`].
///
/// Callers clamp `undercover_count` to `[1, player_count / 2]` before
/// calling; the clamp is repeated here only as the Mr.-White fallback.
pub fn assign(
    names: &[String],
    undercover_count: usize,
    topic: &Topic,
    rng: &mut fastrand::Rng,
) -> Vec<Player> {
    let mut seats = names.to_vec();
    rng.shuffle(&mut seats);

    let limit = max_bad_guys(seats.len());
    let has_mr_white = undercover_count + 1 <= limit;
    let undercover_count = if has_mr_white {
        undercover_count
    } else {
        undercover_count.min(limit)
    };
    let mr_white_seat = has_mr_white.then(|| rng.usize(..seats.len()));

    let mut undercovers_left = undercover_count;
    seats
        .into_iter()
        .enumerate()
        .map(|(seat, name)| {
            let (role, word) = if Some(seat) == mr_white_seat {
                (Role::MrWhite, MYSTERY_WORD.to_owned())
            } else if undercovers_left > 0 {
                undercovers_left -= 1;
                (Role::Undercover, topic.fake.clone())
            } else {
                (Role::Citizen, topic.word.clone())
            };
            Player {
                name,
                role,
                word,
                alive: true,
            }
        })
        .collect_vec()
}
