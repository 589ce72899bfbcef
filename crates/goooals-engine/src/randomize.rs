//! Bounded re-randomization of the numbers embedded in free text.

use rand::Rng;

use goooals_core::text::digit_runs;

/// Jitter used when the user re-rolls a single subgoal or criterion.
pub const SINGLE_ITEM_JITTER: f64 = 0.20;

/// Jitter used by the "randomize all" batch operation.
pub const BATCH_JITTER: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randomized {
    pub text: String,
    pub changed: bool,
}

/// Perturb every decimal digit run in `text` by a relative jitter drawn
/// uniformly from `[-jitter, +jitter]`.
///
/// Every number found is guaranteed to change and to stay positive: a
/// result that rounds to the same value or to zero is bumped to `n + 1`.
/// Runs of any length are accepted; past 38 significant digits only the
/// leading digits are jittered, which keeps the relative bound.
/// Replacement works on the token positions of the input, so digits written
/// for one token are never re-matched for the next.
pub fn randomize_numbers<R: Rng + ?Sized>(text: &str, jitter: f64, rng: &mut R) -> Randomized {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut changed = false;

    for run in digit_runs(text) {
        out.push_str(&text[cursor..run.start]);
        out.push_str(&jitter_token(&text[run.clone()], jitter, rng));
        cursor = run.end;
        changed = true;
    }

    if !changed {
        return Randomized {
            text: text.to_string(),
            changed: false,
        };
    }

    out.push_str(&text[cursor..]);
    Randomized { text: out, changed }
}

// Any run of at most this many digits fits in a u128.
const EXACT_DIGITS: usize = 38;

fn jitter_token<R: Rng + ?Sized>(token: &str, jitter: f64, rng: &mut R) -> String {
    let digits = token.trim_start_matches('0');
    if digits.len() <= EXACT_DIGITS {
        // All zeros leaves an empty run, which is the number 0.
        let n = digits.parse().unwrap_or_default();
        return jitter_number(n, jitter, rng).to_string();
    }

    let (head, tail) = digits.split_at(EXACT_DIGITS);
    let head = jitter_number(head.parse().unwrap_or_default(), jitter, rng);
    format!("{head}{tail}")
}

fn jitter_number<R: Rng + ?Sized>(n: u128, jitter: f64, rng: &mut R) -> u128 {
    let jitter = jitter.abs();
    let factor = 1.0 + rng.gen_range(-jitter..=jitter);
    let scaled = (n as f64 * factor).round();

    let next = if scaled <= 0.0 { bump(n) } else { scaled as u128 };
    if next == n { bump(n) } else { next }
}

fn bump(n: u128) -> u128 {
    n.checked_add(1).unwrap_or_else(|| n - 1)
}
