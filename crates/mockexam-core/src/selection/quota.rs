use rand::Rng;
use rand::seq::IndexedRandom;

/// Splits `count` over pools of the given sizes, max-min fair.
///
/// Every pool first gets an equal share; pools that cannot cover their share
/// give everything they have and the shortfall flows to the pools that still
/// have questions left. When the split does not divide evenly the leftover
/// single slots go to pools picked at random, so no pool is favoured across
/// calls. The result never exceeds a pool's size and sums to
/// `min(count, total)`.
pub(crate) fn allocate<R: Rng + ?Sized>(available: &[usize], count: usize, rng: &mut R) -> Vec<usize> {
    let mut allocation = vec![0; available.len()];
    let mut remaining = count.min(available.iter().sum());

    while remaining > 0 {
        let open: Vec<usize> = (0..available.len())
            .filter(|&i| allocation[i] < available[i])
            .collect();
        if open.is_empty() {
            break;
        }

        let share = remaining / open.len();
        if share == 0 {
            for &i in open.choose_multiple(rng, remaining) {
                allocation[i] += 1;
            }
            break;
        }

        for &i in &open {
            let grant = share.min(available[i] - allocation[i]);
            allocation[i] += grant;
            remaining -= grant;
        }
    }

    allocation
}
