//! Trial-division prime sieve.

/// All primes `<= n`, in ascending order.
///
/// Odd candidates are tested against odd divisors up to their square root.
/// Returns an empty vector for `n < 2`.
pub fn compute_primes(n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    if n < 2 {
        return primes;
    }
    primes.push(2);

    let mut candidate = 3;
    while candidate <= n {
        if is_odd_prime(candidate) {
            primes.push(candidate);
        }
        candidate += 2;
    }
    primes
}

fn is_odd_prime(candidate: u64) -> bool {
    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Primes `<= n` lying strictly between `low` and `high`.
pub fn primes_between(n: u64, low: u64, high: u64) -> Vec<u64> {
    compute_primes(n)
        .into_iter()
        .filter(|&p| p > low && p < high)
        .collect()
}
