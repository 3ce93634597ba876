/// All primes `<= limit`, ascending.
pub fn sieve_of_eratosthenes(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut composite = vec![false; limit + 1];
    let mut i = 2;
    while i * i <= limit {
        if !composite[i] {
            for multiple in (i * i..=limit).step_by(i) {
                composite[multiple] = true;
            }
        }
        i += 1;
    }
    (2..=limit).filter(|&n| !composite[n]).collect()
}

pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
