/// All size-n sub-sequences of the digits without repetition, treating
/// positions as distinguishable: repeated digit values yield
/// position-distinct combinations, collapsed later by canonical key.
pub fn combinations(digits: &[char], n: usize) -> Vec<Vec<char>> {
    if n == 0 || n > digits.len() {
        return Vec::new();
    }
    if n == 1 {
        return digits.iter().map(|&d| vec![d]).collect();
    }

    let mut results = Vec::new();
    for i in 0..=digits.len() - n {
        for tail in combinations(&digits[i + 1..], n - 1) {
            let mut comb = Vec::with_capacity(n);
            comb.push(digits[i]);
            comb.extend(tail);
            results.push(comb);
        }
    }
    results
}
