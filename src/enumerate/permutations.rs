/// All orderings of every non-empty subset of the digits, positions
/// distinguishable. The recursion inserts the first digit at every position
/// of each permutation of the rest, so permutations of every length
/// 1..=|digits| fall out of the construction. That is intentional: the
/// sub-length yield is the source of every contiguous-numeral base string
/// the bootstrap seeds.
pub fn sub_permutations(digits: &[char]) -> Vec<Vec<char>> {
    let Some((&first, rest)) = digits.split_first() else {
        return Vec::new();
    };

    let mut results = vec![vec![first]];
    for permu in sub_permutations(rest) {
        results.push(permu.clone());
        for i in 0..=permu.len() {
            let mut inserted = permu.clone();
            inserted.insert(i, first);
            results.push(inserted);
        }
    }
    results
}
