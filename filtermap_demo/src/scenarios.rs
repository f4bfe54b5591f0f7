use filtermap::{filter, map};

pub fn numbers() -> Vec<i32> {
    (1..=10).collect()
}

pub fn words() -> Vec<String> {
    ["tout", "titi", "ototo", "jean", "tous", "taratata"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

/// Wraps on overflow.
pub fn double(x: &i32) -> i32 {
    x.wrapping_mul(2)
}

/// Counts `t` and `T` alike.
pub fn has_at_least_two_t(s: &String) -> bool {
    s.chars().filter(|c| *c == 't' || *c == 'T').take(2).count() == 2
}

pub fn to_upper(s: &String) -> String {
    s.to_uppercase()
}

pub fn even_doubled(ints: &[i32]) -> Vec<i32> {
    map(&filter(ints, is_even), double)
}

pub fn shouted_t_words(strs: &[String]) -> Vec<String> {
    map(&filter(strs, has_at_least_two_t), to_upper)
}
