/// Format a count with its English ordinal suffix (`1st`, `2nd`, `11th`, ...).
pub fn ordinal(n: u64) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
