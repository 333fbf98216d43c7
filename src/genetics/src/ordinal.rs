/// English ordinal suffix of a 1-based index. e.g. `1` -> `"st"`, `12` -> `"th"`
///
/// Only the values 1, 2 and 3 receive a dedicated suffix: `21` renders as `"21th"`.
/// Undefined for `0`.
#[must_use]
pub fn ordinal_suffix(n: usize) -> &'static str {
    debug_assert!(n != 0, "ordinal indices start at 1");
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
